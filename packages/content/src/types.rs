use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spec {
    #[serde(deserialize_with = "lenient_text")]
    pub label: String,
    #[serde(deserialize_with = "lenient_text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(deserialize_with = "lenient_text")]
    pub area: String,
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub specs: Vec<Spec>,
    #[serde(deserialize_with = "gallery_urls")]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    /// Icon name, resolved to a glyph by the UI.
    #[serde(deserialize_with = "lenient_text")]
    pub icon: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(deserialize_with = "lenient_text")]
    pub bio: String,
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partner {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub logo: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<String>,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub since: String,
    #[serde(deserialize_with = "lenient_text_list")]
    pub services: Vec<String>,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "gallery_urls")]
    pub gallery: Vec<String>,
}

impl Partner {
    /// The website, if one is set and non-blank.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub excerpt: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_external: bool,
}

impl BlogPost {
    /// Full text when present, otherwise the excerpt.
    pub fn body(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.excerpt)
    }

    /// Paragraphs of the body, split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body()
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Nested translation record, addressed by dotted keys such as `"nav.home"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(Value);

impl Translations {
    pub const EMPTY: Translations = Translations(Value::Null);

    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Number of top-level sections (`nav`, `hero`, ...).
    pub fn sections(&self) -> usize {
        self.0.as_object().map_or(0, |map| map.len())
    }

    /// Raw node at `key`, e.g. the list under `"about.values.items"`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.0, |node, part| node.as_object()?.get(part))
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

/// Anything that owns a stable identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Partner {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An item whose images can be browsed in the lightbox.
pub trait GalleryItem {
    fn primary_image(&self) -> Option<&str>;
    fn gallery(&self) -> &[String];

    /// Effective image sequence: the primary image first, then the gallery.
    /// A gallery entry repeating the primary is skipped.
    fn images(&self) -> Vec<String> {
        let primary = self.primary_image().filter(|p| !p.is_empty());
        primary
            .into_iter()
            .map(str::to_string)
            .chain(
                self.gallery()
                    .iter()
                    .filter(|g| Some(g.as_str()) != primary)
                    .cloned(),
            )
            .collect()
    }

    /// Lightbox index of the `k`-th thumbnail shown after the primary image.
    fn thumbnail_index(&self, k: usize) -> usize {
        match self.primary_image() {
            Some(p) if !p.is_empty() => k + 1,
            _ => k,
        }
    }
}

impl GalleryItem for Project {
    fn primary_image(&self) -> Option<&str> {
        Some(&self.image)
    }

    fn gallery(&self) -> &[String] {
        &self.gallery
    }
}

impl GalleryItem for Partner {
    // The logo is shown on its own card, not in the gallery.
    fn primary_image(&self) -> Option<&str> {
        None
    }

    fn gallery(&self) -> &[String] {
        &self.gallery
    }
}

/// Renders a CMS scalar as text. Numbers and booleans are stringified, null
/// and structured values yield `None`.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!("content.types: expected text, ignoring {other}");
            None
        }
    }
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(scalar_text).collect())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(text) => text.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// `null` decodes as the default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps the string entries of a gallery. Object entries are expected to have
/// been flattened by [`crate::normalize`]; anything left over is dropped here.
fn gallery_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(url) => Some(url),
            other => {
                tracing::warn!("content.gallery: dropping unresolved entry {other}");
                None
            }
        })
        .collect())
}
