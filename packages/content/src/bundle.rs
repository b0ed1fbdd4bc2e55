use serde::{Deserialize, Serialize};

use crate::lang::Lang;
use crate::types::{BlogPost, Partner, Project, Service, TeamMember, Testimonial, Translations};

/// Compiled-in content for every collection in both languages.
pub const DEFAULT_CONTENT: &str = include_str!("../data/defaults.json");

static EMPTY_TRANSLATIONS: Translations = Translations::EMPTY;

/// The named collections of a content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Translations,
    Projects,
    InteriorProjects,
    Services,
    PremiumServices,
    Team,
    Partners,
    Testimonials,
    BlogPosts,
}

impl Collection {
    pub const ALL: [Collection; 9] = [
        Collection::Translations,
        Collection::Projects,
        Collection::InteriorProjects,
        Collection::Services,
        Collection::PremiumServices,
        Collection::Team,
        Collection::Partners,
        Collection::Testimonials,
        Collection::BlogPosts,
    ];

    /// Top-level key in the content document.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Translations => "TRANSLATIONS",
            Collection::Projects => "PROJECTS",
            Collection::InteriorProjects => "INTERIOR_PROJECTS",
            Collection::Services => "SERVICES",
            Collection::PremiumServices => "PREMIUM_SERVICES",
            Collection::Team => "TEAM",
            Collection::Partners => "PARTNERS",
            Collection::Testimonials => "TESTIMONIALS",
            Collection::BlogPosts => "INTERNAL_BLOG_POSTS",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Collections whose items carry a `gallery` field.
    pub fn has_gallery(self) -> bool {
        matches!(
            self,
            Collection::Projects | Collection::InteriorProjects | Collection::Partners
        )
    }
}

/// Emptiness check used by the language fallback.
pub trait SliceContent {
    fn is_blank(&self) -> bool;
}

impl<T> SliceContent for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SliceContent for Translations {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// One collection, keyed by language code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Localized<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<T>,
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self { en: None, ar: None }
    }
}

impl<T: SliceContent> Localized<T> {
    pub fn new(en: T, ar: T) -> Self {
        Self {
            en: Some(en),
            ar: Some(ar),
        }
    }

    /// The slice for `lang`, or the English slice when `lang`'s is absent or empty.
    pub fn get(&self, lang: Lang) -> Option<&T> {
        let own = match lang {
            Lang::En => self.en.as_ref(),
            Lang::Ar => self.ar.as_ref(),
        };
        own.filter(|slice| !slice.is_blank()).or(self.en.as_ref())
    }
}

/// The full set of per-language collections served to the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContentBundle {
    pub translations: Localized<Translations>,
    pub projects: Localized<Vec<Project>>,
    pub interior_projects: Localized<Vec<Project>>,
    pub services: Localized<Vec<Service>>,
    pub premium_services: Localized<Vec<Service>>,
    pub team: Localized<Vec<TeamMember>>,
    pub partners: Localized<Vec<Partner>>,
    pub testimonials: Localized<Vec<Testimonial>>,
    #[serde(rename = "INTERNAL_BLOG_POSTS")]
    pub blog_posts: Localized<Vec<BlogPost>>,
}

/// A decoded remote document. Every collection is optional; absent ones
/// leave the bundle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContentPatch {
    #[serde(default)]
    pub translations: Option<Localized<Translations>>,
    #[serde(default)]
    pub projects: Option<Localized<Vec<Project>>>,
    #[serde(default)]
    pub interior_projects: Option<Localized<Vec<Project>>>,
    #[serde(default)]
    pub services: Option<Localized<Vec<Service>>>,
    #[serde(default)]
    pub premium_services: Option<Localized<Vec<Service>>>,
    #[serde(default)]
    pub team: Option<Localized<Vec<TeamMember>>>,
    #[serde(default)]
    pub partners: Option<Localized<Vec<Partner>>>,
    #[serde(default)]
    pub testimonials: Option<Localized<Vec<Testimonial>>>,
    #[serde(default, rename = "INTERNAL_BLOG_POSTS")]
    pub blog_posts: Option<Localized<Vec<BlogPost>>>,
}

impl ContentPatch {
    /// Collections present in this patch, in document order.
    pub fn collections(&self) -> Vec<Collection> {
        let present = [
            self.translations.is_some(),
            self.projects.is_some(),
            self.interior_projects.is_some(),
            self.services.is_some(),
            self.premium_services.is_some(),
            self.team.is_some(),
            self.partners.is_some(),
            self.testimonials.is_some(),
            self.blog_posts.is_some(),
        ];
        Collection::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(c, p)| p.then_some(c))
            .collect()
    }
}

/// Borrowed view of one collection's slice for one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slice<'a> {
    Translations(&'a Translations),
    Projects(&'a [Project]),
    Services(&'a [Service]),
    Team(&'a [TeamMember]),
    Partners(&'a [Partner]),
    Testimonials(&'a [Testimonial]),
    BlogPosts(&'a [BlogPost]),
}

impl Slice<'_> {
    /// Item count; for translations, the number of top-level sections.
    pub fn len(&self) -> usize {
        match self {
            Slice::Translations(t) => t.sections(),
            Slice::Projects(items) => items.len(),
            Slice::Services(items) => items.len(),
            Slice::Team(items) => items.len(),
            Slice::Partners(items) => items.len(),
            Slice::Testimonials(items) => items.len(),
            Slice::BlogPosts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn list<T>(collection: &Localized<Vec<T>>, lang: Lang) -> &[T] {
    collection.get(lang).map(Vec::as_slice).unwrap_or(&[])
}

impl ContentBundle {
    /// The compiled-in bundle. A decode failure here is a build defect caught
    /// by tests; at runtime it degrades to an empty bundle.
    pub fn defaults() -> Self {
        match Self::from_json(DEFAULT_CONTENT) {
            Ok(bundle) => bundle,
            Err(err) => {
                tracing::error!("content.defaults: bundled content failed to decode: {err}");
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Replaces every collection present in `patch` wholesale and returns the
    /// replaced collections. Items are never spliced.
    pub fn merge(&mut self, patch: ContentPatch) -> Vec<Collection> {
        let replaced = patch.collections();
        let ContentPatch {
            translations,
            projects,
            interior_projects,
            services,
            premium_services,
            team,
            partners,
            testimonials,
            blog_posts,
        } = patch;

        if let Some(v) = translations {
            self.translations = v;
        }
        if let Some(v) = projects {
            self.projects = v;
        }
        if let Some(v) = interior_projects {
            self.interior_projects = v;
        }
        if let Some(v) = services {
            self.services = v;
        }
        if let Some(v) = premium_services {
            self.premium_services = v;
        }
        if let Some(v) = team {
            self.team = v;
        }
        if let Some(v) = partners {
            self.partners = v;
        }
        if let Some(v) = testimonials {
            self.testimonials = v;
        }
        if let Some(v) = blog_posts {
            self.blog_posts = v;
        }
        replaced
    }

    pub fn translations(&self, lang: Lang) -> &Translations {
        self.translations.get(lang).unwrap_or(&EMPTY_TRANSLATIONS)
    }

    pub fn projects(&self, lang: Lang) -> &[Project] {
        list(&self.projects, lang)
    }

    pub fn interior_projects(&self, lang: Lang) -> &[Project] {
        list(&self.interior_projects, lang)
    }

    pub fn services(&self, lang: Lang) -> &[Service] {
        list(&self.services, lang)
    }

    pub fn premium_services(&self, lang: Lang) -> &[Service] {
        list(&self.premium_services, lang)
    }

    pub fn team(&self, lang: Lang) -> &[TeamMember] {
        list(&self.team, lang)
    }

    pub fn partners(&self, lang: Lang) -> &[Partner] {
        list(&self.partners, lang)
    }

    pub fn testimonials(&self, lang: Lang) -> &[Testimonial] {
        list(&self.testimonials, lang)
    }

    pub fn blog_posts(&self, lang: Lang) -> &[BlogPost] {
        list(&self.blog_posts, lang)
    }

    pub fn slice(&self, collection: Collection, lang: Lang) -> Slice<'_> {
        match collection {
            Collection::Translations => Slice::Translations(self.translations(lang)),
            Collection::Projects => Slice::Projects(self.projects(lang)),
            Collection::InteriorProjects => Slice::Projects(self.interior_projects(lang)),
            Collection::Services => Slice::Services(self.services(lang)),
            Collection::PremiumServices => Slice::Services(self.premium_services(lang)),
            Collection::Team => Slice::Team(self.team(lang)),
            Collection::Partners => Slice::Partners(self.partners(lang)),
            Collection::Testimonials => Slice::Testimonials(self.testimonials(lang)),
            Collection::BlogPosts => Slice::BlogPosts(self.blog_posts(lang)),
        }
    }
}
