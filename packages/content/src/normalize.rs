//! Shape fixes applied to a remote document before it is decoded.
//!
//! The CMS saves list widgets as objects (`[{ "image": "https://..." }]`)
//! while the site expects plain URL strings. Flattening happens once, here,
//! so decoded items only ever carry strings.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::bundle::{Collection, ContentPatch, Localized};
use crate::lang::Lang;
use crate::source::FetchError;

/// Rewrites every non-string `gallery` entry to its `image` property, else its
/// `url` property. Entries with neither are left untouched.
///
/// Only non-empty string properties are taken, so a second pass never finds
/// anything left to flatten.
pub fn normalize_gallery_field(items: &mut [Value]) {
    for item in items.iter_mut() {
        let Some(gallery) = item.get_mut("gallery").and_then(Value::as_array_mut) else {
            continue;
        };
        for entry in gallery.iter_mut() {
            if entry.is_string() {
                continue;
            }
            let flattened = ["image", "url"].iter().find_map(|field| {
                entry
                    .get(*field)
                    .and_then(Value::as_str)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string)
            });
            if let Some(url) = flattened {
                *entry = Value::String(url);
            }
        }
    }
}

/// Normalizes the gallery-bearing collections of a whole document in place.
pub fn normalize_document(doc: &mut Value) {
    for collection in Collection::ALL.into_iter().filter(|c| c.has_gallery()) {
        let Some(localized) = doc.get_mut(collection.key()) else {
            continue;
        };
        for lang in Lang::ALL {
            if let Some(items) = localized.get_mut(lang.code()).and_then(Value::as_array_mut) {
                normalize_gallery_field(items);
            }
        }
    }
}

/// Decodes one collection. A collection that does not fit its schema is
/// dropped so the bundled one stays in place.
fn decode_collection<T: DeserializeOwned>(
    collection: Collection,
    value: Value,
) -> Option<Localized<T>> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(localized) => Some(localized),
        Err(err) => {
            tracing::warn!("content.normalize: dropping {}: {err}", collection.key());
            None
        }
    }
}

/// Parses, normalizes and decodes a remote content document, one collection
/// at a time. Only unreadable JSON or a non-object document is an error.
pub fn parse_document(text: &str) -> Result<ContentPatch, FetchError> {
    let mut doc: Value = serde_json::from_str(text).map_err(FetchError::Decode)?;
    normalize_document(&mut doc);
    let Value::Object(mut map) = doc else {
        return Err(FetchError::NotAnObject);
    };

    let mut patch = ContentPatch::default();
    for collection in Collection::ALL {
        let Some(value) = map.remove(collection.key()) else {
            continue;
        };
        match collection {
            Collection::Translations => patch.translations = decode_collection(collection, value),
            Collection::Projects => patch.projects = decode_collection(collection, value),
            Collection::InteriorProjects => {
                patch.interior_projects = decode_collection(collection, value)
            }
            Collection::Services => patch.services = decode_collection(collection, value),
            Collection::PremiumServices => {
                patch.premium_services = decode_collection(collection, value)
            }
            Collection::Team => patch.team = decode_collection(collection, value),
            Collection::Partners => patch.partners = decode_collection(collection, value),
            Collection::Testimonials => patch.testimonials = decode_collection(collection, value),
            Collection::BlogPosts => patch.blog_posts = decode_collection(collection, value),
        }
    }
    Ok(patch)
}
