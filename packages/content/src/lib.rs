//! This crate contains the site's content model and the state shared by every page:
//! the bundled defaults, the optional CMS document that overrides them, the
//! language-aware [`ContentStore`], the gallery/lightbox navigator and the
//! external news feed.

pub mod bundle;
pub mod config;
pub mod gallery;
pub mod lang;
pub mod news;
pub mod normalize;
pub mod source;
pub mod store;
pub mod types;


pub use bundle::{Collection, ContentBundle, ContentPatch, Localized, Slice};
pub use config::ContentConfig;
pub use gallery::{
    find_owning_dataset, intent_for_key, intent_for_swipe, resolve_deep_link, DeepLink, Lightbox,
    LightboxState, NavKey, NavigationIntent, PendingDeepLink, ProjectBrowser, ProjectView,
};
pub use lang::{Direction, Lang};
pub use news::{load_external_news, parse_feed, NewsFeed};
pub use source::{load_remote_content, ContentSource, FetchError, HttpSource};
pub use store::ContentStore;
pub use types::{
    BlogPost, GalleryItem, Identified, Partner, Project, Service, Spec, TeamMember, Testimonial,
    Translations,
};
