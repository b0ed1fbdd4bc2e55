//! This crate contains all shared UI for the workspace.

mod content_provider;
pub use content_provider::{use_content, ContentProvider};

mod language_toggle;
pub use language_toggle::LanguageToggle;

mod lightbox;
pub use lightbox::{GalleryStrip, LightboxOverlay};

mod theme;
pub use theme::SiteTheme;

mod footer;
pub use footer::SiteFooter;

mod home;
pub use home::HomePage;

mod projects;
pub use projects::ProjectsPage;

mod services;
pub use services::ServicesPage;

mod partners;
pub use partners::{PartnerDetailPage, PartnersPage};

mod blog;
pub use blog::{BlogPage, BlogPostPage};

mod about;
pub use about::AboutPage;

mod contact;
pub use contact::{mailto_link, ContactPage};

mod not_found;
pub use not_found::NotFoundPage;
