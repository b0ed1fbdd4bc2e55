use crate::bundle::{Collection, ContentBundle, ContentPatch, Slice};
use crate::gallery::ProjectView;
use crate::lang::{Direction, Lang};
use crate::source::FetchError;
use crate::types::{BlogPost, Partner, Project, Service, TeamMember, Testimonial, Translations};

/// Single source of truth for the active language and the content every page
/// reads. The UI owns one instance and is its only writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    language: Lang,
    bundle: ContentBundle,
    hydrated: bool,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    /// English, bundled defaults, remote document not yet applied.
    pub fn new() -> Self {
        Self::with_bundle(ContentBundle::defaults())
    }

    pub fn with_bundle(bundle: ContentBundle) -> Self {
        Self {
            language: Lang::En,
            bundle,
            hydrated: false,
        }
    }

    pub fn language(&self) -> Lang {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn set_language(&mut self, lang: Lang) {
        if self.language != lang {
            tracing::debug!("content.store: language {} -> {}", self.language.code(), lang.code());
        }
        self.language = lang;
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.other());
    }

    /// Applies the outcome of the session's single remote load. `Err` keeps the
    /// current bundle. Later calls are ignored.
    pub fn apply_remote(&mut self, result: Result<ContentPatch, FetchError>) {
        if self.hydrated {
            tracing::debug!("content.store: remote content already applied, ignoring");
            return;
        }
        self.hydrated = true;

        match result {
            Ok(patch) => {
                let replaced = self.bundle.merge(patch);
                let keys: Vec<&str> = replaced.iter().map(|c| c.key()).collect();
                tracing::info!("content.store: CMS content loaded, replaced [{}]", keys.join(", "));
            }
            Err(err) => {
                tracing::warn!("content.store: using bundled content, remote load failed: {err}");
            }
        }
    }

    /// Whether the remote load has completed, successfully or not.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn bundle(&self) -> &ContentBundle {
        &self.bundle
    }

    pub fn slice(&self, collection: Collection) -> Slice<'_> {
        self.bundle.slice(collection, self.language)
    }

    pub fn translations(&self) -> &Translations {
        self.bundle.translations(self.language)
    }

    /// Translate `key`, falling back to English, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.translations()
            .text(key)
            .or_else(|| self.bundle.translations(Lang::En).text(key))
            .unwrap_or(key)
            .to_string()
    }

    pub fn projects(&self) -> &[Project] {
        self.bundle.projects(self.language)
    }

    pub fn interior_projects(&self) -> &[Project] {
        self.bundle.interior_projects(self.language)
    }

    pub fn projects_in(&self, view: ProjectView) -> &[Project] {
        match view {
            ProjectView::Exterior => self.projects(),
            ProjectView::Interior => self.interior_projects(),
        }
    }

    pub fn services(&self) -> &[Service] {
        self.bundle.services(self.language)
    }

    pub fn premium_services(&self) -> &[Service] {
        self.bundle.premium_services(self.language)
    }

    pub fn team(&self) -> &[TeamMember] {
        self.bundle.team(self.language)
    }

    pub fn partners(&self) -> &[Partner] {
        self.bundle.partners(self.language)
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.bundle.testimonials(self.language)
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        self.bundle.blog_posts(self.language)
    }

    pub fn partner_by_slug(&self, slug: &str) -> Option<&Partner> {
        self.partners().iter().find(|p| p.slug == slug)
    }

    pub fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|p| p.id == id)
    }

    /// Unique categories of a project dataset, in first-seen order.
    pub fn project_categories(&self, view: ProjectView) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in self.projects_in(view) {
            if !seen.iter().any(|c| c == &project.category) {
                seen.push(project.category.clone());
            }
        }
        seen
    }
}
