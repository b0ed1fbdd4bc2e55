//! Lightbox navigation for project and partner galleries, plus the deep-link
//! resolution that decides which project dataset owns an incoming id.

use crate::lang::{Direction, Lang};
use crate::store::ContentStore;
use crate::types::{GalleryItem, Project};

/// Which image, if any, is shown enlarged. `Open` indices are always `< n`
/// for the sequence length `n` they were computed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    /// Opens at `index`, reduced modulo `n`. Stays closed for an empty sequence.
    pub fn open(index: usize, n: usize) -> Self {
        if n == 0 {
            return LightboxState::Closed;
        }
        LightboxState::Open(index % n)
    }

    pub fn next(self, n: usize) -> Self {
        match self {
            LightboxState::Open(i) if n > 0 => LightboxState::Open((i % n + 1) % n),
            _ => LightboxState::Closed,
        }
    }

    pub fn prev(self, n: usize) -> Self {
        match self {
            LightboxState::Open(i) if n > 0 => LightboxState::Open((i % n + n - 1) % n),
            _ => LightboxState::Closed,
        }
    }

    pub fn close(self) -> Self {
        LightboxState::Closed
    }

    pub fn apply(self, intent: NavigationIntent, n: usize) -> Self {
        match intent {
            NavigationIntent::Next => self.next(n),
            NavigationIntent::Prev => self.prev(n),
            NavigationIntent::Close => self.close(),
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            LightboxState::Open(i) => Some(i),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, LightboxState::Open(_))
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl NavKey {
    /// Parses a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Escape" | "Esc" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Next,
    Prev,
    Close,
}

/// Maps a key to an intent so that "next" is always the visually forward
/// direction: ArrowRight in left-to-right, ArrowLeft in right-to-left.
pub fn intent_for_key(key: NavKey, direction: Direction) -> NavigationIntent {
    match (key, direction) {
        (NavKey::Escape, _) => NavigationIntent::Close,
        (NavKey::ArrowRight, Direction::Ltr) | (NavKey::ArrowLeft, Direction::Rtl) => {
            NavigationIntent::Next
        }
        (NavKey::ArrowLeft, Direction::Ltr) | (NavKey::ArrowRight, Direction::Rtl) => {
            NavigationIntent::Prev
        }
    }
}

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Maps a horizontal swipe of `dx` pixels (end minus start) to an intent.
/// Swiping left acts like ArrowRight, so it follows the same direction rule.
pub fn intent_for_swipe(dx: f64, direction: Direction) -> Option<NavigationIntent> {
    if dx <= -SWIPE_THRESHOLD {
        Some(intent_for_key(NavKey::ArrowRight, direction))
    } else if dx >= SWIPE_THRESHOLD {
        Some(intent_for_key(NavKey::ArrowLeft, direction))
    } else {
        None
    }
}

/// An effective image sequence together with its lightbox state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    state: LightboxState,
    // Offset of the first thumbnail: 1 when a primary image leads the sequence.
    thumbnail_offset: usize,
}

impl Lightbox {
    pub fn for_item<T: GalleryItem + ?Sized>(item: &T) -> Self {
        Self {
            images: item.images(),
            state: LightboxState::Closed,
            thumbnail_offset: item.thumbnail_index(0),
        }
    }

    pub fn from_images(images: Vec<String>) -> Self {
        Self {
            images,
            state: LightboxState::Closed,
            thumbnail_offset: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Images shown as thumbnails under the primary image.
    pub fn thumbnails(&self) -> &[String] {
        self.images.get(self.thumbnail_offset..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn open(&mut self, index: usize) {
        self.state = LightboxState::open(index, self.len());
    }

    pub fn open_primary(&mut self) {
        self.open(0);
    }

    pub fn open_thumbnail(&mut self, k: usize) {
        self.open(k + self.thumbnail_offset);
    }

    pub fn next(&mut self) {
        self.state = self.state.next(self.len());
    }

    pub fn prev(&mut self) {
        self.state = self.state.prev(self.len());
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Applies a key press; keys with no meaning leave the state unchanged.
    pub fn handle_key(&mut self, key: NavKey, direction: Direction) {
        if !self.state.is_open() {
            return;
        }
        self.state = self.state.apply(intent_for_key(key, direction), self.len());
    }

    pub fn handle_swipe(&mut self, dx: f64, direction: Direction) {
        if !self.state.is_open() {
            return;
        }
        if let Some(intent) = intent_for_swipe(dx, direction) {
            self.state = self.state.apply(intent, self.len());
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.state
            .index()
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// One-based position for the "3 / 7" counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.state.index().map(|i| (i + 1, self.len()))
    }

    /// Background scrolling is suppressed while an image is enlarged.
    pub fn locks_scroll(&self) -> bool {
        self.state.is_open()
    }
}

/// The two sibling project datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectView {
    #[default]
    Exterior,
    Interior,
}

impl ProjectView {
    pub fn other(self) -> Self {
        match self {
            ProjectView::Exterior => ProjectView::Interior,
            ProjectView::Interior => ProjectView::Exterior,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectView::Exterior => "exterior",
            ProjectView::Interior => "interior",
        }
    }
}

/// Finds the dataset holding `id` by searching both before committing to one.
pub fn find_owning_dataset<'a>(
    id: &str,
    exterior: &'a [Project],
    interior: &'a [Project],
) -> Option<(ProjectView, &'a Project)> {
    [
        (ProjectView::Exterior, exterior),
        (ProjectView::Interior, interior),
    ]
    .into_iter()
    .find_map(|(view, items)| items.iter().find(|p| p.id == id).map(|p| (view, p)))
}

/// Outcome of an incoming `?project=<id>` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub view: ProjectView,
    pub project_id: String,
}

/// Resolves a deep-linked project id against the store's current language.
/// `None` means the id is unknown and nothing should open.
pub fn resolve_deep_link(id: &str, store: &ContentStore) -> Option<DeepLink> {
    let resolved = find_owning_dataset(id, store.projects(), store.interior_projects());
    match resolved {
        Some((view, project)) => Some(DeepLink {
            view,
            project_id: project.id.clone(),
        }),
        None => {
            tracing::debug!("content.gallery: deep link to unknown project {id:?}");
            None
        }
    }
}

/// A `?project=` id waiting for content that can resolve it.
///
/// The id may only exist in the CMS document, so it is polled again whenever
/// the store changes and applied the first time it resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDeepLink {
    requested: Option<String>,
    applied: bool,
}

impl PendingDeepLink {
    /// Records the id from the current URL. Repeating the same id keeps an
    /// already applied link applied.
    pub fn request(&mut self, id: Option<&str>) {
        if self.requested.as_deref() != id {
            self.requested = id.map(str::to_string);
            self.applied = false;
        }
    }

    /// Yields the link once, as soon as `store` can resolve it.
    pub fn poll(&mut self, store: &ContentStore) -> Option<DeepLink> {
        if self.applied {
            return None;
        }
        let link = resolve_deep_link(self.requested.as_deref()?, store)?;
        self.applied = true;
        Some(link)
    }

    pub fn is_waiting(&self) -> bool {
        self.requested.is_some() && !self.applied
    }
}

/// Portfolio page state: active dataset, category filter and open project.
///
/// The filter returns to "all" whenever the view, the language or the
/// selection changes while no project is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectBrowser {
    view: ProjectView,
    category: Option<String>,
    selected: Option<String>,
    language: Option<Lang>,
}

impl ProjectBrowser {
    pub fn view(&self) -> ProjectView {
        self.view
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_view(&mut self, view: ProjectView) {
        if self.view != view {
            self.view = view;
            self.reset_filter_when_idle();
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            self.reset_filter_when_idle();
        }
    }

    /// Tracks the active language. The first call only records it.
    pub fn set_language(&mut self, language: Lang) {
        let previous = self.language.replace(language);
        if previous.is_some_and(|p| p != language) {
            self.reset_filter_when_idle();
        }
    }

    /// Switches to the dataset owning the link and opens the project.
    pub fn open_deep_link(&mut self, link: DeepLink) {
        self.view = link.view;
        self.selected = Some(link.project_id);
    }

    fn reset_filter_when_idle(&mut self) {
        if self.selected.is_none() {
            self.category = None;
        }
    }
}
