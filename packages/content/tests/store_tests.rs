use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use content::{
    load_external_news, load_remote_content, resolve_deep_link, Collection, ContentConfig, ContentSource,
    ContentStore, FetchError, GalleryItem, Lang, Lightbox, PendingDeepLink, ProjectBrowser,
    ProjectView,
};

/// Serves canned responses per path and records every request.
#[derive(Default)]
struct ScriptedSource {
    responses: HashMap<String, Result<String, u16>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedSource {
    fn with(mut self, path: &str, response: Result<&str, u16>) -> Self {
        self.responses
            .insert(path.to_string(), response.map(str::to_string));
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ContentSource for ScriptedSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(path.to_string());
        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Transport("connection refused".to_string())),
        }
    }
}

async fn hydrate(source: &ScriptedSource) -> ContentStore {
    let mut store = ContentStore::new();
    let result = load_remote_content(source, &ContentConfig::default()).await;
    store.apply_remote(result);
    store
}

const THREE_PROJECTS: &str = r#"{
  "PROJECTS": {
    "en": [
      { "id": "a", "title": "A", "image": "https://x/a.jpg", "gallery": [{ "image": "https://x/1.jpg" }] },
      { "id": "b", "title": "B", "image": "https://x/b.jpg" },
      { "id": "c", "title": "C", "image": "https://x/c.jpg", "gallery": ["https://x/c2.jpg"] }
    ]
  }
}"#;

#[test]
fn every_collection_is_populated_before_any_load() {
    let mut store = ContentStore::new();
    for lang in Lang::ALL {
        store.set_language(lang);
        for collection in Collection::ALL {
            assert!(
                !store.slice(collection).is_empty(),
                "{} empty for {}",
                collection.key(),
                lang.code()
            );
        }
    }
}

#[tokio::test]
async fn remote_success_replaces_projects_and_normalizes_gallery() {
    let source = ScriptedSource::default().with("./data/content.json", Ok(THREE_PROJECTS));
    let defaults = ContentStore::new();
    assert_eq!(defaults.projects().len(), 5);

    let store = hydrate(&source).await;

    assert!(store.is_hydrated());
    assert_eq!(store.projects().len(), 3);
    assert_eq!(store.projects()[0].gallery, vec!["https://x/1.jpg".to_string()]);
    assert_eq!(source.requests(), vec!["./data/content.json".to_string()]);
}

#[tokio::test]
async fn untouched_collections_keep_their_defaults() {
    let source = ScriptedSource::default().with("./data/content.json", Ok(THREE_PROJECTS));
    let defaults = ContentStore::new();

    let store = hydrate(&source).await;

    let before = defaults.bundle();
    let after = store.bundle();
    assert_eq!(after.interior_projects, before.interior_projects);
    assert_eq!(after.services, before.services);
    assert_eq!(after.premium_services, before.premium_services);
    assert_eq!(after.team, before.team);
    assert_eq!(after.partners, before.partners);
    assert_eq!(after.testimonials, before.testimonials);
    assert_eq!(after.blog_posts, before.blog_posts);
    assert_eq!(after.translations, before.translations);
    assert_ne!(after.projects, before.projects);
}

#[tokio::test]
async fn network_failure_keeps_defaults() {
    let source = ScriptedSource::default();
    let defaults = ContentStore::new();

    let store = hydrate(&source).await;

    assert!(store.is_hydrated());
    assert_eq!(store.projects().len(), 5);
    assert_eq!(store.bundle(), defaults.bundle());
}

#[tokio::test]
async fn second_path_is_tried_after_a_bad_status() {
    let source = ScriptedSource::default()
        .with("./data/content.json", Err(404))
        .with("data/content.json", Ok(THREE_PROJECTS));

    let store = hydrate(&source).await;

    assert_eq!(store.projects().len(), 3);
    assert_eq!(
        source.requests(),
        vec!["./data/content.json".to_string(), "data/content.json".to_string()]
    );
}

#[tokio::test]
async fn each_path_is_attempted_once() {
    let source = ScriptedSource::default()
        .with("./data/content.json", Err(500))
        .with("data/content.json", Ok("{ broken"));

    let result = load_remote_content(&source, &ContentConfig::default()).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
    assert_eq!(source.requests().len(), 2);
}

#[tokio::test]
async fn no_paths_is_an_error_not_a_panic() {
    let config = ContentConfig {
        content_paths: Vec::new(),
        ..ContentConfig::default()
    };
    let result = load_remote_content(&ScriptedSource::default(), &config).await;
    assert!(matches!(result, Err(FetchError::NoPaths)));
}

#[tokio::test]
async fn one_bad_collection_does_not_discard_the_others() {
    let doc = r#"{
        "TEAM": { "en": [{ "id": "t9", "name": "Eng. Lina" }] },
        "PROJECTS": { "en": [{ "id": "x", "title": "X", "year": 2021, "description": null }] },
        "PARTNERS": { "en": 42 }
    }"#;
    let source = ScriptedSource::default().with("./data/content.json", Ok(doc));
    let defaults = ContentStore::new();

    let store = hydrate(&source).await;

    assert_eq!(store.team().len(), 1);
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.projects()[0].year, "2021");
    assert_eq!(store.bundle().partners, defaults.bundle().partners);
}

#[tokio::test]
async fn english_only_collection_serves_arabic_readers() {
    let doc = r#"{ "TEAM": { "en": [{ "id": "t9", "name": "Eng. Lina" }] } }"#;
    let source = ScriptedSource::default().with("./data/content.json", Ok(doc));

    let mut store = hydrate(&source).await;
    store.set_language(Lang::Ar);

    assert_eq!(store.team().len(), 1);
    assert_eq!(store.team()[0].name, "Eng. Lina");
}

#[tokio::test]
async fn language_toggle_and_load_interleave() {
    let source = ScriptedSource::default().with("./data/content.json", Ok(THREE_PROJECTS));
    let mut store = ContentStore::new();
    store.toggle_language();

    let result = load_remote_content(&source, &ContentConfig::default()).await;
    store.apply_remote(result);

    // The document had no Arabic slice, so Arabic readers see the English one.
    assert_eq!(store.language(), Lang::Ar);
    assert_eq!(store.projects().len(), 3);
    store.toggle_language();
    assert_eq!(store.projects()[2].id, "c");
}

#[test]
fn deep_link_opens_the_owning_dataset() {
    let store = ContentStore::new();

    let link = resolve_deep_link("i1", &store).expect("interior id resolves");
    assert_eq!(link.view, ProjectView::Interior);

    let project = store
        .projects_in(link.view)
        .iter()
        .find(|p| p.id == link.project_id)
        .expect("project in its dataset");
    let mut lightbox = Lightbox::for_item(project);
    lightbox.open_primary();
    assert_eq!(lightbox.current_image(), Some(project.image.as_str()));
    assert_eq!(lightbox.len(), project.images().len());

    assert!(resolve_deep_link("not-a-project", &store).is_none());
}

#[tokio::test]
async fn deep_link_to_a_cms_only_project_opens_after_the_load() {
    let doc = r#"{
        "INTERIOR_PROJECTS": { "en": [{ "id": "p-new", "title": "Loft", "image": "https://x/loft.jpg" }] }
    }"#;
    let source = ScriptedSource::default().with("./data/content.json", Ok(doc));
    let mut store = ContentStore::new();
    let mut pending = PendingDeepLink::default();
    let mut browser = ProjectBrowser::default();

    pending.request(Some("p-new"));
    assert_eq!(pending.poll(&store), None);

    let result = load_remote_content(&source, &ContentConfig::default()).await;
    store.apply_remote(result);

    let link = pending.poll(&store).expect("resolves once the document is applied");
    browser.open_deep_link(link);
    assert_eq!(browser.view(), ProjectView::Interior);
    assert_eq!(browser.selected(), Some("p-new"));
    assert_eq!(pending.poll(&store), None);
}

const FEED_REQUEST: &str =
    "https://api.rss2json.com/v1/api.json?rss_url=https%3A%2F%2Fwww.archdaily.com%2Ffeed%2Frss%2F";

#[tokio::test]
async fn news_feed_maps_items_to_external_posts() {
    let feed = r#"{
        "status": "ok",
        "items": [{
            "title": "Museum",
            "pubDate": "2024-05-02 10:15:00",
            "description": "<p>A <em>new</em> museum</p>",
            "enclosure": { "link": "https://img/museum.jpg" },
            "author": "Staff",
            "link": "https://news.example/museum"
        }]
    }"#;
    let source = ScriptedSource::default().with(FEED_REQUEST, Ok(feed));
    let config = ContentConfig::default();

    let posts = load_external_news(&source, &config.news_rss_url)
        .await
        .expect("feed loads");

    assert_eq!(source.requests(), vec![FEED_REQUEST.to_string()]);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "ext-0");
    assert_eq!(posts[0].excerpt, "A new museum...");
    assert_eq!(posts[0].image, "https://img/museum.jpg");
    assert!(posts[0].is_external);
}

#[tokio::test]
async fn news_feed_failure_is_reported() {
    let source = ScriptedSource::default().with(FEED_REQUEST, Err(503));
    let result = load_external_news(&source, content::news::NEWS_RSS_URL).await;
    assert!(matches!(result, Err(FetchError::Status(503))));

    let source = ScriptedSource::default().with(FEED_REQUEST, Ok(r#"{ "status": "error" }"#));
    let result = load_external_news(&source, content::news::NEWS_RSS_URL).await;
    assert!(matches!(result, Err(FetchError::Feed(_))));
}
