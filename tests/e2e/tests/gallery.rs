use content::{resolve_deep_link, ContentStore};
use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
#[ignore = "needs Chrome and starts the web server"]
async fn test_deep_link_opens_interior_project() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let store = ContentStore::new();
    let link = resolve_deep_link("i2", &store).expect("i2 is an interior project");
    let expected = store
        .projects_in(link.view)
        .iter()
        .find(|p| p.id == link.project_id)
        .map(|p| p.title.clone())
        .expect("project exists");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&format!("{}/projects?project=i2", server.url()))
        .expect("Failed to navigate");

    let title = page
        .find_element(".project_detail h2")
        .expect("Detail overlay should open");
    assert_eq!(title.trim(), expected);
}

#[tokio::test]
#[ignore = "needs Chrome and starts the web server"]
async fn test_lightbox_opens_and_closes_with_escape() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&format!("{}/projects?project=1", server.url()))
        .expect("Failed to navigate");

    page.click(".gallery_primary").expect("Primary image should be clickable");
    let counter = page
        .find_element(".lightbox_counter")
        .expect("Lightbox should open");
    assert!(counter.starts_with("1 /"), "unexpected counter {counter}");
    assert_eq!(
        page.eval_string("document.body.style.overflow").expect("eval"),
        Some("hidden".to_string())
    );

    page.press_key("ArrowRight").expect("key press");
    let counter = page.find_element(".lightbox_counter").expect("still open");
    assert!(counter.starts_with("2 /"), "unexpected counter {counter}");

    page.press_key("Escape").expect("key press");
    let still_open = page
        .eval_string("document.querySelector('.lightbox') ? 'open' : 'closed'")
        .expect("eval");
    assert_eq!(still_open.as_deref(), Some("closed"));
}

#[tokio::test]
#[ignore = "needs Chrome and starts the web server"]
async fn test_language_toggle_switches_direction() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click(".lang_toggle").expect("Toggle should exist");
    let dir = page
        .eval_string("document.documentElement.dir")
        .expect("eval");
    assert_eq!(dir.as_deref(), Some("rtl"));
}
