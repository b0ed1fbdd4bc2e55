use content::ContentStore;
use e2e::test_server::TestServer;

#[tokio::test]
#[ignore = "starts the web server with cargo run"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    let brand = ContentStore::new().t("nav.brandName");
    assert!(
        body.contains(&brand) || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
#[ignore = "starts the web server with cargo run"]
async fn test_content_document_is_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/data/content.json", server.url()))
        .await
        .expect("Failed to fetch content document");
    assert_eq!(response.status(), 200);

    let text = response.text().await.expect("Failed to read body");
    let patch = content::normalize::parse_document(&text).expect("document parses");
    assert!(patch.projects.is_some(), "document should carry PROJECTS");
}

#[tokio::test]
#[ignore = "starts the web server with cargo run"]
async fn test_unknown_path_renders_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(format!("{}/no/such/page", server.url()))
        .await
        .expect("Failed to fetch page")
        .text()
        .await
        .expect("Failed to read body");

    let title = ContentStore::new().t("common.notFoundTitle");
    assert!(body.contains(&title), "Should render the not-found page");
}
