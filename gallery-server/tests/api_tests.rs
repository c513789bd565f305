//! Integration tests for the Gallery Server

use axum::http::StatusCode;
use axum_test::TestServer;
use gallery_core::{GalleryConfig, GalleryRoot};
use gallery_server::routes::create_router;
use gallery_server::state::AppState;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, path: &str, data: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, data).unwrap();
}

/// Create a gallery with one work per page strategy
fn create_test_gallery() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write(
        root,
        "works.json",
        r#"[
            {"slug": "moth", "title": "Moth Season", "artist": "Rin Ito", "tags": ["insects", "night"]},
            {"slug": "harbor", "title": "Harbor Lights", "tags": ["sea"]},
            {"slug": "sketches", "cover": "https://cdn.example.com/sketches.png"}
        ]"#,
    );
    write(
        root,
        "works/moth/meta.json",
        r#"{"title": "Moth Season", "artist": "Rin Ito", "pages": ["a.png", "b.png"]}"#,
    );
    write(root, "works/harbor/meta.json", r#"{"title": "Harbor Lights", "count": 2}"#);
    write(root, "works/sketches/001.jpg", "jpeg");
    write(root, "works/sketches/002.jpg", "jpeg");
    write(root, "works/sketches/004.jpg", "jpeg");

    temp_dir
}

/// Create a test server over a gallery directory
fn create_test_server(dir: &TempDir) -> TestServer {
    let config =
        GalleryConfig::default().with_root(GalleryRoot::Directory(dir.path().to_path_buf()));
    let state = AppState::new(config).expect("Failed to create state");
    let app = create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_health_check() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_works() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/api/v1/works").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["works"][0]["slug"], "moth");
    assert_eq!(body["works"][0]["href"], "/reader?slug=moth");
    assert_eq!(body["works"][0]["cover_url"], "/works/moth/cover.jpg");
    assert_eq!(body["works"][2]["cover_url"], "https://cdn.example.com/sketches.png");
    assert_eq!(body["works"][2]["title"], "sketches");
}

#[tokio::test]
async fn test_list_works_with_search() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server
        .get("/api/v1/works")
        .add_query_param("search", "Night")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["works"][0]["byline"], "Rin Ito • insects, night");
}

#[tokio::test]
async fn test_list_works_missing_manifest() {
    let empty = TempDir::new().unwrap();
    let server = create_test_server(&empty);

    let response = server.get("/api/v1/works").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 0);
    assert!(body["works"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_work_explicit_pages() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/api/v1/works/moth").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["strategy"], "explicit");
    assert_eq!(body["header"]["details"], "Artist: Rin Ito");
    assert_eq!(body["pages"][0]["url"], "/works/moth/a.png");
    assert_eq!(body["pages"][1]["url"], "/works/moth/b.png");
}

#[tokio::test]
async fn test_get_work_discovered_pages() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/api/v1/works/sketches").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["strategy"], "discovered");
    assert_eq!(body["meta"]["title"], "sketches");
    let pages = body["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1]["url"], "/works/sketches/002.jpg");
}

#[tokio::test]
async fn test_reader_invalid_slug() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/reader").add_query_param("slug", "..").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Invalid slug"));
}

#[tokio::test]
async fn test_stream_pages() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/api/v1/works/sketches/pages/stream").await;

    response.assert_status_ok();

    let text = response.text();
    let first = text.find("001.jpg").expect("first page streamed");
    let second = text.find("002.jpg").expect("second page streamed");
    assert!(first < second);
    assert!(!text.contains("004.jpg"));
    assert_eq!(text.matches("event: page").count(), 2);
    assert!(text.contains("event: done"));
}

#[tokio::test]
async fn test_download_guidance() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/api/v1/works/moth/download").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["slug"], "moth");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("To download images"));
}

#[tokio::test]
async fn test_index_page() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Moth Season"));
    assert!(html.contains("Harbor Lights"));
    assert!(html.contains(r#"href="/reader?slug=moth""#));
}

#[tokio::test]
async fn test_index_page_query() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/").add_query_param("q", "lights").await;

    response.assert_status_ok();

    // Every card is sent; only the initial query decides which are hidden
    let html = response.text();
    assert!(html.contains(r#"<a class="card-link" href="/reader?slug=harbor""#));
    assert!(html.contains(r#"<a class="card-link" hidden href="/reader?slug=moth""#));
    assert!(html.contains(r#"data-tags="insects night""#));
    assert!(html.contains("hidden>No works found."));
}

#[tokio::test]
async fn test_index_page_query_without_matches() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/").add_query_param("q", "zebra").await;

    response.assert_status_ok();

    let html = response.text();
    assert_eq!(html.matches(r#"<a class="card-link" hidden"#).count(), 3);
    assert!(html.contains("No works found."));
    assert!(!html.contains("hidden>No works found."));
}

#[tokio::test]
async fn test_reader_without_slug_redirects() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/reader").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/?alert=No%20slug%20specified"
    );
}

#[tokio::test]
async fn test_reader_page_count_pages() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server
        .get("/reader")
        .add_query_param("slug", "harbor")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"src="/works/harbor/001.jpg""#));
    assert!(html.contains(r#"src="/works/harbor/002.jpg""#));
    assert!(html.contains("prevBtn"));
    assert!(!html.contains("EventSource"));
}

#[tokio::test]
async fn test_reader_page_discovery_streams() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server
        .get("/reader")
        .add_query_param("slug", "sketches")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"data-stream="/api/v1/works/sketches/pages/stream""#));
    assert!(!html.contains("/works/sketches/001.jpg"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let gallery = create_test_gallery();
    let server = create_test_server(&gallery);

    let response = server.get("/works/sketches/001.jpg").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "jpeg");

    let response = server.get("/works/sketches/003.jpg").await;
    response.assert_status_not_found();
}
