mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use link_library::routes::build_router;
use link_library::state::AppState;

fn make_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, "public")).unwrap()
}

fn assert_redirects_home(response: &axum_test::TestResponse) {
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_index_empty() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No links yet"));
    assert!(html.contains(r#"action="/add""#));
}

#[tokio::test]
async fn test_index_lists_newest_first() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    for (title, url) in [
        ("Alpha", "https://alpha.example"),
        ("Bravo", "https://bravo.example"),
        ("Charlie", "https://charlie.example"),
    ] {
        server
            .post("/add")
            .form(&[("title", title), ("url", url)])
            .await;
    }

    let html = server.get("/").await.text();

    let alpha = html.find("Alpha").unwrap();
    let bravo = html.find("Bravo").unwrap();
    let charlie = html.find("Charlie").unwrap();
    assert!(charlie < bravo && bravo < alpha);
}

#[tokio::test]
async fn test_index_store_failure() {
    let server = make_server(common::create_broken_state());

    let response = server.get("/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error loading links");
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_link_redirects() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "https://example.com/docs")])
        .await;

    assert_redirects_home(&response);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_add_link_accepts_legacy_field_name() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/add")
        .form(&[("titulo", "Docs"), ("url", "https://example.com/docs")])
        .await;

    assert_redirects_home(&response);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_add_link_with_both_title_fields() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/add")
        .form(&[
            ("title", "Docs"),
            ("titulo", "Documentos"),
            ("url", "https://example.com/docs"),
        ])
        .await;

    assert_redirects_home(&response);
    assert_eq!(repo.len(), 1);
    let html = server.get("/edit/1").await.text();
    assert!(html.contains(r#"value="Docs""#));
}

#[tokio::test]
async fn test_add_link_missing_title() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/add")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Title is required");
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_add_link_blank_url() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "   ")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_add_link_store_failure() {
    let server = make_server(common::create_broken_state());

    let response = server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "https://example.com")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error adding link");
}

// ─── Edit ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_form_renders_current_values() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "https://example.com/docs")])
        .await;

    let response = server.get("/edit/1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"action="/edit/1""#));
    assert!(html.contains(r#"value="Docs""#));
}

#[tokio::test]
async fn test_edit_form_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/edit/404").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Link not found");
}

#[tokio::test]
async fn test_edit_form_rejects_non_numeric_id() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/edit/abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_link_missing_id_is_silent() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/edit/77")
        .form(&[("title", "Ghost"), ("url", "https://example.com")])
        .await;

    assert_redirects_home(&response);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_update_link_rejects_empty_title() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "https://example.com/docs")])
        .await;

    let response = server
        .post("/edit/1")
        .form(&[("title", ""), ("url", "https://example.com/docs")])
        .await;

    response.assert_status_bad_request();

    let html = server.get("/edit/1").await.text();
    assert!(html.contains(r#"value="Docs""#));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_twice_is_same_as_once() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    server
        .post("/add")
        .form(&[("title", "Docs"), ("url", "https://example.com/docs")])
        .await;

    assert_redirects_home(&server.get("/delete/1").await);
    assert_redirects_home(&server.get("/delete/1").await);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_delete_store_failure() {
    let server = make_server(common::create_broken_state());

    let response = server.get("/delete/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error deleting link");
}

// ─── Full lifecycle ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_link_lifecycle() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    assert_redirects_home(
        &server
            .post("/add")
            .form(&[("title", "Docs"), ("url", "https://example.com/docs")])
            .await,
    );

    let html = server.get("/").await.text();
    assert!(html.contains(r#"href="https://example.com/docs""#));
    assert!(html.contains(r#"href="/edit/1""#));

    assert_redirects_home(
        &server
            .post("/edit/1")
            .form(&[("title", "Docs v2"), ("url", "https://example.com/docs2")])
            .await,
    );

    let html = server.get("/edit/1").await.text();
    assert!(html.contains(r#"value="Docs v2""#));
    assert!(html.contains(r#"value="https://example.com/docs2""#));

    assert_redirects_home(&server.get("/delete/1").await);

    let html = server.get("/").await.text();
    assert!(html.contains("No links yet"));
    assert_eq!(repo.len(), 0);
}

// ─── Table creation, health, static files ───────────────────────────────────

#[tokio::test]
async fn test_create_table() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/create-table").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Table created or already existed");
}

#[tokio::test]
async fn test_create_table_failure_includes_detail() {
    let server = make_server(common::create_broken_state());

    let response = server.get("/create-table").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert_eq!(
        body,
        format!("Error creating table: {}", sqlx::Error::PoolTimedOut)
    );
    assert!(!body.contains("Database error"));
}

#[tokio::test]
async fn test_health_ok() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_degraded() {
    let server = make_server(common::create_broken_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_serves_stylesheet() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/style.css").await;

    response.assert_status_ok();
}
