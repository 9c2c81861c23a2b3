//! API contract tests
//!
//! Router-level tests for the request validation and authentication paths
//! that run before any database access. The server is started without a
//! database pool; every assertion here covers behavior that must hold
//! regardless of persistence.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use publica::server::config::AppConfig;
use publica::server::state::AppState;
use publica::routes::create_router;
use serde_json::json;

fn test_server() -> (TestServer, tempfile::TempDir) {
    let uploads = tempfile::tempdir().expect("Failed to create temp uploads dir");
    let app_state = AppState {
        config: AppConfig {
            port: 3000,
            app_url: "http://localhost".to_string(),
            uploads_dir: uploads.path().to_path_buf(),
        },
        db_pool: None,
    };
    (
        TestServer::new(create_router(app_state)).expect("Failed to start test server"),
        uploads,
    )
}

fn bearer_token() -> String {
    publica::auth::sessions::create_token(uuid::Uuid::new_v4(), "wesley@email.com".to_string())
        .expect("Failed to create token")
}

#[tokio::test]
async fn login_requires_email_and_password() {
    let (server, _uploads) = test_server();

    let response = server.post("/auth/login").json(&json!({})).await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "errors": ["Email and password are required"] }));
}

#[tokio::test]
async fn register_requires_all_fields() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/auth/register")
        .json(&json!({ "name": "Wesley Alves", "email": "wesley@email.com" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "errors": ["Name, email and password are required"] }));
}

#[tokio::test]
async fn register_rejects_short_password() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/auth/register")
        .json(&json!({
            "name": "Wesley Alves",
            "email": "wesley@email.com",
            "password": "abc",
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Password must be between 6 and 50 characters"] }));
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/auth/register")
        .json(&json!({
            "name": "Wesley Alves",
            "email": "not-an-email",
            "password": "teste@123",
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Invalid email"] }));
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let (server, _uploads) = test_server();

    let response = server.get("/users").await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "errors": ["Token not found"] }));
}

#[tokio::test]
async fn protected_routes_reject_garbage_token() {
    let (server, _uploads) = test_server();

    let response = server
        .get("/auth/me")
        .authorization_bearer("definitely.not.valid")
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "errors": ["Token is invalid"] }));
}

#[tokio::test]
async fn publication_creation_rejects_short_title() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/publications")
        .authorization_bearer(&bearer_token())
        .json(&json!({ "title": "ab", "content": "a perfectly fine content" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Title must be between 3 and 50 characters"] }));
}

#[tokio::test]
async fn comment_creation_rejects_short_content() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/comments")
        .authorization_bearer(&bearer_token())
        .json(&json!({ "publication_id": uuid::Uuid::new_v4(), "content": "hi" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Content must be between 3 and 255 characters"] }));
}

#[tokio::test]
async fn comment_creation_rejects_malformed_publication_id() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/comments")
        .authorization_bearer(&bearer_token())
        .json(&json!({ "publication_id": "not-a-uuid", "content": "a decent comment" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Publication not found"] }));
}

#[tokio::test]
async fn comment_creation_rejects_missing_publication_id() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/comments")
        .authorization_bearer(&bearer_token())
        .json(&json!({ "content": "a decent comment" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Publication not found"] }));
}

#[tokio::test]
async fn user_image_upload_rejects_non_image() {
    let (server, _uploads) = test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"hello world".as_slice())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );

    let response = server
        .put("/users/image")
        .authorization_bearer(&bearer_token())
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["File must be an image"] }));
}

#[tokio::test]
async fn publication_image_upload_rejects_non_image() {
    let (server, _uploads) = test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"%PDF-1.4".as_slice())
            .file_name("paper.pdf")
            .mime_type("application/pdf"),
    );

    let response = server
        .put(&format!("/publications/{}/image", uuid::Uuid::new_v4()))
        .authorization_bearer(&bearer_token())
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["File must be an image"] }));
}

#[tokio::test]
async fn image_upload_requires_a_file_field() {
    let (server, _uploads) = test_server();

    let form = MultipartForm::new().add_text("something_else", "value");

    let response = server
        .put("/users/image")
        .authorization_bearer(&bearer_token())
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "errors": ["Filename not available"] }));
}
