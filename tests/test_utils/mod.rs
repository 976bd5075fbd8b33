//! Shared helpers for integration tests: an app over an in-memory
//! database, multipart body construction, and response decoding.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use migration::MigratorTrait;
use sea_orm::Database;
use tempfile::TempDir;
use tower::ServiceExt;

use whiskers::server::{AppState, create_app};
use whiskers::uploads::FileStorage;

const BOUNDARY: &str = "whiskers-integration-boundary";

/// Builds a full router over a fresh in-memory database. The returned
/// TempDir holds the upload root and must stay alive for the test.
pub async fn setup_test_app() -> Result<(Router, TempDir)> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;

    let upload_dir = tempfile::tempdir()?;
    let state = AppState {
        db,
        storage: FileStorage::new(upload_dir.path(), 5 * 1024 * 1024),
    };

    Ok((create_app(state), upload_dir))
}

/// Serializes text fields (and an optional image part) into a
/// multipart/form-data body.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Sends a multipart request to the app and returns the response.
pub async fn send_form(
    app: &Router,
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> Result<Response<Body>> {
    let (content_type, body) = multipart_body(fields, image);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))?;

    Ok(app.clone().oneshot(request).await?)
}

/// Sends a JSON request to the app and returns the response.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
) -> Result<Response<Body>> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;

    Ok(app.clone().oneshot(request).await?)
}

/// Sends a bodyless request to the app and returns the response.
pub async fn send(app: &Router, method: &str, uri: &str) -> Result<Response<Body>> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())?;

    Ok(app.clone().oneshot(request).await?)
}

/// Decodes a response body as JSON.
pub async fn read_json(response: Response<Body>) -> Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Creates an adoption listing through the API and returns its ID.
pub async fn create_listing(app: &Router, name: &str) -> Result<i64> {
    let response = send_form(
        app,
        "POST",
        "/api/adoptions",
        &[
            ("name", name),
            ("contact_name", "Ada"),
            ("contact_email", "ada@example.com"),
        ],
        None,
    )
    .await?;
    anyhow::ensure!(response.status() == StatusCode::CREATED);

    let body = read_json(response).await?;
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in response"))
}
