//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Whiskers
//! API, plus the shared multipart form plumbing the upload-carrying
//! endpoints use.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::db;
use crate::error::ApiError;
use crate::models::ServiceInfo;
use crate::server::AppState;
use crate::uploads::FileStorage;

pub mod adoptions;
pub mod breeds;
pub mod facts;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Liveness probe backed by a trivial database query
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    db::health_check(&state.db).await.map_err(|e| {
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE".to_string(),
            format!("Database health check failed: {}", e),
        )
    })?;

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// An image payload lifted out of a multipart form.
#[derive(Debug, Clone)]
pub(crate) struct UploadedImage {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

/// A fully drained multipart form: text fields by name, plus the optional
/// `image` file part.
#[derive(Debug, Default)]
pub(crate) struct FormPayload {
    fields: HashMap<String, String>,
    pub image: Option<UploadedImage>,
}

impl FormPayload {
    /// A trimmed field value, with empty strings treated as absent.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// A required field value; missing or empty yields a validation error.
    pub fn required(&self, name: &str) -> Result<String, ApiError> {
        self.optional(name).ok_or_else(|| {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED".to_string(),
                format!("{} is required", field_label(name)),
            )
            .with_details(serde_json::json!({ "field": name }))
        })
    }

    /// An optional integer field; a non-numeric value is a validation error.
    pub fn optional_i32(&self, name: &str) -> Result<Option<i32>, ApiError> {
        match self.optional(name) {
            None => Ok(None),
            Some(value) => value.parse::<i32>().map(Some).map_err(|_| {
                ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED".to_string(),
                    format!("{} must be an integer", field_label(name)),
                )
                .with_details(serde_json::json!({ "field": name, "value": value }))
            }),
        }
    }
}

fn field_label(name: &str) -> String {
    if name == "id" {
        "ID".to_string()
    } else {
        let mut label = name.replace('_', " ");
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        label
    }
}

/// Drains a multipart request into a [`FormPayload`].
///
/// File parts without a name or without content are ignored, matching how
/// browsers submit an untouched file input.
pub(crate) async fn parse_form(mut multipart: Multipart) -> Result<FormPayload, ApiError> {
    let mut payload = FormPayload::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;
            if file_name.is_empty() || bytes.is_empty() {
                continue;
            }
            payload.image = Some(UploadedImage {
                bytes: bytes.to_vec(),
                file_name,
                content_type,
            });
        } else {
            payload.fields.insert(name, field.text().await?);
        }
    }

    Ok(payload)
}

/// Validates and persists an optional uploaded image, returning its public
/// path.
pub(crate) async fn store_image(
    storage: &FileStorage,
    image: Option<UploadedImage>,
    subfolder: &str,
) -> Result<Option<String>, ApiError> {
    let Some(image) = image else {
        return Ok(None);
    };

    storage.validate(image.content_type.as_deref(), image.bytes.len())?;
    let path = storage
        .save(&image.bytes, &image.file_name, subfolder)
        .await?;

    Ok(Some(path))
}

/// Confirmation payload for delete endpoints
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct DeleteResponseDto {
    /// Whether the deletion took effect
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}
