//! Breed catalog handlers
//!
//! Plain CRUD over the breeds catalog. Create and update take multipart
//! forms like the adoption endpoints so a breed image can be attached;
//! deletes cascade to adoptions only by nulling their breed reference.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::{DeleteResponseDto, parse_form, store_image};
use crate::models::breed;
use crate::repositories::{BreedFields, BreedRepository};
use crate::server::AppState;

/// Subfolder under the upload root for breed images.
const IMAGE_SUBFOLDER: &str = "breeds";

/// Breed catalog entry as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BreedDto {
    /// Unique identifier of the breed
    pub id: i32,
    /// Display name of the breed
    pub breed: String,
    pub country: Option<String>,
    pub origin: Option<String>,
    pub coat: Option<String>,
    pub pattern: Option<String>,
    /// Public path to the uploaded image, if any
    pub image_url: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<breed::Model> for BreedDto {
    fn from(model: breed::Model) -> Self {
        Self {
            id: model.id,
            breed: model.breed,
            country: model.country,
            origin: model.origin,
            coat: model.coat,
            pattern: model.pattern,
            image_url: model.image_url,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// List all breeds
#[utoipa::path(
    get,
    path = "/api/breeds",
    responses(
        (status = 200, description = "Breed catalog, newest first", body = Vec<BreedDto>)
    ),
    tag = "breeds"
)]
pub async fn list_breeds(
    State(state): State<AppState>,
) -> Result<Json<Vec<BreedDto>>, ApiError> {
    let repo = BreedRepository::new(&state.db);
    let rows = repo.list_breeds().await?;

    Ok(Json(rows.into_iter().map(BreedDto::from).collect()))
}

/// Create a breed catalog entry from a multipart form
#[utoipa::path(
    post,
    path = "/api/breeds",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Breed created", body = BreedDto),
        (status = 400, description = "Validation failed", body = ApiError)
    ),
    tag = "breeds"
)]
pub async fn create_breed(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<BreedDto>), ApiError> {
    let form = parse_form(multipart).await?;

    let breed = form.required("breed")?;
    let image_url = store_image(&state.storage, form.image.clone(), IMAGE_SUBFOLDER).await?;

    let repo = BreedRepository::new(&state.db);
    let created = repo
        .create_breed(BreedFields {
            breed,
            country: form.optional("country"),
            origin: form.optional("origin"),
            coat: form.optional("coat"),
            pattern: form.optional("pattern"),
            image_url,
        })
        .await?;

    tracing::info!(breed_id = created.id, "breed created");

    Ok((StatusCode::CREATED, Json(BreedDto::from(created))))
}

/// Update a breed catalog entry from a multipart form
#[utoipa::path(
    put,
    path = "/api/breeds",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Breed updated", body = BreedDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Breed not found", body = ApiError)
    ),
    tag = "breeds"
)]
pub async fn update_breed(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BreedDto>, ApiError> {
    let form = parse_form(multipart).await?;

    let id = form.optional_i32("id")?.ok_or_else(|| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED".to_string(),
            "ID is required".to_string(),
        )
    })?;
    let breed = form.required("breed")?;
    let image_url = store_image(&state.storage, form.image.clone(), IMAGE_SUBFOLDER).await?;

    let repo = BreedRepository::new(&state.db);
    let updated = repo
        .update_breed(
            id,
            BreedFields {
                breed,
                country: form.optional("country"),
                origin: form.optional("origin"),
                coat: form.optional("coat"),
                pattern: form.optional("pattern"),
                image_url,
            },
        )
        .await?;

    Ok(Json(BreedDto::from(updated)))
}

/// Query parameters for the breed delete endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteBreedQuery {
    /// Breed ID
    pub id: Option<i32>,
}

/// Permanently delete a breed catalog entry
#[utoipa::path(
    delete,
    path = "/api/breeds",
    params(("id" = i32, Query, description = "Breed ID")),
    responses(
        (status = 200, description = "Breed deleted", body = DeleteResponseDto),
        (status = 400, description = "Missing ID", body = ApiError)
    ),
    tag = "breeds"
)]
pub async fn delete_breed(
    State(state): State<AppState>,
    Query(query): Query<DeleteBreedQuery>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let id = query.id.ok_or_else(|| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED".to_string(),
            "ID is required".to_string(),
        )
    })?;

    // Unconditional cleanup: deleting an unknown id is a no-op success.
    let repo = BreedRepository::new(&state.db);
    let rows = repo.delete_breed(id).await?;

    tracing::info!(breed_id = id, rows_affected = rows, "breed deleted");

    Ok(Json(DeleteResponseDto {
        success: true,
        message: "Breed deleted".to_string(),
    }))
}
