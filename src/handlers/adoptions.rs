//! Adoption listing handlers
//!
//! The adoption endpoints carry the status lifecycle: intake defaults a
//! listing to `available`, PATCH moves it between `available` and
//! `adopted`, and DELETE soft-deletes only once the listing is adopted.
//! Create and update accept multipart forms so an image can ride along.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::{DeleteResponseDto, parse_form, store_image};
use crate::models::adoption::{AdoptionStatus, Gender};
use crate::repositories::{
    AdoptionFilter, AdoptionRepository, AdoptionWithBreed, CreateAdoptionRequest,
    UpdateAdoptionRequest,
};
use crate::server::AppState;

/// Subfolder under the upload root for adoption images.
const IMAGE_SUBFOLDER: &str = "adoptions";

/// Adoption listing as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdoptionDto {
    /// Unique identifier of the listing
    pub id: i32,
    /// Name of the cat
    pub name: String,
    /// Reference into the breeds catalog, if any
    pub breed_id: Option<i32>,
    /// Display name resolved from the breeds catalog
    pub breed: Option<String>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub temperament: Option<String>,
    pub description: Option<String>,
    /// Current lifecycle status
    pub adoption_status: AdoptionStatus,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<String>,
    /// Public path to the uploaded image, if any
    pub image_url: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Soft-delete timestamp (RFC 3339), if the listing was removed
    pub deleted_at: Option<String>,
}

impl From<AdoptionWithBreed> for AdoptionDto {
    fn from(row: AdoptionWithBreed) -> Self {
        let adoption = row.adoption;
        Self {
            id: adoption.id,
            name: adoption.name,
            breed_id: adoption.breed_id,
            breed: row.breed_name,
            age: adoption.age,
            gender: adoption.gender,
            temperament: adoption.temperament,
            description: adoption.description,
            adoption_status: adoption.adoption_status,
            contact_name: adoption.contact_name,
            contact_email: adoption.contact_email,
            contact_phone: adoption.contact_phone,
            location: adoption.location,
            image_url: adoption.image_url,
            created_at: adoption.created_at.to_rfc3339(),
            deleted_at: adoption.deleted_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

/// Query parameters for listing adoptions
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListAdoptionsQuery {
    /// Narrow to a single status (`available` or `adopted`)
    pub status: Option<String>,
    /// Case-insensitive substring match over name, breed, location and
    /// description
    pub q: Option<String>,
}

/// Request body for a status transition
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    /// Target status: `available` or `adopted`
    pub status: String,
}

/// List adoption listings
#[utoipa::path(
    get,
    path = "/api/adoptions",
    params(
        ("status" = Option<String>, Query, description = "Filter by adoption status"),
        ("q" = Option<String>, Query, description = "Substring search over name, breed, location, description")
    ),
    responses(
        (status = 200, description = "Adoption listings, newest first", body = Vec<AdoptionDto>),
        (status = 400, description = "Invalid status filter", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn list_adoptions(
    State(state): State<AppState>,
    Query(query): Query<ListAdoptionsQuery>,
) -> Result<Json<Vec<AdoptionDto>>, ApiError> {
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => Some(parse_status(value)?),
        None => None,
    };

    let repo = AdoptionRepository::new(&state.db);
    let rows = repo
        .list_adoptions(AdoptionFilter { status, q: query.q })
        .await?;

    Ok(Json(rows.into_iter().map(AdoptionDto::from).collect()))
}

/// Create an adoption listing from a multipart form
#[utoipa::path(
    post,
    path = "/api/adoptions",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Listing created", body = AdoptionDto),
        (status = 400, description = "Validation failed", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn create_adoption(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<AdoptionDto>), ApiError> {
    let form = parse_form(multipart).await?;

    let name = form.required("name")?;
    let breed_id = form.optional_i32("breed_id")?;
    let gender = parse_optional_gender(&form.optional("gender"))?;
    let adoption_status = match form.optional("adoption_status") {
        Some(value) => Some(parse_status(&value)?),
        None => None,
    };
    let image_url = store_image(&state.storage, form.image.clone(), IMAGE_SUBFOLDER).await?;

    let repo = AdoptionRepository::new(&state.db);
    let created = repo
        .create_adoption(CreateAdoptionRequest {
            name,
            breed_id,
            age: form.optional("age"),
            gender,
            temperament: form.optional("temperament"),
            description: form.optional("description"),
            adoption_status,
            contact_name: form.optional("contact_name"),
            contact_email: form.optional("contact_email"),
            contact_phone: form.optional("contact_phone"),
            location: form.optional("location"),
            image_url,
        })
        .await?;

    tracing::info!(adoption_id = created.adoption.id, "adoption listing created");

    Ok((StatusCode::CREATED, Json(AdoptionDto::from(created))))
}

/// Update an adoption listing from a multipart form
#[utoipa::path(
    put,
    path = "/api/adoptions",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Listing updated", body = AdoptionDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Listing not found", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn update_adoption(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AdoptionDto>, ApiError> {
    let form = parse_form(multipart).await?;

    let id = form
        .optional_i32("id")?
        .ok_or_else(|| validation("ID is required"))?;
    let name = form.required("name")?;
    let breed_id = form.optional_i32("breed_id")?;
    let gender = parse_optional_gender(&form.optional("gender"))?;
    let adoption_status = match form.optional("adoption_status") {
        Some(value) => Some(parse_status(&value)?),
        None => None,
    };
    let image_url = store_image(&state.storage, form.image.clone(), IMAGE_SUBFOLDER).await?;

    let repo = AdoptionRepository::new(&state.db);
    let updated = repo
        .update_adoption(
            id,
            UpdateAdoptionRequest {
                name,
                breed_id,
                age: form.optional("age"),
                gender,
                temperament: form.optional("temperament"),
                description: form.optional("description"),
                adoption_status,
                contact_name: form.optional("contact_name"),
                contact_email: form.optional("contact_email"),
                contact_phone: form.optional("contact_phone"),
                location: form.optional("location"),
                image_url,
            },
        )
        .await?;

    Ok(Json(AdoptionDto::from(updated)))
}

/// Transition a listing between `available` and `adopted`
#[utoipa::path(
    patch,
    path = "/api/adoptions/{id}/status",
    params(("id" = i32, Path, description = "Adoption listing ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = AdoptionDto),
        (status = 400, description = "Invalid status value", body = ApiError),
        (status = 404, description = "Listing not found or already deleted", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn update_adoption_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateStatusDto>, JsonRejection>,
) -> Result<Json<AdoptionDto>, ApiError> {
    let Json(body) = payload?;
    let status = parse_status(&body.status)?;

    let repo = AdoptionRepository::new(&state.db);
    let updated = repo.update_status(id, status).await?;

    tracing::info!(
        adoption_id = id,
        status = status.as_str(),
        "adoption status updated"
    );

    Ok(Json(AdoptionDto::from(updated)))
}

/// Soft-delete an adopted listing
#[utoipa::path(
    delete,
    path = "/api/adoptions/{id}",
    params(("id" = i32, Path, description = "Adoption listing ID")),
    responses(
        (status = 200, description = "Listing removed", body = DeleteResponseDto),
        (status = 400, description = "Listing is not adopted", body = ApiError),
        (status = 404, description = "Listing not found or already deleted", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn soft_delete_adoption(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let repo = AdoptionRepository::new(&state.db);
    repo.soft_delete_adoption(id).await?;

    tracing::info!(adoption_id = id, "adoption listing soft-deleted");

    Ok(Json(DeleteResponseDto {
        success: true,
        message: "Adoption record removed".to_string(),
    }))
}

/// Query parameters for the permanent delete endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct HardDeleteQuery {
    /// Adoption listing ID
    pub id: Option<i32>,
}

/// Permanently delete a listing, regardless of status
#[utoipa::path(
    delete,
    path = "/api/adoptions",
    params(("id" = i32, Query, description = "Adoption listing ID")),
    responses(
        (status = 200, description = "Listing permanently deleted", body = DeleteResponseDto),
        (status = 400, description = "Missing ID", body = ApiError)
    ),
    tag = "adoptions"
)]
pub async fn hard_delete_adoption(
    State(state): State<AppState>,
    Query(query): Query<HardDeleteQuery>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let id = query.id.ok_or_else(|| validation("ID is required"))?;

    // Unconditional cleanup: deleting an unknown id is a no-op success.
    let repo = AdoptionRepository::new(&state.db);
    let rows = repo.hard_delete_adoption(id).await?;

    tracing::info!(
        adoption_id = id,
        rows_affected = rows,
        "adoption listing permanently deleted"
    );

    Ok(Json(DeleteResponseDto {
        success: true,
        message: "Adoption record permanently deleted".to_string(),
    }))
}

fn parse_status(value: &str) -> Result<AdoptionStatus, ApiError> {
    AdoptionStatus::parse(value).ok_or_else(|| {
        validation("Invalid status. Must be available or adopted")
            .with_details(serde_json::json!({ "field": "status", "value": value }))
    })
}

fn parse_optional_gender(value: &Option<String>) -> Result<Option<Gender>, ApiError> {
    match value.as_deref() {
        None => Ok(None),
        Some(raw) => Gender::parse(raw).map(Some).ok_or_else(|| {
            validation("Invalid gender. Must be male, female or unknown")
                .with_details(serde_json::json!({ "field": "gender", "value": raw }))
        }),
    }
}

fn validation(message: &str) -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        "VALIDATION_FAILED".to_string(),
        message.to_string(),
    )
}
