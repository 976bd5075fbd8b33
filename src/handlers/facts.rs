//! Cat fact handlers
//!
//! Facts fetched from an external API by the frontend are persisted here
//! one at a time; DELETE clears the stored set before a refresh so the
//! window always reflects the latest batch.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::DeleteResponseDto;
use crate::models::fact;
use crate::repositories::{CreateFactRequest, FactRepository};
use crate::server::AppState;

/// Stored cat fact as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FactDto {
    /// Unique identifier of the fact
    pub id: i32,
    /// The fact text
    pub fact: String,
    /// Character length as reported by the upstream source
    pub length: i32,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<fact::Model> for FactDto {
    fn from(model: fact::Model) -> Self {
        Self {
            id: model.id,
            fact: model.fact,
            length: model.length,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// A fact to persist
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveFactDto {
    /// The fact text
    pub fact: String,
    /// Character length as reported by the upstream source
    pub length: i32,
}

/// List stored facts
#[utoipa::path(
    get,
    path = "/api/facts",
    responses(
        (status = 200, description = "Latest stored facts, newest first", body = Vec<FactDto>)
    ),
    tag = "facts"
)]
pub async fn list_facts(State(state): State<AppState>) -> Result<Json<Vec<FactDto>>, ApiError> {
    let repo = FactRepository::new(&state.db);
    let rows = repo.list_facts().await?;

    Ok(Json(rows.into_iter().map(FactDto::from).collect()))
}

/// Save a single fact
#[utoipa::path(
    post,
    path = "/api/facts",
    request_body = SaveFactDto,
    responses(
        (status = 201, description = "Fact saved", body = FactDto),
        (status = 400, description = "Validation failed", body = ApiError)
    ),
    tag = "facts"
)]
pub async fn save_fact(
    State(state): State<AppState>,
    payload: Result<Json<SaveFactDto>, JsonRejection>,
) -> Result<(StatusCode, Json<FactDto>), ApiError> {
    let Json(body) = payload?;

    let repo = FactRepository::new(&state.db);
    let saved = repo
        .create_fact(CreateFactRequest {
            fact: body.fact,
            length: body.length,
        })
        .await?;

    tracing::info!(fact_id = saved.id, "fact saved");

    Ok((StatusCode::CREATED, Json(FactDto::from(saved))))
}

/// Clear all stored facts, ahead of a refresh from the external API
#[utoipa::path(
    delete,
    path = "/api/facts",
    responses(
        (status = 200, description = "Stored facts cleared", body = DeleteResponseDto)
    ),
    tag = "facts"
)]
pub async fn clear_facts(
    State(state): State<AppState>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let repo = FactRepository::new(&state.db);
    repo.clear_facts().await?;

    Ok(Json(DeleteResponseDto {
        success: true,
        message: "Facts cleared".to_string(),
    }))
}
