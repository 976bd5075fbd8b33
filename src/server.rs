//! # Server Configuration
//!
//! This module contains the server setup and configuration for the
//! Whiskers API: router construction, shared state, the trace-context
//! middleware, and the OpenAPI document.

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::routing::{delete, get, patch};
use axum::{Router, extract::Request, response::Response};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};
use crate::uploads::FileStorage;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: FileStorage,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let uploads_dir = state.storage.root().clone();
    let body_limit = state.storage.max_bytes() + 64 * 1024;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/api/adoptions",
            get(handlers::adoptions::list_adoptions)
                .post(handlers::adoptions::create_adoption)
                .put(handlers::adoptions::update_adoption)
                .delete(handlers::adoptions::hard_delete_adoption),
        )
        .route(
            "/api/adoptions/{id}",
            delete(handlers::adoptions::soft_delete_adoption),
        )
        .route(
            "/api/adoptions/{id}/status",
            patch(handlers::adoptions::update_adoption_status),
        )
        .route(
            "/api/breeds",
            get(handlers::breeds::list_breeds)
                .post(handlers::breeds::create_breed)
                .put(handlers::breeds::update_breed)
                .delete(handlers::breeds::delete_breed),
        )
        .route(
            "/api/facts",
            get(handlers::facts::list_facts)
                .post(handlers::facts::save_fact)
                .delete(handlers::facts::clear_facts),
        )
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Propagates an incoming `x-trace-id` header (or mints a fresh one) into
/// task-local storage for the request, and echoes it on the response.
async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get("x-trace-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let context = TraceContext {
        trace_id: trace_id.clone(),
    };

    let mut response = telemetry::with_trace_context(context, next.run(request)).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert("x-trace-id", value);
    }

    response
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStorage::new(&config.upload_dir, config.upload_max_bytes);
    let state = AppState { db, storage };
    let app = create_app(state);

    // Resolve the configured bind address
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, profile = %config.profile, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::adoptions::list_adoptions,
        crate::handlers::adoptions::create_adoption,
        crate::handlers::adoptions::update_adoption,
        crate::handlers::adoptions::update_adoption_status,
        crate::handlers::adoptions::soft_delete_adoption,
        crate::handlers::adoptions::hard_delete_adoption,
        crate::handlers::breeds::list_breeds,
        crate::handlers::breeds::create_breed,
        crate::handlers::breeds::update_breed,
        crate::handlers::breeds::delete_breed,
        crate::handlers::facts::list_facts,
        crate::handlers::facts::save_fact,
        crate::handlers::facts::clear_facts,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::adoption::AdoptionStatus,
            crate::models::adoption::Gender,
            crate::handlers::DeleteResponseDto,
            crate::handlers::adoptions::AdoptionDto,
            crate::handlers::adoptions::UpdateStatusDto,
            crate::handlers::breeds::BreedDto,
            crate::handlers::facts::FactDto,
            crate::handlers::facts::SaveFactDto,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Whiskers API",
        description = "API for managing cat adoption listings, breeds, and facts",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
