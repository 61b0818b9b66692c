//! # API REST
//!
//! REST API implementation for the historial patient directory.
//!
//! Handles:
//! - HTTP endpoints with axum under `/pacientes`
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping of store errors)
//!
//! Uses `historial-core` for all patient operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use historial_core::PatientDirectoryService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: PatientDirectoryService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health,
        routes::create::create_patient,
        routes::list::list_patients,
        routes::find::find_patient,
        routes::update::update_treatment,
        routes::delete::delete_patient,
    ),
    components(schemas(
        routes::health::HealthRes,
        historial_core::Patient,
        historial_core::NewPatient,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router around `directory`.
pub fn router(directory: PatientDirectoryService) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/pacientes/crear", post(routes::create::create_patient))
        .route("/pacientes/listar", get(routes::list::list_patients))
        .route("/pacientes/buscar/:documento", get(routes::find::find_patient))
        .route(
            "/pacientes/actualizarTratamiento/:documento",
            put(routes::update::update_treatment),
        )
        .route(
            "/pacientes/eliminar/:documento",
            delete(routes::delete::delete_patient),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { directory })
}

/// Resolve the listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}

/// Binds `addr` and serves the REST API until the server stops.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, directory: PatientDirectoryService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Serving historial REST API on {}", listener.local_addr()?);

    axum::serve(listener, router(directory)).await?;
    Ok(())
}
