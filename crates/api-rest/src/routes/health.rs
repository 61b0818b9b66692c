use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Health check endpoint for the REST API
///
/// Used by monitoring and load balancer health checks. Does not touch the store.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "historial REST API is alive".into(),
    })
}
