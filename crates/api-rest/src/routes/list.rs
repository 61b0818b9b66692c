use axum::{extract::State, Json};
use historial_core::Patient;
use tracing::instrument;

use super::run_directory;
use crate::{error::Result, AppState};

/// Lists every patient record. No filtering or pagination.
#[utoipa::path(
    get,
    path = "/pacientes/listar",
    responses(
        (status = 200, description = "All patients", body = [Patient]),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip(state))]
#[axum::debug_handler]
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>> {
    let patients = run_directory(&state, |directory| directory.list_all()).await?;
    Ok(Json(patients))
}
