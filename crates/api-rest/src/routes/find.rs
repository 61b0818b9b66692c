use axum::{
    extract::{Path, State},
    Json,
};
use historial_core::Patient;
use tracing::instrument;

use super::run_directory;
use crate::{error::Result, AppState};

/// Gets a patient by document identifier.
///
/// An unknown document is not an error: the response is `200` with a `null` body.
#[utoipa::path(
    get,
    path = "/pacientes/buscar/{documento}",
    params(
        ("documento" = String, Path, description = "Patient document identifier"),
    ),
    responses(
        (status = 200, description = "The matching patient, or null when absent", body = Patient),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip(state))]
#[axum::debug_handler]
pub async fn find_patient(
    State(state): State<AppState>,
    Path(documento): Path<String>,
) -> Result<Json<Option<Patient>>> {
    let patient =
        run_directory(&state, move |directory| directory.find_by_document(&documento)).await?;
    Ok(Json(patient))
}
