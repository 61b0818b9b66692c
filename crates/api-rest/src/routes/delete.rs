use axum::extract::{Path, State};
use tracing::instrument;

use super::run_directory;
use crate::{error::Result, AppState};

/// Deletes the patient with the given document identifier.
///
/// Responds with plain text: `Paciente eliminado` or `No existe`.
#[utoipa::path(
    delete,
    path = "/pacientes/eliminar/{documento}",
    params(
        ("documento" = String, Path, description = "Patient document identifier"),
    ),
    responses(
        (status = 200, description = "Outcome message", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip(state))]
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(documento): Path<String>,
) -> Result<&'static str> {
    let outcome = run_directory(&state, move |directory| directory.delete(&documento)).await?;
    Ok(outcome.message())
}
