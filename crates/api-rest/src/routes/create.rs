//! The create patient route.

use axum::{extract::State, Json};
use historial_core::{NewPatient, Patient};
use tracing::instrument;

use super::run_directory;
use crate::{error::Result, AppState};

/// Creates a patient record from the supplied fields.
#[utoipa::path(
    post,
    path = "/pacientes/crear",
    request_body = NewPatient,
    responses(
        (status = 200, description = "Patient created", body = Patient),
        (status = 409, description = "A patient with this documento already exists"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(input): Json<NewPatient>,
) -> Result<Json<Patient>> {
    let patient = run_directory(&state, move |directory| directory.create(input)).await?;
    Ok(Json(patient))
}
