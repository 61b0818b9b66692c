use axum::{
    extract::{Path, Query, State},
    Json,
};
use historial_core::Patient;
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

use super::run_directory;
use crate::{error::Result, AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TreatmentParams {
    /// New free-text treatment.
    pub tratamiento: String,
}

/// Replaces the treatment of the patient with the given document identifier.
///
/// An unknown document leaves the store untouched and yields a `null` body.
#[utoipa::path(
    put,
    path = "/pacientes/actualizarTratamiento/{documento}",
    params(
        ("documento" = String, Path, description = "Patient document identifier"),
        TreatmentParams,
    ),
    responses(
        (status = 200, description = "The updated patient, or null when absent", body = Patient),
        (status = 400, description = "Missing tratamiento query parameter"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip(state, params))]
#[axum::debug_handler]
pub async fn update_treatment(
    State(state): State<AppState>,
    Path(documento): Path<String>,
    Query(params): Query<TreatmentParams>,
) -> Result<Json<Option<Patient>>> {
    let patient = run_directory(&state, move |directory| {
        directory.update_treatment(&documento, params.tratamiento)
    })
    .await?;
    Ok(Json(patient))
}
