//! Patient record types.
//!
//! Field names are English in Rust; the wire names (`nombre`, `apellido`, `documento`,
//! `fechaNacimiento`, `tratamiento`) are kept for compatibility with existing clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored patient record.
///
/// `id` is the surrogate key assigned by the store on first save and is `None` until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    /// External natural key, unique across all records.
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "fechaNacimiento")]
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birth_date: NaiveDate,
    #[serde(rename = "tratamiento")]
    pub treatment: String,
}

/// Caller-supplied fields for a new patient. All are required; formats are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewPatient {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "fechaNacimiento")]
    #[schema(value_type = String, format = Date, example = "1990-01-01")]
    pub birth_date: NaiveDate,
    #[serde(rename = "tratamiento")]
    pub treatment: String,
}

impl From<NewPatient> for Patient {
    fn from(input: NewPatient) -> Self {
        Self {
            id: None,
            first_name: input.first_name,
            last_name: input.last_name,
            document: input.document,
            birth_date: input.birth_date,
            treatment: input.treatment,
        }
    }
}
