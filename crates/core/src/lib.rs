//! # Historial Core
//!
//! Core business logic for the historial patient directory.
//!
//! This crate contains pure data operations:
//! - Patient record types and their wire field names
//! - The `PatientStore` contract and its SQLite engine
//! - The `PatientDirectoryService` operations (create, list, find, update treatment, delete)
//!
//! **No API concerns**: HTTP servers and request marshalling belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod patient;
pub mod store;

pub use config::{database_path_from_env_value, CoreConfig};
pub use directory::{DeleteOutcome, PatientDirectoryService};
pub use error::{StoreError, StoreResult};
pub use patient::{NewPatient, Patient};
pub use store::{PatientStore, SqlitePatientStore};
