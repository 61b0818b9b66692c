//! Route handlers for the patient directory.
//!
//! Directory operations are synchronous store round trips, so each handler hands its call to
//! tokio's blocking pool through [`run_directory`].

pub mod create;
pub mod delete;
pub mod find;
pub mod health;
pub mod list;
pub mod update;

use historial_core::{PatientDirectoryService, StoreResult};

use crate::{error::Result, AppState};

/// Runs `op` against the directory service on the blocking pool.
async fn run_directory<T, F>(state: &AppState, op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&PatientDirectoryService) -> StoreResult<T> + Send + 'static,
{
    let directory = state.directory.clone();
    let value = tokio::task::spawn_blocking(move || op(&directory)).await??;
    Ok(value)
}
