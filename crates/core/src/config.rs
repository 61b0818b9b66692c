//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_DATABASE_PATH, IN_MEMORY_DATABASE};
use crate::error::StoreResult;
use crate::store::SqlitePatientStore;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    database_path: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` pointing at the given SQLite database.
    pub fn new(database_path: PathBuf) -> Self {
        Self { database_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Whether the configured database lives only in process memory.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY_DATABASE
    }

    /// Opens the configured store, applying any pending migrations.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the database cannot be opened or migrated.
    pub fn open_store(&self) -> StoreResult<SqlitePatientStore> {
        if self.is_in_memory() {
            SqlitePatientStore::open_in_memory()
        } else {
            SqlitePatientStore::open(&self.database_path)
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DATABASE_PATH))
    }
}

/// Resolve the database path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default database file.
pub fn database_path_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
}
