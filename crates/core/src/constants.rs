//! Constants used throughout the historial core crate.

/// Default SQLite database file when no explicit path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "historial.db";

/// Database path value that selects a private in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Seconds SQLite waits on a locked database before giving up.
pub const BUSY_TIMEOUT_SECS: u64 = 5;

/// Outcome message returned when a patient record was removed.
pub const DELETED_MESSAGE: &str = "Paciente eliminado";

/// Outcome message returned when no patient record matched the document.
pub const NOT_FOUND_MESSAGE: &str = "No existe";
