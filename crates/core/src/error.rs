/// Errors raised by a [`crate::store::PatientStore`] and passed through the directory service
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a patient with documento {documento} already exists")]
    ConstraintViolation { documento: String },
    #[error("patient row {0} does not exist")]
    MissingRow(i64),
    #[error("patient record has not been saved yet")]
    Unsaved,
    #[error("store connection lock was poisoned")]
    Poisoned,
    #[error(
        "database schema version {db_version} is newer than supported {latest_supported}"
    )]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Returns `true` when the error reports a duplicate document identifier.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
