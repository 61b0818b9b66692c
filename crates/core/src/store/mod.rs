//! Patient record storage.
//!
//! [`PatientStore`] is the narrow contract the directory service depends on. The shipped
//! engine, [`SqlitePatientStore`], keeps one SQLite connection behind a mutex and enforces the
//! unique document identifier through a `UNIQUE` column constraint.

pub mod migrations;

use crate::constants::BUSY_TIMEOUT_SECS;
use crate::error::{StoreError, StoreResult};
use crate::patient::Patient;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

const PATIENT_SELECT_SQL: &str = "SELECT
    id,
    nombre,
    apellido,
    documento,
    fecha_nacimiento,
    tratamiento
FROM pacientes";

/// Durable keyed storage for patient records.
pub trait PatientStore: Send + Sync {
    /// Inserts `record` when it has no id, otherwise persists its current fields.
    ///
    /// Fails with [`StoreError::ConstraintViolation`] when the document identifier belongs to a
    /// different record.
    fn save(&self, record: Patient) -> StoreResult<Patient>;

    /// Returns every stored record.
    fn find_all(&self) -> StoreResult<Vec<Patient>>;

    /// Returns the record with the given document identifier, if any.
    fn find_by_document(&self, document: &str) -> StoreResult<Option<Patient>>;

    /// Removes the row behind `record`. Not idempotent: an absent row is an error.
    fn delete(&self, record: &Patient) -> StoreResult<()>;
}

/// SQLite-backed patient store.
pub struct SqlitePatientStore {
    conn: Mutex<Connection>,
}

impl SqlitePatientStore {
    /// Opens a SQLite database file and applies all pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        let conn = Connection::open(path)?;
        let store = Self::bootstrap(conn)?;

        tracing::info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "opened patient store"
        );
        Ok(store)
    }

    /// Opens a private in-memory database and applies all pending migrations.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self::bootstrap(conn)?;

        tracing::info!("opened in-memory patient store");
        Ok(store)
    }

    fn bootstrap(mut conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS))?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl PatientStore for SqlitePatientStore {
    fn save(&self, mut record: Patient) -> StoreResult<Patient> {
        let conn = self.lock()?;

        match record.id {
            None => {
                conn.execute(
                    "INSERT INTO pacientes (
                        nombre,
                        apellido,
                        documento,
                        fecha_nacimiento,
                        tratamiento
                    ) VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        record.first_name,
                        record.last_name,
                        record.document,
                        record.birth_date,
                        record.treatment,
                    ],
                )
                .map_err(|err| write_error(err, &record.document))?;

                record.id = Some(conn.last_insert_rowid());
            }
            Some(id) => {
                let changed = conn
                    .execute(
                        "UPDATE pacientes
                         SET
                            nombre = ?1,
                            apellido = ?2,
                            documento = ?3,
                            fecha_nacimiento = ?4,
                            tratamiento = ?5
                         WHERE id = ?6;",
                        params![
                            record.first_name,
                            record.last_name,
                            record.document,
                            record.birth_date,
                            record.treatment,
                            id,
                        ],
                    )
                    .map_err(|err| write_error(err, &record.document))?;

                if changed == 0 {
                    return Err(StoreError::MissingRow(id));
                }
            }
        }

        Ok(record)
    }

    fn find_all(&self) -> StoreResult<Vec<Patient>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{PATIENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let patients = stmt
            .query_map([], parse_patient_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }

    fn find_by_document(&self, document: &str) -> StoreResult<Option<Patient>> {
        let conn = self.lock()?;
        let patient = conn
            .query_row(
                &format!("{PATIENT_SELECT_SQL} WHERE documento = ?1;"),
                params![document],
                parse_patient_row,
            )
            .optional()?;
        Ok(patient)
    }

    fn delete(&self, record: &Patient) -> StoreResult<()> {
        let id = record.id.ok_or(StoreError::Unsaved)?;
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM pacientes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(StoreError::MissingRow(id));
        }

        Ok(())
    }
}

fn parse_patient_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: Some(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        document: row.get(3)?,
        birth_date: row.get(4)?,
        treatment: row.get(5)?,
    })
}

fn write_error(err: rusqlite::Error, document: &str) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::ConstraintViolation {
                documento: document.to_string(),
            }
        }
        _ => StoreError::Sqlite(err),
    }
}
