//! Patient directory service.
//!
//! Each operation is a single round trip to the injected [`PatientStore`]. Store failures are
//! returned unchanged; absence is reported through `Option` or [`DeleteOutcome`], never as an
//! error.

use crate::constants::{DELETED_MESSAGE, NOT_FOUND_MESSAGE};
use crate::error::{StoreError, StoreResult};
use crate::patient::{NewPatient, Patient};
use crate::store::PatientStore;
use std::sync::Arc;

/// Result of a delete-by-document request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    /// Human-readable outcome string returned to HTTP and CLI callers.
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => DELETED_MESSAGE,
            Self::NotFound => NOT_FOUND_MESSAGE,
        }
    }
}

impl std::fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Pure patient data operations - no API concerns
#[derive(Clone)]
pub struct PatientDirectoryService {
    store: Arc<dyn PatientStore>,
}

impl PatientDirectoryService {
    /// Creates a directory service backed by `store`.
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    /// Persists a new patient built from `input`.
    ///
    /// # Returns
    ///
    /// The stored record, including the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConstraintViolation` if the document identifier already exists, or
    /// whatever other error the store raises.
    pub fn create(&self, input: NewPatient) -> StoreResult<Patient> {
        let patient = self.store.save(Patient::from(input))?;
        tracing::info!(id = ?patient.id, documento = %patient.document, "patient created");
        Ok(patient)
    }

    /// Lists every stored patient. An empty store yields an empty vector.
    pub fn list_all(&self) -> StoreResult<Vec<Patient>> {
        let patients = self.store.find_all()?;
        tracing::debug!(count = patients.len(), "listed patients");
        Ok(patients)
    }

    /// Looks up a patient by document identifier.
    pub fn find_by_document(&self, document: &str) -> StoreResult<Option<Patient>> {
        let patient = self.store.find_by_document(document)?;
        tracing::debug!(documento = %document, found = patient.is_some(), "patient lookup");
        Ok(patient)
    }

    /// Replaces the treatment of the patient with the given document identifier.
    ///
    /// Returns `Ok(None)` and leaves the store untouched when no patient matches.
    pub fn update_treatment(
        &self,
        document: &str,
        treatment: impl Into<String>,
    ) -> StoreResult<Option<Patient>> {
        let Some(mut patient) = self.store.find_by_document(document)? else {
            tracing::debug!(documento = %document, "treatment update skipped, no such patient");
            return Ok(None);
        };

        patient.treatment = treatment.into();
        let patient = self.store.save(patient)?;
        tracing::info!(documento = %document, "patient treatment updated");
        Ok(Some(patient))
    }

    /// Removes the patient with the given document identifier.
    ///
    /// If the row found by the lookup is removed by another caller before this delete reaches
    /// the store, the outcome is still [`DeleteOutcome::Deleted`]: the record is gone either way.
    pub fn delete(&self, document: &str) -> StoreResult<DeleteOutcome> {
        let Some(patient) = self.store.find_by_document(document)? else {
            return Ok(DeleteOutcome::NotFound);
        };

        match self.store.delete(&patient) {
            Ok(()) => tracing::info!(documento = %document, "patient deleted"),
            Err(StoreError::MissingRow(id)) => {
                tracing::debug!(documento = %document, id, "patient already deleted");
            }
            Err(err) => return Err(err),
        }
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqlitePatientStore;
    use chrono::NaiveDate;

    fn service() -> PatientDirectoryService {
        let store = SqlitePatientStore::open_in_memory().expect("in-memory store should open");
        PatientDirectoryService::new(Arc::new(store))
    }

    fn ana() -> NewPatient {
        NewPatient {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            document: "123".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            treatment: "none".into(),
        }
    }

    /// Store whose every call fails, to check that errors pass through untouched.
    struct BrokenStore;

    impl PatientStore for BrokenStore {
        fn save(&self, _record: Patient) -> StoreResult<Patient> {
            Err(StoreError::Poisoned)
        }

        fn find_all(&self) -> StoreResult<Vec<Patient>> {
            Err(StoreError::Poisoned)
        }

        fn find_by_document(&self, _document: &str) -> StoreResult<Option<Patient>> {
            Err(StoreError::Poisoned)
        }

        fn delete(&self, _record: &Patient) -> StoreResult<()> {
            Err(StoreError::Poisoned)
        }
    }

    /// Store that removes the row itself between the lookup and the delete, as a concurrent
    /// caller would.
    struct RacingDeleteStore {
        inner: SqlitePatientStore,
    }

    impl PatientStore for RacingDeleteStore {
        fn save(&self, record: Patient) -> StoreResult<Patient> {
            self.inner.save(record)
        }

        fn find_all(&self) -> StoreResult<Vec<Patient>> {
            self.inner.find_all()
        }

        fn find_by_document(&self, document: &str) -> StoreResult<Option<Patient>> {
            self.inner.find_by_document(document)
        }

        fn delete(&self, record: &Patient) -> StoreResult<()> {
            self.inner.delete(record)?;
            self.inner.delete(record)
        }
    }

    #[test]
    fn create_echoes_input_and_assigns_id() {
        let svc = service();
        let input = ana();

        let created = svc.create(input.clone()).unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.first_name, input.first_name);
        assert_eq!(created.last_name, input.last_name);
        assert_eq!(created.document, input.document);
        assert_eq!(created.birth_date, input.birth_date);
        assert_eq!(created.treatment, input.treatment);
    }

    #[test]
    fn duplicate_create_keeps_only_the_original() {
        let svc = service();
        let original = svc.create(ana()).unwrap();

        let mut duplicate = ana();
        duplicate.first_name = "Otra".into();
        let err = svc.create(duplicate).unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(svc.list_all().unwrap(), vec![original]);
    }

    #[test]
    fn list_all_on_empty_store_is_empty() {
        assert!(service().list_all().unwrap().is_empty());
    }

    #[test]
    fn find_returns_what_was_created() {
        let svc = service();
        let created = svc.create(ana()).unwrap();

        assert_eq!(svc.find_by_document("123").unwrap(), Some(created));
        assert_eq!(svc.find_by_document("999").unwrap(), None);
    }

    #[test]
    fn update_treatment_changes_only_treatment() {
        let svc = service();
        let created = svc.create(ana()).unwrap();

        let updated = svc
            .update_treatment("123", "insulin")
            .unwrap()
            .expect("patient should exist");

        assert_eq!(updated.treatment, "insulin");
        assert_eq!(
            Patient {
                treatment: created.treatment.clone(),
                ..updated.clone()
            },
            created
        );
        assert_eq!(svc.find_by_document("123").unwrap(), Some(updated));
    }

    #[test]
    fn update_treatment_on_unknown_document_is_none() {
        let svc = service();
        let created = svc.create(ana()).unwrap();

        assert_eq!(svc.update_treatment("999", "insulin").unwrap(), None);
        assert_eq!(svc.list_all().unwrap(), vec![created]);
    }

    #[test]
    fn delete_reports_outcome() {
        let svc = service();
        let other = svc
            .create(NewPatient {
                document: "456".into(),
                ..ana()
            })
            .unwrap();
        svc.create(ana()).unwrap();

        assert_eq!(svc.delete("123").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(svc.find_by_document("123").unwrap(), None);

        assert_eq!(svc.delete("123").unwrap(), DeleteOutcome::NotFound);
        assert_eq!(svc.list_all().unwrap(), vec![other]);
    }

    #[test]
    fn delete_racing_another_delete_still_reports_deleted() {
        let store = RacingDeleteStore {
            inner: SqlitePatientStore::open_in_memory().unwrap(),
        };
        let svc = PatientDirectoryService::new(Arc::new(store));
        svc.create(ana()).unwrap();

        assert_eq!(svc.delete("123").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(svc.find_by_document("123").unwrap(), None);
    }

    #[test]
    fn outcome_messages_match_legacy_strings() {
        assert_eq!(DeleteOutcome::Deleted.message(), "Paciente eliminado");
        assert_eq!(DeleteOutcome::NotFound.to_string(), "No existe");
    }

    #[test]
    fn walkthrough_create_update_delete() {
        let svc = service();

        let created = svc.create(ana()).unwrap();
        assert_eq!(created.document, "123");
        assert_eq!(created.treatment, "none");

        let updated = svc.update_treatment("123", "insulin").unwrap().unwrap();
        assert_eq!(updated.treatment, "insulin");

        assert_eq!(svc.delete("123").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(svc.find_by_document("123").unwrap(), None);
    }

    #[test]
    fn store_errors_propagate_unchanged() {
        let svc = PatientDirectoryService::new(Arc::new(BrokenStore));

        assert!(matches!(svc.create(ana()), Err(StoreError::Poisoned)));
        assert!(matches!(svc.list_all(), Err(StoreError::Poisoned)));
        assert!(matches!(
            svc.find_by_document("123"),
            Err(StoreError::Poisoned)
        ));
        assert!(matches!(
            svc.update_treatment("123", "insulin"),
            Err(StoreError::Poisoned)
        ));
        assert!(matches!(svc.delete("123"), Err(StoreError::Poisoned)));
    }
}
