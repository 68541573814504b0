//! Read-only collaborator contracts.
//!
//! The assessment core owns no data. It reads patient demographics from a [`PatientDirectory`]
//! and clinical notes from a [`NotesRepository`]. HTTP implementations live in the
//! `mediscreen-clients` crate; the in-memory implementations here back tests, demos and
//! offline use.

use crate::models::{IdentifiedPatient, Note, PatientProfile};
use crate::{AssessmentError, CoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Patient registry lookups.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    /// Fetch the profile of one patient.
    ///
    /// # Errors
    ///
    /// - [`AssessmentError::PatientNotFound`] if `patient_id` is unknown.
    /// - [`AssessmentError::CollaboratorUnavailable`] on transport or protocol failure.
    async fn get_patient(&self, patient_id: &str) -> CoreResult<PatientProfile>;

    /// Every patient whose family name matches `family_name`, possibly none.
    async fn find_by_family_name(&self, family_name: &str) -> CoreResult<Vec<IdentifiedPatient>>;
}

/// Clinical notes lookups.
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Every note recorded for `patient_id`; empty when there are none.
    async fn notes_for_patient(&self, patient_id: &str) -> CoreResult<Vec<Note>>;
}

// ============================================================================
// In-memory collaborators
// ============================================================================

/// Patient registry held in memory, keyed by patient id.
#[derive(Debug, Default)]
pub struct InMemoryPatientDirectory {
    patients: HashMap<String, PatientProfile>,
}

impl InMemoryPatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patient(mut self, patient_id: impl Into<String>, profile: PatientProfile) -> Self {
        self.patients.insert(patient_id.into(), profile);
        self
    }
}

#[async_trait]
impl PatientDirectory for InMemoryPatientDirectory {
    async fn get_patient(&self, patient_id: &str) -> CoreResult<PatientProfile> {
        self.patients
            .get(patient_id)
            .cloned()
            .ok_or_else(|| AssessmentError::PatientNotFound(patient_id.to_string()))
    }

    async fn find_by_family_name(&self, family_name: &str) -> CoreResult<Vec<IdentifiedPatient>> {
        let mut found: Vec<IdentifiedPatient> = self
            .patients
            .iter()
            .filter(|(_, profile)| profile.family_name.eq_ignore_ascii_case(family_name.trim()))
            .map(|(id, profile)| IdentifiedPatient {
                id: id.clone(),
                profile: profile.clone(),
            })
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }
}

/// Notes store held in memory. Counts how often it is queried.
#[derive(Debug, Default)]
pub struct InMemoryNotesRepository {
    notes: HashMap<String, Vec<Note>>,
    lookups: AtomicUsize,
}

impl InMemoryNotesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note body for `patient_id`, numbering note ids per patient.
    pub fn with_note(mut self, patient_id: impl Into<String>, body: impl Into<String>) -> Self {
        let notes = self.notes.entry(patient_id.into()).or_default();
        notes.push(Note {
            id: (notes.len() + 1).to_string(),
            body: body.into(),
            created: None,
        });
        self
    }

    /// Number of `notes_for_patient` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotesRepository for InMemoryNotesRepository {
    async fn notes_for_patient(&self, patient_id: &str) -> CoreResult<Vec<Note>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.notes.get(patient_id).cloned().unwrap_or_default())
    }
}
