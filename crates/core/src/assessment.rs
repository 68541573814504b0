//! Diabetes risk assessment.
//!
//! [`AssessmentService`] is the entry point used by the REST API and the CLI. For each request
//! it reads the patient's profile and notes from the collaborators, counts trigger terms across
//! the notes, works out the patient's age and classifies the risk. Nothing is cached between
//! calls, so every result reflects the notes as they are at request time.
//!
//! The profile and notes lookups are independent and run concurrently. The profile outcome is
//! always inspected first: an unknown patient is reported as not found even if the notes lookup
//! failed, and the notes of an unknown patient are never scanned.

use crate::age::{age, today};
use crate::classifier::classify;
use crate::collaborators::{NotesRepository, PatientDirectory};
use crate::models::{AssessmentResult, PatientProfile};
use crate::scanner::NoteTextScanner;
use crate::{AssessmentError, CoreResult};
use chrono::NaiveDate;
use std::sync::Arc;

/// Stateless assessment service; cheap to clone and share across tasks.
#[derive(Clone)]
pub struct AssessmentService {
    patients: Arc<dyn PatientDirectory>,
    notes: Arc<dyn NotesRepository>,
    scanner: NoteTextScanner,
}

impl AssessmentService {
    /// Creates a new assessment service over the given collaborators.
    pub fn new(patients: Arc<dyn PatientDirectory>, notes: Arc<dyn NotesRepository>) -> Self {
        Self {
            patients,
            notes,
            scanner: NoteTextScanner::new(),
        }
    }

    /// Assesses a patient as of today.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` if:
    /// - the patient is unknown ([`AssessmentError::PatientNotFound`]),
    /// - the recorded birthdate is in the future ([`AssessmentError::InvalidDate`]),
    /// - either collaborator cannot be reached ([`AssessmentError::CollaboratorUnavailable`]).
    pub async fn assess(&self, patient_id: &str) -> CoreResult<AssessmentResult> {
        self.assess_as_of(patient_id, today()).await
    }

    /// Assesses a patient with an explicit reference date for the age calculation.
    ///
    /// # Errors
    ///
    /// Same as [`assess`](Self::assess).
    pub async fn assess_as_of(
        &self,
        patient_id: &str,
        as_of: NaiveDate,
    ) -> CoreResult<AssessmentResult> {
        let patient_id = validate_lookup_key("patient id", patient_id)?;

        let (profile, notes) = tokio::join!(
            self.patients.get_patient(patient_id),
            self.notes.notes_for_patient(patient_id),
        );

        // Profile errors return here, before any note is scanned.
        let profile = profile.inspect_err(|e| log_lookup_failure(patient_id, e))?;
        let notes = notes.inspect_err(|e| log_lookup_failure(patient_id, e))?;

        let bodies: Vec<&str> = notes.iter().map(|note| note.body.as_str()).collect();
        self.evaluate(patient_id, &profile, &bodies, as_of)
    }

    /// Assesses every patient registered under `family_name`, ordered as the registry
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::PatientNotFound`] if no patient has that family name, and
    /// otherwise fails on the first patient that cannot be assessed.
    pub async fn assess_by_family_name(
        &self,
        family_name: &str,
        as_of: NaiveDate,
    ) -> CoreResult<Vec<AssessmentResult>> {
        let family_name = validate_lookup_key("family name", family_name)?;

        let matches = self.patients.find_by_family_name(family_name).await?;
        if matches.is_empty() {
            return Err(AssessmentError::PatientNotFound(format!(
                "family name '{family_name}'"
            )));
        }

        let mut results = Vec::with_capacity(matches.len());
        for patient in matches {
            let notes = self
                .notes
                .notes_for_patient(&patient.id)
                .await
                .inspect_err(|e| log_lookup_failure(&patient.id, e))?;
            let bodies: Vec<&str> = notes.iter().map(|note| note.body.as_str()).collect();
            results.push(self.evaluate(&patient.id, &patient.profile, &bodies, as_of)?);
        }

        Ok(results)
    }

    fn evaluate(
        &self,
        patient_id: &str,
        profile: &PatientProfile,
        bodies: &[&str],
        as_of: NaiveDate,
    ) -> CoreResult<AssessmentResult> {
        let trigger_count = self.scanner.count_triggers(bodies);
        let age = age(profile.birthdate, as_of)?;
        let risk_level = classify(age, profile.gender, trigger_count);

        tracing::info!(
            patient_id,
            age,
            trigger_count,
            risk_level = ?risk_level,
            "assessed patient"
        );

        Ok(AssessmentResult {
            patient_name: profile.display_name(),
            age,
            trigger_count,
            risk_level,
        })
    }
}

fn validate_lookup_key<'a>(label: &str, value: &'a str) -> CoreResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AssessmentError::InvalidInput(format!(
            "{label} cannot be empty"
        )));
    }
    Ok(trimmed)
}

fn log_lookup_failure(patient_id: &str, error: &AssessmentError) {
    match error {
        AssessmentError::PatientNotFound(_) => {
            tracing::info!(patient_id, "patient not found");
        }
        other => tracing::warn!(patient_id, error = %other, "collaborator lookup failed"),
    }
}
