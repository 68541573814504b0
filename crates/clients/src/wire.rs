//! Wire models for the patient and notes services.
//!
//! Both services speak camelCase JSON. Field aliases cover the two naming schemes in use
//! (`firstName`/`givenName`, `lastName`/`familyName`, `dateOfBirth`/`birthdate`,
//! `note`/`body`). Unknown fields are ignored: the services carry address, phone and owner
//! fields that the assessment never reads.

use chrono::NaiveDate;
use mediscreen_core::{AssessmentError, Collaborator, CoreResult, Gender, Note, PatientProfile};
use serde::Deserialize;

/// Record identifier; numeric in the patient registry, textual in the notes store.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum WireId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for WireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireId::Number(n) => write!(f, "{n}"),
            WireId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PatientWire {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(alias = "givenName")]
    pub first_name: String,
    #[serde(alias = "familyName")]
    pub last_name: String,
    #[serde(alias = "birthdate", alias = "birthDate")]
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

impl PatientWire {
    pub fn into_profile(self) -> CoreResult<PatientProfile> {
        let gender = Gender::from_wire(&self.gender).ok_or_else(|| {
            AssessmentError::unavailable(
                Collaborator::Patients,
                format!("unrecognised gender '{}'", self.gender),
            )
        })?;

        Ok(PatientProfile {
            family_name: self.last_name,
            given_name: self.first_name,
            birthdate: self.date_of_birth,
            gender,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NoteWire {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(alias = "body")]
    pub note: String,
    #[serde(default, alias = "createdDate")]
    pub creation_date: Option<NaiveDate>,
}

impl From<NoteWire> for Note {
    fn from(wire: NoteWire) -> Self {
        Note {
            id: wire.id.map(|id| id.to_string()).unwrap_or_default(),
            body: wire.note,
            created: wire.creation_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_wire_accepts_registry_field_names() {
        let wire: PatientWire = serde_json::from_str(
            r#"{"id":3,"firstName":"Test","lastName":"TestInDanger","dateOfBirth":"2004-06-18",
                "gender":"M","address":"3 Club Road","phone":"300-444-5555"}"#,
        )
        .unwrap();

        assert_eq!(wire.id, Some(WireId::Number(3)));
        let profile = wire.into_profile().unwrap();
        assert_eq!(profile.given_name, "Test");
        assert_eq!(profile.family_name, "TestInDanger");
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(
            profile.birthdate,
            NaiveDate::from_ymd_opt(2004, 6, 18).unwrap()
        );
    }

    #[test]
    fn test_patient_wire_accepts_alternate_field_names() {
        let wire: PatientWire = serde_json::from_str(
            r#"{"givenName":"Ann","familyName":"Lee","birthdate":"1990-01-02","gender":"Female"}"#,
        )
        .unwrap();

        let profile = wire.into_profile().unwrap();
        assert_eq!(profile.display_name(), "Ann Lee");
        assert_eq!(profile.gender, Gender::Female);
    }

    #[test]
    fn test_unknown_gender_is_a_collaborator_error() {
        let wire: PatientWire = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","dateOfBirth":"1990-01-02","gender":"X"}"#,
        )
        .unwrap();

        let err = wire.into_profile().expect_err("gender X should be rejected");
        assert!(matches!(
            err,
            AssessmentError::CollaboratorUnavailable {
                collaborator: Collaborator::Patients,
                ..
            }
        ));
    }

    #[test]
    fn test_note_wire_converts_to_note() {
        let wire: NoteWire = serde_json::from_str(
            r#"{"id":"64b1f","patientId":3,"note":"Smoker","creationDate":"2024-02-01"}"#,
        )
        .unwrap();

        let note = Note::from(wire);
        assert_eq!(note.id, "64b1f");
        assert_eq!(note.body, "Smoker");
        assert_eq!(note.created, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_note_wire_tolerates_missing_optional_fields() {
        let wire: NoteWire = serde_json::from_str(r#"{"body":"Weight stable"}"#).unwrap();
        let note = Note::from(wire);
        assert_eq!(note.id, "");
        assert_eq!(note.created, None);
    }
}
