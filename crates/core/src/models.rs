//! Domain-level types for a single assessment.
//!
//! Profiles and notes are read-only snapshots handed over by the collaborators; the
//! [`AssessmentResult`] is created fresh per request and never stored.

use chrono::NaiveDate;
use serde::Serialize;

// ============================================================================
// Gender
// ============================================================================

/// Administrative gender as recorded by the patient registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the registry's representation.
    ///
    /// Accepts `M`, `F`, `Male` and `Female` in any case, ignoring surrounding whitespace.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::from_wire(s).ok_or_else(|| format!("unrecognised gender '{s}'"))
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ============================================================================
// RiskLevel
// ============================================================================

/// Diabetes risk classification, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl RiskLevel {
    /// Human-readable label used in assessment summaries.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::InDanger => "In Danger",
            RiskLevel::EarlyOnset => "Early onset",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Collaborator snapshots
// ============================================================================

/// Demographic snapshot fetched from the patient registry for one assessment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientProfile {
    pub family_name: String,
    pub given_name: String,
    pub birthdate: NaiveDate,
    pub gender: Gender,
}

impl PatientProfile {
    /// Given name followed by family name, skipping whichever part is blank.
    pub fn display_name(&self) -> String {
        [self.given_name.trim(), self.family_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A profile together with the registry identifier it was found under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifiedPatient {
    pub id: String,
    pub profile: PatientProfile,
}

/// One clinical note as returned by the notes store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub body: String,
    pub created: Option<NaiveDate>,
}

// ============================================================================
// AssessmentResult
// ============================================================================

/// Outcome of assessing one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub patient_name: String,
    pub age: u32,
    pub trigger_count: usize,
    pub risk_level: RiskLevel,
}

impl std::fmt::Display for AssessmentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient: {} (age {}) diabetes assessment is: {}",
            self.patient_name, self.age, self.risk_level
        )
    }
}
