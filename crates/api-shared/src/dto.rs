//! Wire DTOs for the assessment API.
//!
//! JSON field names are camelCase to match the gateway and the other Mediscreen services.

use mediscreen_core::{AssessmentResult, RiskLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned with every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Risk level as exposed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevelDto {
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl From<RiskLevel> for RiskLevelDto {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::None => RiskLevelDto::None,
            RiskLevel::Borderline => RiskLevelDto::Borderline,
            RiskLevel::InDanger => RiskLevelDto::InDanger,
            RiskLevel::EarlyOnset => RiskLevelDto::EarlyOnset,
        }
    }
}

/// One patient's assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRes {
    pub patient_name: String,
    pub age: u32,
    pub trigger_count: usize,
    pub risk_level: RiskLevelDto,
    /// Sentence form, e.g. `Patient: Test TestNone (age 57) diabetes assessment is: None`.
    pub summary: String,
}

impl From<AssessmentResult> for AssessmentRes {
    fn from(result: AssessmentResult) -> Self {
        let summary = result.to_string();
        Self {
            patient_name: result.patient_name,
            age: result.age,
            trigger_count: result.trigger_count,
            risk_level: result.risk_level.into(),
            summary,
        }
    }
}
