//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into services. Request handlers never read environment variables; the binaries read
//! them once and hand the parsed values to [`CoreConfig::new`].

use crate::constants::DEFAULT_COLLABORATOR_TIMEOUT_SECS;
use crate::{AssessmentError, CoreResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_service_url: String,
    notes_service_url: String,
    collaborator_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Trailing slashes are stripped from both base URLs so route joining stays uniform.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] if:
    /// - either base URL is empty or does not use `http://` or `https://`,
    /// - the timeout is zero.
    pub fn new(
        patient_service_url: impl Into<String>,
        notes_service_url: impl Into<String>,
        collaborator_timeout: Duration,
    ) -> CoreResult<Self> {
        let patient_service_url = normalise_base_url("patient service", patient_service_url.into())?;
        let notes_service_url = normalise_base_url("notes service", notes_service_url.into())?;

        if collaborator_timeout.is_zero() {
            return Err(AssessmentError::InvalidInput(
                "collaborator timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            patient_service_url,
            notes_service_url,
            collaborator_timeout,
        })
    }

    pub fn patient_service_url(&self) -> &str {
        &self.patient_service_url
    }

    pub fn notes_service_url(&self) -> &str {
        &self.notes_service_url
    }

    pub fn collaborator_timeout(&self) -> Duration {
        self.collaborator_timeout
    }
}

fn normalise_base_url(label: &str, url: String) -> CoreResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AssessmentError::InvalidInput(format!(
            "{label} URL cannot be empty"
        )));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AssessmentError::InvalidInput(format!(
            "{label} URL must start with http:// or https:// (got '{trimmed}')"
        )));
    }
    Ok(trimmed.to_string())
}

/// Parse the collaborator timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn timeout_from_env_value(value: Option<String>) -> CoreResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let secs = match value {
        Some(v) => v.parse::<u64>().map_err(|e| {
            AssessmentError::InvalidInput(format!("invalid collaborator timeout '{v}': {e}"))
        })?,
        None => DEFAULT_COLLABORATOR_TIMEOUT_SECS,
    };

    Ok(Duration::from_secs(secs))
}
