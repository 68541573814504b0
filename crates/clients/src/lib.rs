//! # Mediscreen Clients
//!
//! HTTP implementations of the assessment collaborators.
//!
//! - [`HttpPatientDirectory`] reads demographics from the patient registry.
//! - [`HttpNotesRepository`] reads clinical notes from the notes store.
//!
//! Both are built from a [`CoreConfig`] at startup and share one connection pool each. Every
//! request carries the configured timeout. Failures are never retried here: a transport error,
//! an unexpected status or an undecodable body surfaces as
//! [`AssessmentError::CollaboratorUnavailable`].

#![warn(rust_2018_idioms)]

mod notes;
mod patients;
mod wire;

pub use notes::HttpNotesRepository;
pub use patients::HttpPatientDirectory;

use mediscreen_core::{AssessmentError, Collaborator, CoreConfig, CoreResult};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build both HTTP collaborators from the startup configuration.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidInput`] if a base URL cannot be parsed or the HTTP client
/// cannot be constructed.
pub fn from_config(cfg: &CoreConfig) -> CoreResult<(HttpPatientDirectory, HttpNotesRepository)> {
    let patients = HttpPatientDirectory::new(cfg.patient_service_url(), cfg.collaborator_timeout())?;
    let notes = HttpNotesRepository::new(cfg.notes_service_url(), cfg.collaborator_timeout())?;
    Ok((patients, notes))
}

/// Base URL plus pooled client for one collaborator.
#[derive(Clone, Debug)]
struct ServiceEndpoint {
    collaborator: Collaborator,
    base_url: Url,
    client: reqwest::Client,
}

/// Outcome of a GET that may legitimately miss.
enum Fetched<T> {
    Found(T),
    Missing,
}

impl ServiceEndpoint {
    fn new(collaborator: Collaborator, base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AssessmentError::InvalidInput(format!("invalid {collaborator} URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AssessmentError::InvalidInput(format!(
                "{collaborator} URL '{base_url}' cannot be used as a base"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AssessmentError::InvalidInput(format!("failed to build {collaborator} client: {e}"))
            })?;

        Ok(Self {
            collaborator,
            base_url,
            client,
        })
    }

    /// Append `route` (slash separated) and then `segments` to the base URL, percent-encoding
    /// each segment.
    ///
    /// Returns `None` if a segment is `.` or `..`: URL normalisation would drop it and the
    /// request would land on a different resource.
    fn url(&self, route: &str, segments: &[&str]) -> Option<Url> {
        if segments.iter().any(|s| matches!(*s, "." | "..")) {
            return None;
        }
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(route.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }
        Some(url)
    }

    /// GET `url` and decode a JSON body. A 404 yields [`Fetched::Missing`].
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CoreResult<Fetched<T>> {
        tracing::debug!(collaborator = %self.collaborator, %url, "collaborator request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AssessmentError::unavailable(self.collaborator, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Fetched::Missing);
        }
        if !status.is_success() {
            return Err(AssessmentError::unavailable(
                self.collaborator,
                format!("unexpected status {status}"),
            ));
        }

        let body = response.json::<T>().await.map_err(|e| {
            AssessmentError::unavailable(self.collaborator, format!("invalid response body: {e}"))
        })?;

        Ok(Fetched::Found(body))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> ServiceEndpoint {
        ServiceEndpoint::new(Collaborator::Notes, base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_url_joins_route_and_segments() {
        let url = endpoint("http://notes.local:8082").url("notes/patient", &["12"]).unwrap();
        assert_eq!(url.as_str(), "http://notes.local:8082/notes/patient/12");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let url = endpoint("http://gateway.local/api").url("notes/patient", &["12"]).unwrap();
        assert_eq!(url.as_str(), "http://gateway.local/api/notes/patient/12");
    }

    #[test]
    fn test_url_percent_encodes_segments() {
        let url = endpoint("http://notes.local").url("notes/patient", &["a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://notes.local/notes/patient/a%2Fb%20c");
    }

    #[test]
    fn test_url_refuses_dot_segments() {
        let endpoint = endpoint("http://notes.local");
        assert!(endpoint.url("notes/patient", &[".."]).is_none());
        assert!(endpoint.url("notes/patient", &["."]).is_none());
        assert!(endpoint.url("notes/patient", &["..."]).is_some());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ServiceEndpoint::new(Collaborator::Patients, "not a url", Duration::from_secs(1))
            .expect_err("invalid URL should fail");
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
    }

    #[test]
    fn test_from_config_builds_both_clients() {
        let cfg = CoreConfig::new(
            "http://patients.local",
            "http://notes.local",
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(from_config(&cfg).is_ok());
    }
}
