//! Constants used throughout the assessment core.
//!
//! Defaults for startup configuration and the collaborator route templates live here so the
//! binaries, the HTTP clients and the tests agree on them.

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// Default base URL of the patient registry.
pub const DEFAULT_PATIENT_SERVICE_URL: &str = "http://localhost:8081";

/// Default base URL of the clinical notes store.
pub const DEFAULT_NOTES_SERVICE_URL: &str = "http://localhost:8082";

/// Default per-request timeout for collaborator calls, in seconds.
pub const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 5;

/// Patient registry collection route, relative to its base URL. A single patient lives at
/// `{PATIENTS_PATH}/{id}`; the family-name search is a query on the collection itself.
pub const PATIENTS_PATH: &str = "patients";

/// Notes store route listing every note of a patient, relative to its base URL.
pub const NOTES_BY_PATIENT_PATH: &str = "notes/patient";

/// Age above which the classifier ignores gender.
pub const GENDER_BLIND_AGE_THRESHOLD: u32 = 30;
