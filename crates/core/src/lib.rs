//! # Mediscreen Core
//!
//! Core logic of the diabetes risk assessment service.
//!
//! This crate contains the pure assessment pipeline:
//! - The fixed trigger vocabulary and the note scanner built on it
//! - Whole-years age calculation
//! - The age/gender/trigger-count risk table
//! - The [`AssessmentService`] that reads a patient's profile and notes from the collaborators
//!   and assembles an [`AssessmentResult`]
//!
//! **No transport concerns**: HTTP clients for the patient and notes services live in
//! `mediscreen-clients`; the REST surface lives in `api-rest`.

pub mod age;
pub mod assessment;
pub mod classifier;
pub mod collaborators;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod scanner;
pub mod vocabulary;

pub use assessment::AssessmentService;
pub use classifier::classify;
pub use collaborators::{
    InMemoryNotesRepository, InMemoryPatientDirectory, NotesRepository, PatientDirectory,
};
pub use config::CoreConfig;
pub use error::{AssessmentError, Collaborator, CoreResult};
pub use models::{AssessmentResult, Gender, IdentifiedPatient, Note, PatientProfile, RiskLevel};
pub use scanner::{NoteTextScanner, ScanReport, TriggerMatch};
pub use vocabulary::{TriggerVocabulary, TRIGGER_TERMS};
