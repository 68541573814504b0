//! # API Shared
//!
//! Shared definitions for the Mediscreen assessment API.
//!
//! Contains:
//! - Wire DTOs (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; the DTOs carry the wire shape, not the domain rules.

pub mod dto;
pub mod health;

pub use dto::{AssessmentRes, ErrorRes, HealthRes, RiskLevelDto};
pub use health::HealthService;
