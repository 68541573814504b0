//! # API REST
//!
//! REST API for the Mediscreen assessment service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation served as JSON
//! - REST-specific concerns (JSON serialisation, CORS, request tracing, status mapping)
//!
//! Uses `api-shared` for wire types and `mediscreen-core` for the assessment itself.

#![warn(rust_2018_idioms)]

pub mod error;

pub use error::ApiError;

use api_shared::{AssessmentRes, ErrorRes, HealthRes, HealthService, RiskLevelDto};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path as AxumPath, Query, State,
    },
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use mediscreen_core::{age::today, AssessmentService};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{IntoParams, OpenApi};

/// Application state shared across REST API handlers.
#[derive(Clone)]
struct AppState {
    assessment_service: AssessmentService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, assess_patient, assess_family, openapi_json),
    components(schemas(HealthRes, ErrorRes, AssessmentRes, RiskLevelDto))
)]
struct ApiDoc;

/// Optional reference date for the age calculation; defaults to today.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct AsOfQuery {
    #[serde(rename = "asOf")]
    as_of: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
struct FamilyQuery {
    family_name: String,
    as_of: Option<NaiveDate>,
}

/// Build the REST router over an assessment service.
pub fn router(assessment_service: AssessmentService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assess", get(assess_family))
        .route("/assess/:patient_id", get(assess_patient))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { assessment_service })
}

/// Bind `addr` and serve the REST API until the server fails.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, assessment_service: AssessmentService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Mediscreen REST listening on {}", listener.local_addr()?);
    axum::serve(listener, router(assessment_service)).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/assess/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient registry identifier"),
        AsOfQuery
    ),
    responses(
        (status = 200, description = "Diabetes risk assessment", body = AssessmentRes),
        (status = 400, description = "Invalid input or birthdate after the reference date", body = ErrorRes),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 503, description = "Patient or notes service unavailable", body = ErrorRes)
    )
)]
/// Assess one patient's diabetes risk.
///
/// Reads the patient's profile and notes, counts trigger terms and classifies the risk as of
/// `asOf` (today when omitted).
///
/// # Errors
/// Returns `404 Not Found` for an unknown patient, `400 Bad Request` for a birthdate after the
/// reference date, and `503 Service Unavailable` when a collaborator cannot be reached.
#[axum::debug_handler]
async fn assess_patient(
    State(state): State<AppState>,
    patient_id: Result<AxumPath<String>, PathRejection>,
    query: Result<Query<AsOfQuery>, QueryRejection>,
) -> Result<Json<AssessmentRes>, ApiError> {
    let AxumPath(patient_id) = patient_id?;
    let Query(query) = query?;
    let as_of = query.as_of.unwrap_or_else(today);
    let result = state
        .assessment_service
        .assess_as_of(&patient_id, as_of)
        .await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/assess",
    params(FamilyQuery),
    responses(
        (status = 200, description = "One assessment per matching patient", body = [AssessmentRes]),
        (status = 400, description = "Invalid input", body = ErrorRes),
        (status = 404, description = "No patient with that family name", body = ErrorRes),
        (status = 503, description = "Patient or notes service unavailable", body = ErrorRes)
    )
)]
/// Assess every patient registered under a family name.
#[axum::debug_handler]
async fn assess_family(
    State(state): State<AppState>,
    query: Result<Query<FamilyQuery>, QueryRejection>,
) -> Result<Json<Vec<AssessmentRes>>, ApiError> {
    let Query(query) = query?;
    let as_of = query.as_of.unwrap_or_else(today);
    let results = state
        .assessment_service
        .assess_by_family_name(&query.family_name, as_of)
        .await?;
    Ok(Json(results.into_iter().map(AssessmentRes::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api-docs/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document for this API")
    )
)]
#[axum::debug_handler]
async fn openapi_json(State(_state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
