use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::Json;
use mediscreen_core::AssessmentError;

/// Handler error mapped onto an HTTP status with an [`ErrorRes`] body.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unavailable(msg) => {
                tracing::error!("collaborator failure: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "a dependent service is unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorRes { error: message })).into_response()
    }
}

impl From<AssessmentError> for ApiError {
    fn from(e: AssessmentError) -> Self {
        match e {
            AssessmentError::PatientNotFound(_) => ApiError::NotFound(e.to_string()),
            AssessmentError::InvalidDate { .. } | AssessmentError::InvalidInput(_) => {
                ApiError::BadRequest(e.to_string())
            }
            AssessmentError::CollaboratorUnavailable { .. } => ApiError::Unavailable(e.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
