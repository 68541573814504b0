use crate::dto::HealthRes;

/// Health service backing the REST `/health` endpoint.
///
/// Reports liveness only. Collaborator reachability is not probed; a failing collaborator
/// surfaces as a 503 on the assessment endpoints.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Mediscreen assessment is alive".into(),
        }
    }
}
