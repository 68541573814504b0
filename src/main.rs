use std::sync::Arc;

use mediscreen_core::config::timeout_from_env_value;
use mediscreen_core::constants::{
    DEFAULT_NOTES_SERVICE_URL, DEFAULT_PATIENT_SERVICE_URL, DEFAULT_REST_ADDR,
};
use mediscreen_core::{AssessmentService, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Mediscreen assessment service
///
/// Resolves configuration once, builds the HTTP collaborators and serves the REST API.
///
/// # Environment Variables
/// - `MEDISCREEN_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `PATIENT_SERVICE_URL`: patient registry base URL (default: "http://localhost:8081")
/// - `NOTES_SERVICE_URL`: notes store base URL (default: "http://localhost:8082")
/// - `COLLABORATOR_TIMEOUT_SECS`: per-request collaborator timeout (default: 5)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mediscreen=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("MEDISCREEN_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let patient_url = std::env::var("PATIENT_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_PATIENT_SERVICE_URL.into());
    let notes_url =
        std::env::var("NOTES_SERVICE_URL").unwrap_or_else(|_| DEFAULT_NOTES_SERVICE_URL.into());
    let timeout = timeout_from_env_value(std::env::var("COLLABORATOR_TIMEOUT_SECS").ok())?;

    let cfg = CoreConfig::new(patient_url, notes_url, timeout)?;
    tracing::info!(
        "++ Patient service at {}, notes service at {} (timeout {:?})",
        cfg.patient_service_url(),
        cfg.notes_service_url(),
        cfg.collaborator_timeout()
    );

    let (patients, notes) = mediscreen_clients::from_config(&cfg)?;
    let service = AssessmentService::new(Arc::new(patients), Arc::new(notes));

    tracing::info!("++ Starting Mediscreen REST on {}", rest_addr);
    api_rest::serve(&rest_addr, service).await
}
