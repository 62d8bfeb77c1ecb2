use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a health payload, probing store connectivity.
///
/// Store trouble is reported as degraded, never as an error: the rest of
/// the application fails open around it.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "store health check failed");
            HealthResponse::degraded()
        }
    }
}
