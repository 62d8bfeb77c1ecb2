//! Match screen services: read-only context and the one-shot outcome submission.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dao::models::{MatchOutcome, MatchResolution},
    dto::match_admin::{MatchContextResponse, MatchRecordedResponse},
    error::ServiceError,
    state::{SharedState, session::ScreenSession},
};

/// Screen the client navigates to after a recorded outcome.
const LEADERBOARD_SCREEN: &str = "/leaderboard";

/// Context for rendering the match screen: two names and the submission phase.
pub async fn match_context(
    state: &SharedState,
    id: Uuid,
) -> Result<MatchContextResponse, ServiceError> {
    let session = state
        .session(id)
        .ok_or_else(|| ServiceError::NotFound(format!("unknown session {id}")))?;
    let guard = session.lock().await;

    let context = guard.match_context();
    let (player_one, player_two) = context.names();
    Ok(MatchContextResponse {
        player_one: player_one.to_string(),
        player_two: player_two.to_string(),
        placeholder: context.is_placeholder(),
        submission: guard.submission_phase().into(),
    })
}

/// Returns an abandoned ticket to idle when the request future is dropped
/// mid-submission, as axum does on client disconnect. Without it the ticket
/// would stay in flight forever and every retry would be refused.
struct SubmissionReset {
    session: Arc<Mutex<ScreenSession>>,
    armed: bool,
}

impl SubmissionReset {
    fn new(session: Arc<Mutex<ScreenSession>>) -> Self {
        Self {
            session,
            armed: true,
        }
    }

    /// Call once the outcome of the store call is known.
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for SubmissionReset {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let session = Arc::clone(&self.session);
            handle.spawn(async move {
                session.lock().await.finish_submission(false);
                warn!("match submission abandoned mid-flight; ticket returned to idle");
            });
        }
    }
}

/// Submit the chosen outcome as the single atomic resolution command.
///
/// The in-flight guard on the ticket ensures at most one command per click
/// sequence; the session mutex is not held while the store call runs. On
/// failure the ticket returns to idle (manual retry, same idempotency key)
/// and the error is surfaced to the user.
pub async fn submit_result(
    state: &SharedState,
    id: Uuid,
    outcome: MatchOutcome,
) -> Result<MatchRecordedResponse, ServiceError> {
    let session = state
        .session(id)
        .ok_or_else(|| ServiceError::NotFound(format!("unknown session {id}")))?;

    let (player_one, player_two, submission_id) = {
        let mut guard = session.lock().await;
        guard.begin_submission()?
    };
    let mut reset = SubmissionReset::new(Arc::clone(&session));

    let resolution = MatchResolution {
        player_one: player_one.clone(),
        player_two: player_two.clone(),
        outcome,
        submission_id,
    };

    let result = state.store().resolve_match(resolution).await;
    reset.disarm();

    let mut guard = session.lock().await;
    match result {
        Ok(()) => {
            guard.finish_submission(true);
            info!(%player_one, %player_two, ?outcome, "match outcome recorded");
            Ok(MatchRecordedResponse {
                message: "match outcome recorded".to_string(),
                next: LEADERBOARD_SCREEN.to_string(),
            })
        }
        Err(err) => {
            guard.finish_submission(false);
            warn!(error = %err, %player_one, %player_two, "failed to record match outcome");
            Err(ServiceError::Unavailable(err))
        }
    }
}
