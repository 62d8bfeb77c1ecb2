//! DTO definitions for the match administration screen.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::MatchOutcome;
use crate::state::session::SubmissionPhase;

/// Submission phase of the current match ticket as exposed to clients.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhaseDto {
    /// Outcome actions enabled.
    Idle,
    /// A resolution command is in flight; actions disabled.
    InFlight,
    /// Outcome recorded; navigate away.
    Completed,
}

impl From<SubmissionPhase> for SubmissionPhaseDto {
    fn from(phase: SubmissionPhase) -> Self {
        match phase {
            SubmissionPhase::Idle => SubmissionPhaseDto::Idle,
            SubmissionPhase::InFlight => SubmissionPhaseDto::InFlight,
            SubmissionPhase::Completed => SubmissionPhaseDto::Completed,
        }
    }
}

/// The match screen's read-only context and current submission phase.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchContextResponse {
    pub player_one: String,
    pub player_two: String,
    /// True when the screen was reached without an entry handoff and the
    /// names are the defined placeholders.
    pub placeholder: bool,
    pub submission: SubmissionPhaseDto,
}

/// The chosen outcome for the current match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchResultRequest {
    pub outcome: MatchOutcome,
}

/// Acknowledgement that the outcome was recorded by the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchRecordedResponse {
    pub message: String,
    /// Screen the client should navigate to.
    pub next: String,
}
