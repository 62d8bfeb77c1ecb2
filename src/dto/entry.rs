//! DTO definitions for the entry screen's identity resolution flow.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::validate_player_name;
use crate::state::slot::{PlayerSlot, SlotPhase};

/// Response returned when a new screen session is opened.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

/// Raw text submitted for a player slot on blur/submit.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SlotInput {
    /// Raw input; trimmed and upper-cased before any comparison.
    pub text: String,
}

impl Validate for SlotInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.text) {
            errors.add("text", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The user's answer to a name conflict ("yes, this is me" / "no").
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConflictDecision {
    pub accept: bool,
}

/// Identity resolution phase of a slot as exposed to clients.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotPhaseDto {
    /// Nothing usable entered yet.
    Empty,
    /// Lookup in flight.
    Pending,
    /// Confirmed as a first-time player.
    ConfirmedNew,
    /// Confirmed as an existing player.
    ConfirmedReturning,
    /// Name collides with an existing player; awaiting a decision.
    Conflict,
}

/// Snapshot of one slot's phase plus the name it exposes, if any.
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotSnapshot {
    pub phase: SlotPhaseDto,
    /// Normalized name, present only in the two confirmed phases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_name: Option<String>,
    /// Name under conflict, present only in the conflict phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_name: Option<String>,
}

impl From<&PlayerSlot> for SlotSnapshot {
    fn from(slot: &PlayerSlot) -> Self {
        let phase = match slot.phase() {
            SlotPhase::Empty => SlotPhaseDto::Empty,
            SlotPhase::Pending { .. } => SlotPhaseDto::Pending,
            SlotPhase::ConfirmedNew { .. } => SlotPhaseDto::ConfirmedNew,
            SlotPhase::ConfirmedReturning { .. } => SlotPhaseDto::ConfirmedReturning,
            SlotPhase::Conflict { .. } => SlotPhaseDto::Conflict,
        };
        let conflict_name = match slot.phase() {
            SlotPhase::Conflict { name } => Some(name.clone()),
            _ => None,
        };

        Self {
            phase,
            confirmed_name: slot.confirmed_name().map(str::to_string),
            conflict_name,
        }
    }
}

/// Both slots plus the match start gate, the whole entry screen state.
#[derive(Debug, Serialize, ToSchema)]
pub struct EntryStateResponse {
    pub player_one: SlotSnapshot,
    pub player_two: SlotSnapshot,
    /// True when both slots hold a confirmed name.
    pub can_start: bool,
}

/// Navigation handoff returned when the match start gate opens.
#[derive(Debug, Serialize, ToSchema)]
pub struct StartMatchResponse {
    pub player_one: String,
    pub player_two: String,
    /// Screen the client should navigate to.
    pub next: String,
}
