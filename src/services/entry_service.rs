//! Entry screen services: per-slot identity resolution and the start gate.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::entry::{
        ConflictDecision, EntryStateResponse, SessionCreatedResponse, SlotInput, SlotSnapshot,
        StartMatchResponse,
    },
    error::ServiceError,
    state::{
        SharedState,
        session::{ScreenSession, SlotIndex},
        slot::SubmitAction,
    },
};

/// Screen the entry handoff navigates to once the gate opens.
const MATCH_SCREEN: &str = "/match";

/// Open a fresh screen session for one scoring station.
pub async fn create_session(state: &SharedState) -> SessionCreatedResponse {
    SessionCreatedResponse {
        session_id: state.create_session(),
    }
}

/// Snapshot both slots and the start gate for rendering.
pub async fn entry_state(state: &SharedState, id: Uuid) -> Result<EntryStateResponse, ServiceError> {
    let session = require_session(state, id)?;
    let guard = session.lock().await;
    Ok(EntryStateResponse {
        player_one: SlotSnapshot::from(guard.slot(SlotIndex::One)),
        player_two: SlotSnapshot::from(guard.slot(SlotIndex::Two)),
        can_start: guard.can_start(),
    })
}

/// Handle a blur/submit of raw name input for one slot.
///
/// At most one store lookup is issued per call, and only when the slot asks
/// for one. The session mutex is released while the lookup is in flight; a
/// stale result (the slot was edited or cleared meanwhile) is discarded by
/// the slot's lifetime token. A lookup failure is logged and treated as
/// "not found" so a live event never blocks on store availability.
pub async fn submit_name(
    state: &SharedState,
    id: Uuid,
    index: SlotIndex,
    input: SlotInput,
) -> Result<SlotSnapshot, ServiceError> {
    let session = require_session(state, id)?;

    let action = {
        let mut guard = session.lock().await;
        guard.slot_mut(index).submit(&input.text)
    };

    if let SubmitAction::Lookup(token) = action {
        let found = match state.store().find_player(&token.name).await {
            Ok(player) => player.is_some(),
            Err(err) => {
                warn!(
                    error = %err,
                    name = %token.name,
                    "player lookup failed; confirming name as new"
                );
                false
            }
        };

        let mut guard = session.lock().await;
        guard.slot_mut(index).complete_lookup(&token, found);
        return Ok(SlotSnapshot::from(guard.slot(index)));
    }

    let guard = session.lock().await;
    Ok(SlotSnapshot::from(guard.slot(index)))
}

/// Apply the user's yes/no decision to a slot in conflict.
pub async fn resolve_conflict(
    state: &SharedState,
    id: Uuid,
    index: SlotIndex,
    decision: ConflictDecision,
) -> Result<SlotSnapshot, ServiceError> {
    let session = require_session(state, id)?;
    let mut guard = session.lock().await;
    guard.slot_mut(index).resolve_conflict(decision.accept)?;
    Ok(SlotSnapshot::from(guard.slot(index)))
}

/// Explicit change-name action: clear the slot and retract its name.
pub async fn change_name(
    state: &SharedState,
    id: Uuid,
    index: SlotIndex,
) -> Result<SlotSnapshot, ServiceError> {
    let session = require_session(state, id)?;
    let mut guard = session.lock().await;
    guard.slot_mut(index).change_name();
    Ok(SlotSnapshot::from(guard.slot(index)))
}

/// Open the match start gate and hand off the two confirmed names.
pub async fn start_match(
    state: &SharedState,
    id: Uuid,
) -> Result<StartMatchResponse, ServiceError> {
    let session = require_session(state, id)?;
    let mut guard = session.lock().await;
    let ticket = guard.start_match()?;
    let (player_one, player_two) = ticket.context.names();

    Ok(StartMatchResponse {
        player_one: player_one.to_string(),
        player_two: player_two.to_string(),
        next: MATCH_SCREEN.to_string(),
    })
}

fn require_session(
    state: &SharedState,
    id: Uuid,
) -> Result<Arc<Mutex<ScreenSession>>, ServiceError> {
    state
        .session(id)
        .ok_or_else(|| ServiceError::NotFound(format!("unknown session {id}")))
}
