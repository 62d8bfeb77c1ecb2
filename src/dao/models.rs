//! Entities exchanged with the remote player store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A player record as held by the remote store.
///
/// Player records are owned entirely by the store: they are created on first
/// match submission referencing an unseen name and mutated only by the match
/// resolution command. This service never caches them beyond the current
/// leaderboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlayerEntity {
    /// Unique display name, case-normalized to upper-case.
    pub username: String,
    /// Cumulative score; can go negative depending on the store's rules.
    pub score: i64,
    /// Number of matches won.
    pub wins: u32,
    /// Number of matches lost.
    pub losses: u32,
}

/// Ternary result of a match between two named players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MatchOutcome {
    /// Player one wins (+5 points and a win; player two takes a loss).
    #[serde(rename = "p1")]
    PlayerOne,
    /// Player two wins (+5 points and a win; player one takes a loss).
    #[serde(rename = "p2")]
    PlayerTwo,
    /// Draw; no score change for either player.
    #[serde(rename = "draw")]
    Draw,
}

/// Payload of the single atomic match resolution command.
///
/// The store owns the outcome-to-delta mapping and first-seen player
/// creation. `submission_id` is generated once per match ticket and reused
/// on manual retry so the store can deduplicate a submission that timed out
/// client-side but actually landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResolution {
    /// First player's confirmed (or placeholder) name.
    pub player_one: String,
    /// Second player's confirmed (or placeholder) name.
    pub player_two: String,
    /// Which side won, or draw.
    pub outcome: MatchOutcome,
    /// Idempotency key for this match ticket.
    pub submission_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_uses_store_wire_values() {
        assert_eq!(
            serde_json::to_string(&MatchOutcome::PlayerOne).unwrap(),
            "\"p1\""
        );
        assert_eq!(
            serde_json::to_string(&MatchOutcome::PlayerTwo).unwrap(),
            "\"p2\""
        );
        assert_eq!(serde_json::to_string(&MatchOutcome::Draw).unwrap(), "\"draw\"");

        let parsed: MatchOutcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(parsed, MatchOutcome::Draw);
    }
}
