//! DTO definitions for the leaderboard screen.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::models::PlayerEntity;

/// One ranked leaderboard row.
///
/// Rank is the 1-based position in the fetched sequence, not a stored field.
#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub username: String,
    pub score: i64,
    pub wins: u32,
    pub losses: u32,
}

impl LeaderboardRow {
    /// Build a row from a fetched entity and its 0-based position.
    pub fn from_entity(position: usize, entity: PlayerEntity) -> Self {
        Self {
            rank: position as u32 + 1,
            username: entity.username,
            score: entity.score,
            wins: entity.wins,
            losses: entity.losses,
        }
    }
}

/// The leaderboard screen payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub rows: Vec<LeaderboardRow>,
    /// Present instead of an empty table when there are no players yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// True when the store could not be reached and these rows come from the
    /// last successful fetch.
    pub stale: bool,
}
