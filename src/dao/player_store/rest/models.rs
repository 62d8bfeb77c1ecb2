//! Wire representations of the store's rows and RPC payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{MatchOutcome, MatchResolution, PlayerEntity};

/// Path of the players table relative to the store base URL.
pub const PLAYERS_PATH: &str = "rest/v1/players";
/// Path of the match resolution RPC relative to the store base URL.
pub const RESOLVE_MATCH_PATH: &str = "rest/v1/rpc/resolve_match";

/// One row of the `players` table as returned by filtered reads.
#[derive(Debug, Deserialize)]
pub struct PlayerRow {
    pub username: String,
    pub score: i64,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRow {
    pub fn into_entity(self) -> PlayerEntity {
        PlayerEntity {
            username: self.username,
            score: self.score,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

/// Named arguments of the `resolve_match` RPC.
///
/// Argument names follow the stored procedure's signature, not this crate's
/// naming, so they stay stable against the deployed store.
#[derive(Debug, Serialize)]
pub struct ResolveMatchParams {
    pub p1_name: String,
    pub p2_name: String,
    pub result: MatchOutcome,
    pub submission_id: Uuid,
}

impl From<MatchResolution> for ResolveMatchParams {
    fn from(resolution: MatchResolution) -> Self {
        Self {
            p1_name: resolution.player_one,
            p2_name: resolution.player_two,
            result: resolution.outcome,
            submission_id: resolution.submission_id,
        }
    }
}
