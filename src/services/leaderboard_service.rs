//! Leaderboard fetch with a last-known-snapshot fallback.

use tracing::warn;

use crate::{
    dto::leaderboard::{LeaderboardResponse, LeaderboardRow},
    state::SharedState,
};

/// How many ranked players the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 20;
/// Placeholder rendered instead of an empty table.
pub const NO_PLAYERS_PLACEHOLDER: &str = "NO PLAYERS YET";

/// Fetch the top players, falling back to the last successful snapshot.
///
/// The store returns rows already ordered (score descending, username
/// ascending for ties); rank is the 1-based position in that sequence. A
/// fetch failure is logged and answered with whatever was last fetched —
/// possibly nothing — flagged as stale.
pub async fn leaderboard(state: &SharedState) -> LeaderboardResponse {
    let (entities, stale) = match state.store().top_players(LEADERBOARD_SIZE).await {
        Ok(rows) => {
            state.store_leaderboard_snapshot(rows.clone()).await;
            (rows, false)
        }
        Err(err) => {
            warn!(error = %err, "leaderboard fetch failed; serving last snapshot");
            (state.leaderboard_snapshot().await.unwrap_or_default(), true)
        }
    };

    let rows: Vec<LeaderboardRow> = entities
        .into_iter()
        .enumerate()
        .map(|(position, entity)| LeaderboardRow::from_entity(position, entity))
        .collect();

    let placeholder = rows
        .is_empty()
        .then(|| NO_PLAYERS_PLACEHOLDER.to_string());

    LeaderboardResponse {
        rows,
        placeholder,
        stale,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dao::{models::PlayerEntity, player_store::testing::MemoryPlayerStore},
        state::AppState,
    };

    fn player(username: &str, score: i64) -> PlayerEntity {
        PlayerEntity {
            username: username.to_string(),
            score,
            wins: 0,
            losses: 0,
        }
    }

    #[tokio::test]
    async fn empty_store_renders_the_placeholder() {
        let store = MemoryPlayerStore::default();
        let state = AppState::new(Arc::new(store));

        let response = leaderboard(&state).await;
        assert!(response.rows.is_empty());
        assert_eq!(response.placeholder.as_deref(), Some("NO PLAYERS YET"));
        assert!(!response.stale);
    }

    #[tokio::test]
    async fn ranks_follow_the_fetched_order() {
        let store = MemoryPlayerStore::with_players(vec![
            player("CAROL", 5),
            player("ALICE", 15),
            player("BOB", 5),
        ]);
        let state = AppState::new(Arc::new(store));

        let response = leaderboard(&state).await;
        let ranked: Vec<(u32, &str)> = response
            .rows
            .iter()
            .map(|row| (row.rank, row.username.as_str()))
            .collect();
        // Ties resolve by username ascending, so the output is deterministic.
        assert_eq!(ranked, vec![(1, "ALICE"), (2, "BOB"), (3, "CAROL")]);
        assert!(response.placeholder.is_none());
    }

    #[tokio::test]
    async fn never_more_than_twenty_rows() {
        let players = (0..30i64)
            .map(|i| player(&format!("P{i:02}"), i))
            .collect();
        let store = MemoryPlayerStore::with_players(players);
        let state = AppState::new(Arc::new(store));

        let response = leaderboard(&state).await;
        assert_eq!(response.rows.len(), LEADERBOARD_SIZE);
    }

    #[tokio::test]
    async fn fetch_failure_serves_the_last_snapshot() {
        let store = MemoryPlayerStore::with_players(vec![player("ALICE", 10)]);
        let state = AppState::new(Arc::new(store.clone()));

        let first = leaderboard(&state).await;
        assert_eq!(first.rows.len(), 1);
        assert!(!first.stale);

        store.fail_top(true);
        let second = leaderboard(&state).await;
        assert_eq!(second.rows, first.rows);
        assert!(second.stale);
    }

    #[tokio::test]
    async fn fetch_failure_without_snapshot_is_empty_and_stale() {
        let store = MemoryPlayerStore::default();
        store.fail_top(true);
        let state = AppState::new(Arc::new(store));

        let response = leaderboard(&state).await;
        assert!(response.rows.is_empty());
        assert_eq!(response.placeholder.as_deref(), Some("NO PLAYERS YET"));
        assert!(response.stale);
    }
}
