/// Per-session screen state: slots, match ticket, submission phase.
pub mod session;
/// Identity resolution state machine for one player name input.
pub mod slot;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, RwLock};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;
use uuid::Uuid;

use crate::dao::{models::PlayerEntity, player_store::PlayerStore};

use self::session::ScreenSession;

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// How long an untouched session lives before the sweeper drops it.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);
/// How often the sweeper looks for idle sessions.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// One live session plus the moment a request last touched it, in seconds
/// since the state was constructed.
struct SessionEntry {
    screen: Arc<Mutex<ScreenSession>>,
    last_seen: AtomicU64,
}

/// Central application state: the store client handed out at construction
/// and the live screen sessions.
///
/// Sessions are independent; each one is guarded by its own mutex which is
/// never held across a store call. Anyone can open a session, so the
/// registry is kept bounded by evicting entries no request has touched
/// within [`SESSION_TTL`].
pub struct AppState {
    store: Arc<dyn PlayerStore>,
    sessions: DashMap<Uuid, SessionEntry>,
    leaderboard_snapshot: RwLock<Option<Vec<PlayerEntity>>>,
    started: Instant,
}

impl AppState {
    /// Construct the state around the single long-lived store client,
    /// wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn PlayerStore>) -> SharedState {
        Arc::new(Self {
            store,
            sessions: DashMap::new(),
            leaderboard_snapshot: RwLock::new(None),
            started: Instant::now(),
        })
    }

    /// Handle to the remote player store.
    pub fn store(&self) -> Arc<dyn PlayerStore> {
        Arc::clone(&self.store)
    }

    fn now_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Open a fresh screen session and return its identifier.
    pub fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            SessionEntry {
                screen: Arc::new(Mutex::new(ScreenSession::new())),
                last_seen: AtomicU64::new(self.now_secs()),
            },
        );
        id
    }

    /// Look up a live session by identifier, refreshing its idle clock.
    pub fn session(&self, id: Uuid) -> Option<Arc<Mutex<ScreenSession>>> {
        self.sessions.get(&id).map(|entry| {
            entry.last_seen.store(self.now_secs(), Ordering::Relaxed);
            Arc::clone(&entry.screen)
        })
    }

    /// Drop sessions no request has touched within the given lifetime and
    /// return how many were removed.
    pub fn evict_idle_sessions(&self, ttl: Duration) -> usize {
        let cutoff = self.now_secs().saturating_sub(ttl.as_secs());
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_seen.load(Ordering::Relaxed) >= cutoff);
        before - self.sessions.len()
    }

    /// Rows of the last successful leaderboard fetch, if any.
    pub async fn leaderboard_snapshot(&self) -> Option<Vec<PlayerEntity>> {
        self.leaderboard_snapshot.read().await.clone()
    }

    /// Replace the snapshot after a successful fetch.
    pub async fn store_leaderboard_snapshot(&self, rows: Vec<PlayerEntity>) {
        *self.leaderboard_snapshot.write().await = Some(rows);
    }
}

/// Periodically drop sessions abandoned mid-flow.
///
/// Runs as a background task for the lifetime of the server; an event night
/// accumulates sessions from every tab that ever opened the entry screen,
/// and nothing else removes them.
pub async fn sweep_idle_sessions(state: SharedState) {
    let mut ticker = time::interval(SWEEP_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let evicted = state.evict_idle_sessions(SESSION_TTL);
        if evicted > 0 {
            debug!(evicted, "dropped idle screen sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::player_store::testing::MemoryPlayerStore;

    fn fresh_state() -> SharedState {
        AppState::new(Arc::new(MemoryPlayerStore::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn idle_sessions_are_evicted_after_the_ttl() {
        let state = fresh_state();
        let stale = state.create_session();
        time::advance(SESSION_TTL + Duration::from_secs(1)).await;
        let fresh = state.create_session();

        assert_eq!(state.evict_idle_sessions(SESSION_TTL), 1);
        assert!(state.session(stale).is_none());
        assert!(state.session(fresh).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn touching_a_session_resets_its_idle_clock() {
        let state = fresh_state();
        let id = state.create_session();

        time::advance(Duration::from_secs(30 * 60)).await;
        assert!(state.session(id).is_some());
        time::advance(Duration::from_secs(45 * 60)).await;

        // 75 minutes since creation, but only 45 since the last touch.
        assert_eq!(state.evict_idle_sessions(SESSION_TTL), 0);
        assert!(state.session(id).is_some());
    }
}
