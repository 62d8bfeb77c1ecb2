/// REST implementation speaking the hosted store's HTTP API.
pub mod rest;

use futures::future::BoxFuture;

use crate::dao::models::{MatchResolution, PlayerEntity};
use crate::dao::storage::StorageResult;

/// Abstraction over the remote store holding player records.
///
/// All score bookkeeping lives behind this boundary: the service only ever
/// asks three questions of it, mirroring the three suspension points of the
/// application flow.
pub trait PlayerStore: Send + Sync {
    /// Exact equality lookup for a case-normalized player name.
    fn find_player(&self, name: &str) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    /// Top players ordered by score descending, username ascending for ties.
    fn top_players(&self, limit: usize) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;
    /// Atomically record one match outcome for two named players.
    fn resolve_match(&self, resolution: MatchResolution) -> BoxFuture<'static, StorageResult<()>>;
    /// Cheap connectivity probe used by the health endpoint.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

#[cfg(test)]
pub mod testing {
    //! In-memory store double shared by service-layer tests.

    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    use futures::future::BoxFuture;

    use crate::dao::models::{MatchResolution, PlayerEntity};
    use crate::dao::storage::{StorageError, StorageResult};

    use super::PlayerStore;

    fn unavailable(op: &str) -> StorageError {
        StorageError::unavailable(
            format!("{op} refused by test store"),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        )
    }

    /// Configurable in-memory [`PlayerStore`] recording every call it sees.
    #[derive(Default, Clone)]
    pub struct MemoryPlayerStore {
        players: Arc<Mutex<Vec<PlayerEntity>>>,
        resolutions: Arc<Mutex<Vec<MatchResolution>>>,
        lookups: Arc<AtomicUsize>,
        fail_lookups: Arc<AtomicBool>,
        fail_resolve: Arc<AtomicBool>,
        fail_top: Arc<AtomicBool>,
        stall_resolve: Arc<AtomicBool>,
    }

    impl MemoryPlayerStore {
        /// Store with the given players already present.
        pub fn with_players(players: Vec<PlayerEntity>) -> Self {
            let store = Self::default();
            *store.players.lock().unwrap() = players;
            store
        }

        /// Make subsequent name lookups fail.
        pub fn fail_lookups(&self) {
            self.fail_lookups.store(true, Ordering::SeqCst);
        }

        /// Make subsequent resolve commands fail.
        pub fn fail_resolve(&self, fail: bool) {
            self.fail_resolve.store(fail, Ordering::SeqCst);
        }

        /// Make subsequent resolve commands hang forever instead of
        /// answering, for tests exercising abandoned requests.
        pub fn stall_resolve(&self, stall: bool) {
            self.stall_resolve.store(stall, Ordering::SeqCst);
        }

        /// Make subsequent leaderboard fetches fail.
        pub fn fail_top(&self, fail: bool) {
            self.fail_top.store(fail, Ordering::SeqCst);
        }

        /// Number of name lookups issued so far.
        pub fn lookup_count(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }

        /// Every resolution command received, including failed attempts.
        pub fn resolutions(&self) -> Vec<MatchResolution> {
            self.resolutions.lock().unwrap().clone()
        }
    }

    impl PlayerStore for MemoryPlayerStore {
        fn find_player(
            &self,
            name: &str,
        ) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
            let store = self.clone();
            let name = name.to_string();
            Box::pin(async move {
                store.lookups.fetch_add(1, Ordering::SeqCst);
                if store.fail_lookups.load(Ordering::SeqCst) {
                    return Err(unavailable("find_player"));
                }
                let players = store.players.lock().unwrap();
                Ok(players.iter().find(|p| p.username == name).cloned())
            })
        }

        fn top_players(
            &self,
            limit: usize,
        ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
            let store = self.clone();
            Box::pin(async move {
                if store.fail_top.load(Ordering::SeqCst) {
                    return Err(unavailable("top_players"));
                }
                let mut players = store.players.lock().unwrap().clone();
                players.sort_by(|a, b| b.score.cmp(&a.score).then(a.username.cmp(&b.username)));
                players.truncate(limit);
                Ok(players)
            })
        }

        fn resolve_match(
            &self,
            resolution: MatchResolution,
        ) -> BoxFuture<'static, StorageResult<()>> {
            let store = self.clone();
            Box::pin(async move {
                if store.stall_resolve.load(Ordering::SeqCst) {
                    futures::future::pending::<()>().await;
                }
                store.resolutions.lock().unwrap().push(resolution);
                if store.fail_resolve.load(Ordering::SeqCst) {
                    return Err(unavailable("resolve_match"));
                }
                Ok(())
            })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            let store = self.clone();
            Box::pin(async move {
                if store.fail_top.load(Ordering::SeqCst) {
                    return Err(unavailable("health_check"));
                }
                Ok(())
            })
        }
    }
}
