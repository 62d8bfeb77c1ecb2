//! Client for the hosted player store's REST surface.
//!
//! The store exposes a PostgREST-style API: equality-filtered reads on the
//! `players` table and a single `resolve_match` RPC that performs the whole
//! outcome-to-score mapping server-side.

mod config;
mod error;
mod models;
mod store;

pub use config::RestConfig;
pub use error::{RestDaoError, RestResult};
pub use store::RestPlayerStore;
