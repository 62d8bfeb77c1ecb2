//! Library crate for whack-board, exposing modules for binaries and integration tests.

/// Store entities and the remote player store boundary.
pub mod dao;
/// Request and response bodies crossing the HTTP surface.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// Route trees per screen plus the documentation routes.
pub mod routes;
/// Screen flow services sitting between routes and state.
pub mod services;
/// Shared application state and the per-session machines.
pub mod state;
