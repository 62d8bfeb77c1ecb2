/// Entry screen payloads: slot input, snapshots, and the start handoff.
pub mod entry;
/// Health probe response body.
pub mod health;
/// Leaderboard rows and placeholder payload.
pub mod leaderboard;
/// Match screen context, outcome request, and recorded response.
pub mod match_admin;
/// Input validation helpers shared by the DTOs.
pub mod validation;
