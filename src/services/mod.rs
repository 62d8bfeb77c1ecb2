/// OpenAPI documentation generation.
pub mod documentation;
/// Identity resolution and match start gate for the entry screen.
pub mod entry_service;
/// Health check service.
pub mod health_service;
/// Leaderboard fetch and snapshot fallback.
pub mod leaderboard_service;
/// Match outcome submission.
pub mod match_service;
