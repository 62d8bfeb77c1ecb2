use axum::Router;

use crate::state::SharedState;

/// Swagger UI and the OpenAPI document.
pub mod docs;
/// Entry screen routes.
pub mod entry;
/// Health probe route.
pub mod health;
/// Leaderboard route.
pub mod leaderboard;
/// Match screen routes.
pub mod match_admin;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(entry::router())
        .merge(match_admin::router())
        .merge(leaderboard::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
