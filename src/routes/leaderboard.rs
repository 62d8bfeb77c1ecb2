use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::leaderboard::LeaderboardResponse, services::leaderboard_service, state::SharedState,
};

/// Leaderboard endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/leaderboard", get(leaderboard))
}

/// Top 20 players by score; refresh is just another request.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "leaderboard",
    responses((status = 200, description = "Ranked players", body = LeaderboardResponse))
)]
pub async fn leaderboard(State(state): State<SharedState>) -> Json<LeaderboardResponse> {
    Json(leaderboard_service::leaderboard(&state).await)
}
