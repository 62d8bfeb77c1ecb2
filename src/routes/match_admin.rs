use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::match_admin::{MatchContextResponse, MatchRecordedResponse, MatchResultRequest},
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Match administration endpoints: context readout and outcome submission.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/match/{session}", get(match_context))
        .route("/match/{session}/result", post(submit_result))
}

/// Names and submission phase for rendering the match screen.
#[utoipa::path(
    get,
    path = "/match/{session}",
    tag = "match",
    params(("session" = Uuid, Path, description = "Screen session identifier")),
    responses(
        (status = 200, description = "Match context", body = MatchContextResponse),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn match_context(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> Result<Json<MatchContextResponse>, AppError> {
    Ok(Json(match_service::match_context(&state, session).await?))
}

/// Record the chosen outcome through the store's atomic resolution command.
#[utoipa::path(
    post,
    path = "/match/{session}/result",
    tag = "match",
    params(("session" = Uuid, Path, description = "Screen session identifier")),
    request_body = MatchResultRequest,
    responses(
        (status = 200, description = "Outcome recorded", body = MatchRecordedResponse),
        (status = 409, description = "A submission is already in flight or recorded"),
        (status = 503, description = "Store rejected the command; retry manually")
    )
)]
pub async fn submit_result(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
    Json(payload): Json<MatchResultRequest>,
) -> Result<Json<MatchRecordedResponse>, AppError> {
    Ok(Json(
        match_service::submit_result(&state, session, payload.outcome).await?,
    ))
}
