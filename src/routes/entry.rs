use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::entry::{
        ConflictDecision, EntryStateResponse, SessionCreatedResponse, SlotInput, SlotSnapshot,
        StartMatchResponse,
    },
    error::AppError,
    services::entry_service,
    state::{SharedState, session::SlotIndex},
};

/// Entry screen endpoints: sessions, per-slot identity resolution, start gate.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/entry/session", post(create_session))
        .route("/entry/{session}", get(entry_state))
        .route("/entry/{session}/slot/{slot}", post(submit_name))
        .route(
            "/entry/{session}/slot/{slot}/confirm",
            post(resolve_conflict),
        )
        .route("/entry/{session}/slot/{slot}/change", post(change_name))
        .route("/entry/{session}/start", post(start_match))
}

fn slot_index(position: u8) -> Result<SlotIndex, AppError> {
    SlotIndex::from_position(position)
        .ok_or_else(|| AppError::BadRequest(format!("slot must be 1 or 2, got {position}")))
}

/// Open a new screen session for one scoring station.
#[utoipa::path(
    post,
    path = "/entry/session",
    tag = "entry",
    responses((status = 200, description = "Session created", body = SessionCreatedResponse))
)]
pub async fn create_session(State(state): State<SharedState>) -> Json<SessionCreatedResponse> {
    Json(entry_service::create_session(&state).await)
}

/// Current entry screen state: both slots plus the start gate.
#[utoipa::path(
    get,
    path = "/entry/{session}",
    tag = "entry",
    params(("session" = Uuid, Path, description = "Screen session identifier")),
    responses(
        (status = 200, description = "Entry state", body = EntryStateResponse),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn entry_state(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> Result<Json<EntryStateResponse>, AppError> {
    Ok(Json(entry_service::entry_state(&state, session).await?))
}

/// Submit raw name input for a slot (the blur/submit event).
#[utoipa::path(
    post,
    path = "/entry/{session}/slot/{slot}",
    tag = "entry",
    params(
        ("session" = Uuid, Path, description = "Screen session identifier"),
        ("slot" = u8, Path, description = "Player slot position, 1 or 2")
    ),
    request_body = SlotInput,
    responses(
        (status = 200, description = "Updated slot state", body = SlotSnapshot),
        (status = 400, description = "Invalid slot or name"),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn submit_name(
    State(state): State<SharedState>,
    Path((session, slot)): Path<(Uuid, u8)>,
    Json(payload): Json<SlotInput>,
) -> Result<Json<SlotSnapshot>, AppError> {
    payload.validate()?;
    let index = slot_index(slot)?;
    Ok(Json(
        entry_service::submit_name(&state, session, index, payload).await?,
    ))
}

/// Answer a name conflict with "yes, this is me" or "no".
#[utoipa::path(
    post,
    path = "/entry/{session}/slot/{slot}/confirm",
    tag = "entry",
    params(
        ("session" = Uuid, Path, description = "Screen session identifier"),
        ("slot" = u8, Path, description = "Player slot position, 1 or 2")
    ),
    request_body = ConflictDecision,
    responses(
        (status = 200, description = "Updated slot state", body = SlotSnapshot),
        (status = 409, description = "Slot is not awaiting a decision")
    )
)]
pub async fn resolve_conflict(
    State(state): State<SharedState>,
    Path((session, slot)): Path<(Uuid, u8)>,
    Json(payload): Json<ConflictDecision>,
) -> Result<Json<SlotSnapshot>, AppError> {
    let index = slot_index(slot)?;
    Ok(Json(
        entry_service::resolve_conflict(&state, session, index, payload).await?,
    ))
}

/// Clear a slot via the explicit change-name action.
#[utoipa::path(
    post,
    path = "/entry/{session}/slot/{slot}/change",
    tag = "entry",
    params(
        ("session" = Uuid, Path, description = "Screen session identifier"),
        ("slot" = u8, Path, description = "Player slot position, 1 or 2")
    ),
    responses((status = 200, description = "Cleared slot state", body = SlotSnapshot))
)]
pub async fn change_name(
    State(state): State<SharedState>,
    Path((session, slot)): Path<(Uuid, u8)>,
) -> Result<Json<SlotSnapshot>, AppError> {
    let index = slot_index(slot)?;
    Ok(Json(
        entry_service::change_name(&state, session, index).await?,
    ))
}

/// Open the match start gate and hand off the confirmed names.
#[utoipa::path(
    post,
    path = "/entry/{session}/start",
    tag = "entry",
    params(("session" = Uuid, Path, description = "Screen session identifier")),
    responses(
        (status = 200, description = "Match handoff", body = StartMatchResponse),
        (status = 409, description = "At least one slot is unconfirmed")
    )
)]
pub async fn start_match(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> Result<Json<StartMatchResponse>, AppError> {
    Ok(Json(entry_service::start_match(&state, session).await?))
}
