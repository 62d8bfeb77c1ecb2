use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Whack Board.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::entry::create_session,
        crate::routes::entry::entry_state,
        crate::routes::entry::submit_name,
        crate::routes::entry::resolve_conflict,
        crate::routes::entry::change_name,
        crate::routes::entry::start_match,
        crate::routes::match_admin::match_context,
        crate::routes::match_admin::submit_result,
        crate::routes::leaderboard::leaderboard,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::entry::SessionCreatedResponse,
            crate::dto::entry::SlotInput,
            crate::dto::entry::ConflictDecision,
            crate::dto::entry::SlotSnapshot,
            crate::dto::entry::EntryStateResponse,
            crate::dto::entry::StartMatchResponse,
            crate::dto::match_admin::MatchContextResponse,
            crate::dto::match_admin::MatchResultRequest,
            crate::dto::match_admin::MatchRecordedResponse,
            crate::dto::leaderboard::LeaderboardResponse,
            crate::dao::models::MatchOutcome,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "entry", description = "Player entry and identity resolution"),
        (name = "match", description = "Match outcome administration"),
        (name = "leaderboard", description = "Score rankings"),
    )
)]
pub struct ApiDoc;
