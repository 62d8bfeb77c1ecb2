//! Interactive API documentation rendered from the generated OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Mount point of the Swagger UI.
const SWAGGER_PATH: &str = "/docs";
/// Path where the raw OpenAPI JSON is exposed.
const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";

/// Router serving the Swagger UI and the document it renders.
pub fn router(state: SharedState) -> Router<SharedState> {
    let swagger: Router<SharedState> = SwaggerUi::new(SWAGGER_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into();

    swagger.with_state(state)
}
