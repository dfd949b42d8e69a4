use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::game, state::AppState};

/// OpenAPI document root; paths are collected from the routing table below.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Catalog API",
        description = "CRUD endpoints for the game catalog"
    ),
    tags(
        (name = "game", description = "Game catalog management")
    )
)]
pub struct ApiDoc;

/// The routing table: every method and path the service answers.
///
/// Returns the axum router together with the OpenAPI document generated from the
/// handlers' `#[utoipa::path]` annotations.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .split_for_parts()
}

/// Builds the complete application with middleware and, optionally, API docs.
///
/// Swagger UI is served at `/docs` and the OpenAPI document at `/api-docs/openapi.json`
/// when `enable_api_docs` is set.
pub fn app(state: AppState, enable_api_docs: bool) -> Router {
    let (mut router, openapi) = router();

    if enable_api_docs {
        router = router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
