use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto},
    },
    server::{
        controller::param::GamePageParam,
        error::AppError,
        model::game::{CreateGameParam, UpdateGameParam},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Base path of the game resource; individual games live at `{GAMES_PATH}/{id}`.
pub const GAMES_PATH: &str = "/api/games";

/// Get a page of games.
///
/// Returns games in ascending ID order, skipping `(pageNumber - 1) * pageSize` games.
/// Non-positive values are clamped to 1 and `pageSize` is capped at 100.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (pageNumber and pageSize)
///
/// # Returns
/// - `200 OK` - Possibly empty list of games
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(
        ("pageNumber" = Option<i64>, Query, description = "One-based page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Games per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    Query(params): Query<GamePageParam>,
) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db)
        .get_paginated(params.into_param())
        .await?;

    let dtos: Vec<GameDto> = games.into_iter().map(|game| game.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a specific game by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID to fetch
///
/// # Returns
/// - `200 OK` - The game
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Create a new game.
///
/// The ID is assigned by the database; any `id` in the request body is ignored. The
/// `Location` header points at the new game.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Game field values
///
/// # Returns
/// - `201 Created` - The created game with its assigned ID
/// - `400 Bad Request` - Body is not a valid game
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto,
            headers(("Location" = String, description = "URL of the created game"))),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateGameParam::from_dto(payload);
    let game = GameService::new(&state.db).create(param).await?;

    let location = format!("{}/{}", GAMES_PATH, game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game.into_dto()),
    ))
}

/// Replace an existing game.
///
/// Every field except the ID is overwritten. The `id` in the body must equal the path ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID to update
/// - `payload` - Full game including its ID
///
/// # Returns
/// - `204 No Content` - Successfully updated game
/// - `400 Bad Request` - Body is not a valid game or its ID doesn't match the path ID
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = GameDto,
    responses(
        (status = 204, description = "Successfully updated game"),
        (status = 400, description = "Malformed request body or body ID doesn't match path ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<GameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = UpdateGameParam::from_dto(payload);
    GameService::new(&state.db).update(id, param).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a game.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted game
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted game"),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GameService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
