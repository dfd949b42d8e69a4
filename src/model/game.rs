use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A game as exchanged over the API.
///
/// Also used as the update request body, where `id` must match the path id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub stock_quantity: i32,
}

/// Request body for creating a game.
///
/// Carries no `id`; storage assigns it. An `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub stock_quantity: i32,
}
