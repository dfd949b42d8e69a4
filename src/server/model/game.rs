//! Domain and parameter models for game operations.

use chrono::{DateTime, Utc};

use crate::model::game::{CreateGameDto, GameDto};

/// A game record as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub stock_quantity: i32,
}

impl Game {
    /// Converts an entity model to a domain game.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            description: entity.description,
            price: entity.price,
            release_date: entity.release_date,
            stock_quantity: entity.stock_quantity,
        }
    }

    /// Converts the game to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            price: self.price,
            release_date: self.release_date,
            stock_quantity: self.stock_quantity,
        }
    }
}

/// Parameters for inserting a new game. The ID is assigned by storage.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub stock_quantity: i32,
}

impl CreateGameParam {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            title: dto.title,
            genre: dto.genre,
            description: dto.description,
            price: dto.price,
            release_date: dto.release_date,
            stock_quantity: dto.stock_quantity,
        }
    }
}

/// Parameters for replacing every non-ID column of an existing game.
#[derive(Debug, Clone)]
pub struct UpdateGameParam {
    /// ID of the game to replace, as supplied in the request body.
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub release_date: DateTime<Utc>,
    pub stock_quantity: i32,
}

impl UpdateGameParam {
    pub fn from_dto(dto: GameDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            genre: dto.genre,
            description: dto.description,
            price: dto.price,
            release_date: dto.release_date,
            stock_quantity: dto.stock_quantity,
        }
    }

    /// The game this update would produce once applied.
    pub fn into_game(self) -> Game {
        Game {
            id: self.id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            price: self.price,
            release_date: self.release_date,
            stock_quantity: self.stock_quantity,
        }
    }
}

/// Parameters for fetching one page of games.
///
/// Both values are already clamped to at least 1 by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPaginatedGamesParam {
    /// One-based page number.
    pub page_number: u64,
    /// Maximum number of games on the page.
    pub page_size: u64,
}
