//! Game factory for creating test game entities.
//!
//! This module provides factory methods for creating game entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("Custom Game")
///     .stock_quantity(0)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    genre: String,
    description: String,
    price: f64,
    release_date: DateTime<Utc>,
    stock_quantity: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - genre: `"Adventure"`
    /// - description: `"Test game {id} description"`
    /// - price: `49.99`
    /// - release_date: now
    /// - stock_quantity: `10`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Game {}", id),
            genre: "Adventure".to_string(),
            description: format!("Test game {} description", id),
            price: 49.99,
            release_date: Utc::now(),
            stock_quantity: 10,
        }
    }

    /// Sets the game title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the game genre.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Sets the game description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the game price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the release date.
    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    /// Sets the stock quantity.
    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity with assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            genre: ActiveValue::Set(self.genre),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            release_date: ActiveValue::Set(self.release_date),
            stock_quantity: ActiveValue::Set(self.stock_quantity),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::game::Model)` - Created game entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
