//! Game fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::game;

/// Default test game title.
pub const DEFAULT_TITLE: &str = "Test Game";

/// Default test game genre.
pub const DEFAULT_GENRE: &str = "Action";

/// Default test game description.
pub const DEFAULT_DESCRIPTION: &str = "Test game description";

/// Default test game price.
pub const DEFAULT_PRICE: f64 = 100.0;

/// Default test game stock quantity.
pub const DEFAULT_STOCK_QUANTITY: i32 = 100;

/// Fixed release date so fixture values compare deterministically.
pub fn default_release_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a game entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Game"`
/// - genre: `"Action"`
/// - description: `"Test game description"`
/// - price: `100.0`
/// - release_date: 2024-01-15T12:00:00Z
/// - stock_quantity: `100`
pub fn entity() -> game::Model {
    entity_builder().build()
}

/// Creates a game entity builder for customization.
pub fn entity_builder() -> GameEntityBuilder {
    GameEntityBuilder::default()
}

/// Builder for creating customized game entity models.
pub struct GameEntityBuilder {
    id: i32,
    title: String,
    genre: String,
    description: String,
    price: f64,
    release_date: DateTime<Utc>,
    stock_quantity: i32,
}

impl Default for GameEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            genre: DEFAULT_GENRE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            price: DEFAULT_PRICE,
            release_date: default_release_date(),
            stock_quantity: DEFAULT_STOCK_QUANTITY,
        }
    }
}

impl GameEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// Builds the game entity model.
    pub fn build(self) -> game::Model {
        game::Model {
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
