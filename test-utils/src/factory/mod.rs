//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::game::create_game(&db).await?;
//!
//!     // Seed the two-game catalog used by scenario tests
//!     let (first, second) = factory::helpers::seed_catalog(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .title("Custom Game")
//!     .price(59.99)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;

pub use game::create_game;
pub use helpers::seed_catalog;
