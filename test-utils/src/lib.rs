//! Game Catalog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the game
//! catalog service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, plus factories and fixtures for game records.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert game rows with sensible defaults
//! - **fixture**: Build in-memory game models without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_game_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_game_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let game = factory::game::create_game(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
