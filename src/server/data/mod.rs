//! Database repository layer.
//!
//! Repositories handle the database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and return domain models to maintain separation between the
//! data layer and the service layer. Every call runs as its own autocommitted statement.

pub mod game;
