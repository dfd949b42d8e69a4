//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during server startup and cloned for each incoming request via
/// Axum's state extraction. `DatabaseConnection` is a connection pool, so clones share
/// the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
