use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParam, Game, GetPaginatedGamesParam, UpdateGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of games in ascending ID order
    pub async fn get_paginated(&self, param: GetPaginatedGamesParam) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_paginated(param).await?)
    }

    /// Gets a game by ID, failing with `NotFound` when it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates a new game and returns it with its assigned ID
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        let game = repo.create(param).await?;

        tracing::debug!(id = game.id, title = %game.title, "Created game");

        Ok(game)
    }

    /// Replaces all fields of the game at `id`.
    ///
    /// The ID in `param` must equal `id`; on mismatch nothing is written.
    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<Game, AppError> {
        if param.id != id {
            return Err(AppError::BadRequest(format!(
                "Game ID {} in request body does not match ID {} in path.",
                param.id, id
            )));
        }

        let repo = GameRepository::new(self.db);

        let game = repo.update(param).await?.ok_or_else(|| not_found(id))?;

        tracing::debug!(id, "Updated game");

        Ok(game)
    }

    /// Deletes the game at `id`, failing with `NotFound` when it doesn't exist
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GameRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        repo.delete(id).await?;

        tracing::debug!(id, "Deleted game");

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Game with ID {} not found.", id))
}
