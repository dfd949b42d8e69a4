//! Game data repository for database operations.
//!
//! Provides the `GameRepository` for managing game records, converting between entity
//! models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::game::{CreateGameParam, Game, GetPaginatedGamesParam, UpdateGameParam};

/// Largest row offset or limit the database driver can bind.
const MAX_SQL_OFFSET: u64 = i64::MAX as u64;

/// Repository providing database operations for the game catalog.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game.
    ///
    /// Inserts the game and returns it with the ID assigned by the database.
    ///
    /// # Arguments
    /// - `param` - Field values for the new game
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(param.title),
            genre: ActiveValue::Set(param.genre),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            release_date: ActiveValue::Set(param.release_date),
            stock_quantity: ActiveValue::Set(param.stock_quantity),
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Gets a game by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game exists with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets one page of games ordered by ascending ID.
    ///
    /// Skips `(page_number - 1) * page_size` rows and returns at most `page_size` games.
    /// Pages past the end return an empty vector, including pages whose offset does not
    /// fit in an SQL `BIGINT`.
    ///
    /// # Arguments
    /// - `param` - One-based page number and page size, both at least 1
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Games on the requested page
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, param: GetPaginatedGamesParam) -> Result<Vec<Game>, DbErr> {
        let page = param.page_number.saturating_sub(1);
        let page_size = param.page_size.clamp(1, MAX_SQL_OFFSET);

        // LIMIT and OFFSET are bound as i64
        match page.checked_mul(page_size) {
            Some(offset) if offset <= MAX_SQL_OFFSET => {}
            _ => return Ok(Vec::new()),
        }

        let paginator = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .paginate(self.db, page_size);

        let entities = paginator.fetch_page(page).await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Replaces every non-ID column of an existing game.
    ///
    /// # Arguments
    /// - `param` - ID of the game to replace and its new field values
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The game as stored after the update
    /// - `Ok(None)` - No game exists with the specified ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, param: UpdateGameParam) -> Result<Option<Game>, DbErr> {
        let result = entity::prelude::Game::update_many()
            .set(entity::game::ActiveModel {
                id: ActiveValue::NotSet,
                title: ActiveValue::Set(param.title.clone()),
                genre: ActiveValue::Set(param.genre.clone()),
                description: ActiveValue::Set(param.description.clone()),
                price: ActiveValue::Set(param.price),
                release_date: ActiveValue::Set(param.release_date),
                stock_quantity: ActiveValue::Set(param.stock_quantity),
            })
            .filter(entity::game::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(param.into_game()))
    }

    /// Deletes a game.
    ///
    /// # Returns
    /// - `Ok(())` - Game deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
