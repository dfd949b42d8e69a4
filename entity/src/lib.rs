//! SeaORM entity definitions for the game catalog database.

pub mod prelude;

pub mod game;
