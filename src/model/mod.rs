//! Wire-level data transfer objects shared by every API endpoint.

pub mod api;
pub mod game;
