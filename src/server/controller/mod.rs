//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs to service parameters, call the service
//! layer and convert domain models back into DTO responses.

pub mod game;
pub mod param;
