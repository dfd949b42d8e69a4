//! Service layer for business logic.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models and translate absence
//! and precondition failures into `AppError` variants.

pub mod game;
