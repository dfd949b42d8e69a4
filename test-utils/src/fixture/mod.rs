//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and for building request payloads.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let game = fixture::game::entity();
//!
//! let cheap = fixture::game::entity_builder()
//!     .price(0.99)
//!     .build();
//! ```

pub mod game;
