//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for seeding common data sets.

use chrono::{Months, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::game::GameFactory;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds the catalog with two known games.
///
/// Inserts, in order:
/// 1. "Test Game 1" - Action, price 100, released a year ago, 100 in stock
/// 2. "Test Game 2" - Crime, price 500, released two years ago, 5 in stock
///
/// On a fresh table these receive IDs 1 and 2.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((first, second))` - Both inserted game entities
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_catalog(
    db: &DatabaseConnection,
) -> Result<(entity::game::Model, entity::game::Model), DbErr> {
    let now = Utc::now();

    let first = GameFactory::new(db)
        .title("Test Game 1")
        .genre("Action")
        .description("Test Game 1 desc")
        .price(100.0)
        .release_date(now.checked_sub_months(Months::new(12)).unwrap_or(now))
        .stock_quantity(100)
        .build()
        .await?;

    let second = GameFactory::new(db)
        .title("Test Game 2")
        .genre("Crime")
        .description("Test Game 2 desc")
        .price(500.0)
        .release_date(now.checked_sub_months(Months::new(24)).unwrap_or(now))
        .stock_quantity(5)
        .build()
        .await?;

    Ok((first, second))
}
