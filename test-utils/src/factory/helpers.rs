//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client holding an active subscription on a fresh tariff.
///
/// This is a convenience method that creates:
/// 1. Client (with a Telegram id)
/// 2. Tariff
/// 3. Active subscription ending in 30 days
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, tariff, subscription))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscribed_client(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::client::Model,
        entity::tariff::Model,
        entity::subscription::Model,
    ),
    DbErr,
> {
    let client = crate::factory::client::create_client(db).await?;
    let tariff = crate::factory::tariff::create_tariff(db).await?;
    let subscription =
        crate::factory::subscription::create_subscription(db, client.id, tariff.id).await?;

    Ok((client, tariff, subscription))
}

/// Creates `count` clients that all have a Telegram id.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of clients to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created clients in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_clients(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::client::Model>, DbErr> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(crate::factory::client::create_client(db).await?);
    }
    Ok(clients)
}
