//! Visit factory for recording test gym visits.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a visit for a client at the given moment.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - ID of the visiting client
/// - `visited_at` - Timestamp of the visit
///
/// # Returns
/// - `Ok(entity::visit::Model)` - Created visit entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_visit(
    db: &DatabaseConnection,
    client_id: i32,
    visited_at: DateTime<Utc>,
) -> Result<entity::visit::Model, DbErr> {
    entity::visit::ActiveModel {
        client_id: ActiveValue::Set(client_id),
        visited_at: ActiveValue::Set(visited_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
