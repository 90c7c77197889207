//! Notification factory for creating finished campaign records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating campaign records with customizable fields.
///
/// Produces a terminal record by default so that history listings have something
/// realistic to page through.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    message: String,
    filter_type: String,
    status: String,
    total: i32,
    success: i32,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - message: `"Hello"`
    /// - filter_type: `"all"`
    /// - status: `"completed"`
    /// - total / success: `1` / `1`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message: "Hello".to_string(),
            filter_type: "all".to_string(),
            status: "completed".to_string(),
            total: 1,
            success: 1,
            created_at: Utc::now(),
        }
    }

    /// Sets the broadcast body.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the campaign status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets total and successful recipients; the remainder is recorded as failed.
    pub fn counts(mut self, total: i32, success: i32) -> Self {
        self.total = total;
        self.success = success;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            title: ActiveValue::Set(None),
            message: ActiveValue::Set(self.message),
            photo_url: ActiveValue::Set(None),
            filter_type: ActiveValue::Set(self.filter_type),
            status: ActiveValue::Set(self.status),
            total_recipients: ActiveValue::Set(self.total),
            success_count: ActiveValue::Set(self.success),
            failed_count: ActiveValue::Set(self.total - self.success),
            pending_count: ActiveValue::Set(0),
            error_details: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(self.created_at),
            completed_at: ActiveValue::Set(Some(self.created_at)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed campaign record with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
