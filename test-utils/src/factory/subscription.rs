//! Subscription factory for creating test subscription entities.
//!
//! Subscriptions depend on an existing client and tariff; create those first or use
//! `helpers::create_subscribed_client`.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscriptions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let subscription = SubscriptionFactory::new(&db, client.id, tariff.id)
///     .status("frozen")
///     .end_date(Utc::now() + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    tariff_id: i32,
    status: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a new SubscriptionFactory with default values.
    ///
    /// Defaults:
    /// - status: `"active"`
    /// - start_date: 30 days ago
    /// - end_date: 30 days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - ID of the subscribed client
    /// - `tariff_id` - ID of the subscribed tariff
    pub fn new(db: &'a DatabaseConnection, client_id: i32, tariff_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            client_id,
            tariff_id,
            status: "active".to_string(),
            start_date: now - Duration::days(30),
            end_date: now + Duration::days(30),
        }
    }

    /// Sets the subscription status (`active`, `frozen`, `expired`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the subscription start date.
    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the subscription end date.
    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the subscription entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::subscription::Model)` - Created subscription entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing client or tariff)
    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        entity::subscription::ActiveModel {
            client_id: ActiveValue::Set(self.client_id),
            tariff_id: ActiveValue::Set(self.tariff_id),
            status: ActiveValue::Set(self.status),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active subscription with default dates.
pub async fn create_subscription(
    db: &DatabaseConnection,
    client_id: i32,
    tariff_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db, client_id, tariff_id).build().await
}
