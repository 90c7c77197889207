//! Client factory for creating test club client entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .name("Anna")
///     .telegram_id(Some("100200300"))
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: String,
    telegram_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"`
    /// - phone: `"+7900000{id}"`
    /// - telegram_id: `Some("{id}")`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Client {}", id),
            phone: format!("+7900000{}", id),
            telegram_id: Some(id.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Sets the display name for the client.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone number for the client.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the Telegram chat id, `None` for a client that never linked the bot.
    pub fn telegram_id(mut self, telegram_id: Option<&str>) -> Self {
        self.telegram_id = telegram_id.map(str::to_string);
        self
    }

    /// Sets the registration timestamp for the client.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            telegram_id: ActiveValue::Set(self.telegram_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
