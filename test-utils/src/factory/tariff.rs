//! Tariff factory for creating test tariff entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tariffs with customizable fields.
pub struct TariffFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    duration_days: i32,
    price: i32,
}

impl<'a> TariffFactory<'a> {
    /// Creates a new TariffFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tariff {id}"`
    /// - duration_days: `30`
    /// - price: `3000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tariff {}", id),
            duration_days: 30,
            price: 3000,
        }
    }

    /// Sets the tariff name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the subscription length granted by the tariff.
    pub fn duration_days(mut self, duration_days: i32) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Builds and inserts the tariff entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tariff::Model)` - Created tariff entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tariff::Model, DbErr> {
        entity::tariff::ActiveModel {
            name: ActiveValue::Set(self.name),
            duration_days: ActiveValue::Set(self.duration_days),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tariff with default values.
pub async fn create_tariff(db: &DatabaseConnection) -> Result<entity::tariff::Model, DbErr> {
    TariffFactory::new(db).build().await
}
