pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_client_table;
mod m20260301_000002_create_tariff_table;
mod m20260301_000003_create_subscription_table;
mod m20260301_000004_create_visit_table;
mod m20260302_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_client_table::Migration),
            Box::new(m20260301_000002_create_tariff_table::Migration),
            Box::new(m20260301_000003_create_subscription_table::Migration),
            Box::new(m20260301_000004_create_visit_table::Migration),
            Box::new(m20260302_000005_create_notification_table::Migration),
        ]
    }
}
