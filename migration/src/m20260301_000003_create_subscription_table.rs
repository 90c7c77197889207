use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_client_table::Client;
use super::m20260301_000002_create_tariff_table::Tariff;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(integer(Subscription::ClientId))
                    .col(integer(Subscription::TariffId))
                    .col(string(Subscription::Status).not_null())
                    .col(timestamp(Subscription::StartDate))
                    .col(timestamp(Subscription::EndDate))
                    .col(
                        timestamp(Subscription::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_client_id")
                            .from(Subscription::Table, Subscription::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_tariff_id")
                            .from(Subscription::Table, Subscription::TariffId)
                            .to(Tariff::Table, Tariff::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Audience queries filter on status together with end date or tariff
        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_status_end_date")
                    .table(Subscription::Table)
                    .col(Subscription::Status)
                    .col(Subscription::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subscription_status_end_date")
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    ClientId,
    TariffId,
    Status,
    StartDate,
    EndDate,
    CreatedAt,
}
