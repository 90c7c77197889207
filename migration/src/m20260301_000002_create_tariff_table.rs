use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tariff::Table)
                    .if_not_exists()
                    .col(pk_auto(Tariff::Id))
                    .col(string_uniq(Tariff::Name))
                    .col(integer(Tariff::DurationDays))
                    .col(integer(Tariff::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tariff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tariff {
    Table,
    Id,
    Name,
    DurationDays,
    Price,
}
