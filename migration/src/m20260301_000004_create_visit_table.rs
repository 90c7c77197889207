use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visit::Table)
                    .if_not_exists()
                    .col(pk_auto(Visit::Id))
                    .col(integer(Visit::ClientId))
                    .col(
                        timestamp(Visit::VisitedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_client_id")
                            .from(Visit::Table, Visit::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visit_client_id_visited_at")
                    .table(Visit::Table)
                    .col(Visit::ClientId)
                    .col(Visit::VisitedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_visit_client_id_visited_at")
                    .table(Visit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Visit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visit {
    Table,
    Id,
    ClientId,
    VisitedAt,
}
