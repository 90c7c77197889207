use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(string_null(Notification::Title))
                    .col(text(Notification::Message))
                    .col(string_null(Notification::PhotoUrl))
                    .col(string(Notification::FilterType))
                    .col(string(Notification::Status).not_null())
                    .col(integer(Notification::TotalRecipients).default(0))
                    .col(integer(Notification::SuccessCount).default(0))
                    .col(integer(Notification::FailedCount).default(0))
                    .col(integer(Notification::PendingCount).default(0))
                    .col(text(Notification::ErrorDetails).default("[]"))
                    .col(
                        timestamp(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Notification::CompletedAt))
                    .to_owned(),
            )
            .await?;

        // History listing is newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_created_at")
                    .table(Notification::Table)
                    .col(Notification::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_created_at")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    Title,
    Message,
    PhotoUrl,
    FilterType,
    Status,
    TotalRecipients,
    SuccessCount,
    FailedCount,
    PendingCount,
    ErrorDetails,
    CreatedAt,
    CompletedAt,
}
