use sea_orm::entity::prelude::*;

/// Persisted summary of one broadcast.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub photo_url: Option<String>,
    pub filter_type: String,
    /// One of `pending`, `in_progress`, `completed`, `failed`.
    pub status: String,
    pub total_recipients: i32,
    pub success_count: i32,
    pub failed_count: i32,
    pub pending_count: i32,
    /// JSON array of `{recipient, reason}` objects.
    #[sea_orm(column_type = "Text")]
    pub error_details: String,
    pub created_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
