use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional knobs for the named audience filters.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FilterParamsDto {
    pub days: Option<i64>,
    pub tariff_id: Option<i32>,
}

/// Request body for `POST /api/notifications/broadcast`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BroadcastRequestDto {
    pub filter: String,
    #[serde(default)]
    pub filter_params: FilterParamsDto,
    pub title: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
}

/// Query string for `GET /api/notifications/audience`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AudienceQueryDto {
    pub filter: String,
    pub days: Option<i64>,
    pub tariff_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipientDto {
    pub telegram_id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AudiencePreviewDto {
    pub filter: String,
    pub total: u64,
    pub recipients: Vec<RecipientDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeliveryErrorDto {
    pub recipient: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NotificationDto {
    pub id: i32,
    pub title: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
    pub filter_type: String,
    pub status: String,
    pub total_recipients: i32,
    pub success_count: i32,
    pub failed_count: i32,
    pub pending_count: i32,
    pub errors: Vec<DeliveryErrorDto>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Query string for paginated listings.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaginationQueryDto {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}
