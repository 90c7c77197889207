//! Campaign record domain models and parameters.
//!
//! A campaign record (stored in the `notification` table) summarises one broadcast run.
//! Its lifecycle is `pending -> in_progress -> completed | failed`, and at every observed
//! state `success_count + failed_count + pending_count == total_recipients`.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::notification::{NotificationDto, PaginatedNotificationsDto},
    server::error::{internal::InternalError, AppError},
};

use super::broadcast::DeliveryError;

/// Lifecycle state of a campaign record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(InternalError::InvalidNotificationStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// Campaign record with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub title: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
    /// Wire name of the audience filter used.
    pub filter_type: String,
    pub status: NotificationStatus,
    pub total_recipients: i32,
    pub success_count: i32,
    pub failed_count: i32,
    pub pending_count: i32,
    pub errors: Vec<DeliveryError>,
    pub created_at: DateTime<Utc>,
    /// Set only once the record reaches a terminal state.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Converts an entity model to a campaign record at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The converted record
    /// - `Err(AppError::InternalError)` - Stored status or error details are malformed
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        let status = entity.status.parse::<NotificationStatus>()?;
        let errors: Vec<DeliveryError> = serde_json::from_str(&entity.error_details)
            .map_err(|source| InternalError::InvalidErrorDetails {
                notification_id: entity.id,
                source,
            })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            photo_url: entity.photo_url,
            filter_type: entity.filter_type,
            status,
            total_recipients: entity.total_recipients,
            success_count: entity.success_count,
            failed_count: entity.failed_count,
            pending_count: entity.pending_count,
            errors,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            photo_url: self.photo_url,
            filter_type: self.filter_type,
            status: self.status.as_str().to_string(),
            total_recipients: self.total_recipients,
            success_count: self.success_count,
            failed_count: self.failed_count,
            pending_count: self.pending_count,
            errors: self.errors.into_iter().map(DeliveryError::into_dto).collect(),
            created_at: self.created_at,
            completed_at: self.completed_at,
        }
    }

    /// Whether the counters add up to the recipient total.
    pub fn counts_balance(&self) -> bool {
        self.pending_count >= 0
            && self.success_count + self.failed_count + self.pending_count == self.total_recipients
    }
}

/// Parameters for creating a new campaign record in `pending` state.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub title: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
    pub filter_type: String,
    pub total_recipients: i32,
}

/// Parameters for moving a campaign record into a terminal state.
#[derive(Debug, Clone)]
pub struct FinalizeNotificationParam {
    pub status: NotificationStatus,
    pub success_count: i32,
    pub failed_count: i32,
    pub errors: Vec<DeliveryError>,
}

/// Parameters for listing campaign history.
#[derive(Debug, Clone)]
pub struct GetNotificationsParam {
    pub page: u64,
    pub per_page: u64,
}

/// One page of campaign history with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Converts a count to the database column type, saturating on overflow.
pub fn to_count(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
