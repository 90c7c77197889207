//! Campaign record lifecycle.
//!
//! Every broadcast owns exactly one `notification` row. This module drives it through
//! `pending -> in_progress -> completed | failed` and keeps the counters balanced at each step.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        audience::FilterSpec,
        broadcast::{BroadcastMessage, DeliveryError, DispatchSummary},
        notification::{
            to_count, CreateNotificationParam, FinalizeNotificationParam, Notification,
            NotificationStatus,
        },
    },
};

/// Error detail key for failures that concern the whole campaign rather than one recipient.
pub const CAMPAIGN_ERROR_KEY: &str = "campaign";

pub struct CampaignRecordManager<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignRecordManager<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the record for a broadcast and moves it straight to `in_progress`.
    ///
    /// # Arguments
    /// - `message` - Content being broadcast
    /// - `filter` - Filter that produced the audience
    /// - `total_recipients` - Audience size; every recipient starts pending
    ///
    /// # Returns
    /// - `Ok(Notification)` - Record in `in_progress`
    /// - `Err(AppError::DbErr)` - Record could not be written
    pub async fn open(
        &self,
        message: &BroadcastMessage,
        filter: &FilterSpec,
        total_recipients: usize,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let record = repo
            .create(CreateNotificationParam {
                title: message.title.clone(),
                message: message.body.clone(),
                photo_url: message.photo_url.clone(),
                filter_type: filter.name().to_string(),
                total_recipients: to_count(total_recipients),
            })
            .await?;
        let record = repo.mark_in_progress(record.id).await?;

        tracing::info!(
            "Opened campaign {} for filter {} with {} recipients",
            record.id,
            record.filter_type,
            record.total_recipients
        );

        Ok(record)
    }

    /// Writes the dispatch outcome and marks the record `completed`.
    ///
    /// Used whenever the transport was reachable, including runs where every send failed.
    pub async fn finalize(
        &self,
        record: &Notification,
        summary: DispatchSummary,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let record = repo
            .finalize(
                record.id,
                FinalizeNotificationParam {
                    status: NotificationStatus::Completed,
                    success_count: to_count(summary.success),
                    failed_count: to_count(summary.failed),
                    errors: summary.errors,
                },
            )
            .await?;

        tracing::info!(
            "Campaign {} completed: {} delivered, {} failed",
            record.id,
            record.success_count,
            record.failed_count
        );

        Ok(record)
    }

    /// Marks an open record `failed` after the dispatcher aborted.
    ///
    /// No partial results exist at this point, so every recipient is counted as failed and
    /// the abort reason is stored as the single error detail.
    pub async fn fail(&self, record: &Notification, reason: &str) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let record = repo
            .finalize(
                record.id,
                FinalizeNotificationParam {
                    status: NotificationStatus::Failed,
                    success_count: 0,
                    failed_count: record.total_recipients,
                    errors: vec![DeliveryError::new(CAMPAIGN_ERROR_KEY, reason)],
                },
            )
            .await?;

        tracing::error!("Campaign {} failed: {}", record.id, reason);

        Ok(record)
    }

    /// Records a broadcast that was never dispatched.
    ///
    /// The record is opened with zero recipients and immediately finalized as `failed` with
    /// `reason` as its only error detail, so skipped broadcasts stay visible in history.
    pub async fn record_skipped(
        &self,
        message: &BroadcastMessage,
        filter: &FilterSpec,
        reason: &str,
    ) -> Result<Notification, AppError> {
        let record = self.open(message, filter, 0).await?;
        let repo = NotificationRepository::new(self.db);

        let record = repo
            .finalize(
                record.id,
                FinalizeNotificationParam {
                    status: NotificationStatus::Failed,
                    success_count: 0,
                    failed_count: 0,
                    errors: vec![DeliveryError::new(CAMPAIGN_ERROR_KEY, reason)],
                },
            )
            .await?;

        tracing::warn!("Campaign {} skipped: {}", record.id, reason);

        Ok(record)
    }
}
