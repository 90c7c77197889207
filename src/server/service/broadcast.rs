//! Broadcast service.
//!
//! `BroadcastService::run_broadcast` is the single entry point that turns a filter and a
//! message into a finished campaign record: resolve the audience, open the record, dispatch,
//! finalize. Audience and persistence failures propagate; everything that happens once a
//! record exists ends with that record in a terminal state.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::audience::AudienceRepository,
    error::AppError,
    model::{
        audience::{FilterSpec, Recipient},
        broadcast::{BroadcastParam, DispatchConfig},
        notification::Notification,
    },
    service::{campaign::CampaignRecordManager, dispatch::BulkDispatcher},
    transport::MessageTransport,
};

const NO_RECIPIENTS: &str = "no recipients for filter";

pub struct BroadcastService<'a> {
    db: &'a DatabaseConnection,
    transport: Arc<dyn MessageTransport>,
    config: DispatchConfig,
}

impl<'a> BroadcastService<'a> {
    /// Creates a new BroadcastService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `transport` - Delivery channel used for every send
    /// - `config` - Dispatch delay and batch size
    ///
    /// # Returns
    /// - `BroadcastService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        transport: Arc<dyn MessageTransport>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            db,
            transport,
            config,
        }
    }

    /// Sends a message to every client selected by the filter and records the outcome.
    ///
    /// The broadcast runs in its own task, so dropping the returned future (for example when
    /// an HTTP client disconnects) does not interrupt it: sending continues and the record
    /// still reaches a terminal state.
    ///
    /// An empty audience or an unconfigured transport still produces a record, finalized as
    /// `failed` with zero recipients and one error detail; no sends are attempted. Once the
    /// transport is known to work, the record is finalized as `completed` even when every
    /// individual send failed.
    ///
    /// # Arguments
    /// - `param` - Audience filter and message content
    ///
    /// # Returns
    /// - `Ok(Notification)` - The campaign record in a terminal state
    /// - `Err(AppError::DbErr)` - Audience query or record persistence failed
    /// - `Err(AppError::InternalError)` - The broadcast task panicked
    pub async fn run_broadcast(&self, param: BroadcastParam) -> Result<Notification, AppError> {
        let db = self.db.clone();
        let transport = self.transport.clone();
        let config = self.config;

        tokio::spawn(async move { execute_broadcast(db, transport, config, param).await })
            .await
            .map_err(|e| AppError::InternalError(format!("Broadcast task failed: {}", e)))?
    }

    /// Resolves the audience for a filter without sending anything or writing a record.
    ///
    /// # Arguments
    /// - `filter` - The audience filter
    ///
    /// # Returns
    /// - `Ok(Vec<Recipient>)` - Recipients the filter currently selects
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn preview_audience(&self, filter: &FilterSpec) -> Result<Vec<Recipient>, AppError> {
        resolve_audience(self.db, filter).await
    }
}

async fn execute_broadcast(
    db: DatabaseConnection,
    transport: Arc<dyn MessageTransport>,
    config: DispatchConfig,
    param: BroadcastParam,
) -> Result<Notification, AppError> {
    let recipients = resolve_audience(&db, &param.filter).await?;
    let campaigns = CampaignRecordManager::new(&db);

    if recipients.is_empty() {
        return campaigns
            .record_skipped(&param.message, &param.filter, NO_RECIPIENTS)
            .await;
    }

    if !transport.validate_credentials().await {
        let reason = format!(
            "transport not configured; {} recipients skipped",
            recipients.len()
        );
        return campaigns
            .record_skipped(&param.message, &param.filter, &reason)
            .await;
    }

    let record = campaigns
        .open(&param.message, &param.filter, recipients.len())
        .await?;

    let dispatcher = BulkDispatcher::new(transport);
    match dispatcher
        .dispatch(&recipients, &param.message, config)
        .await
    {
        Ok(summary) => campaigns.finalize(&record, summary).await,
        Err(e) => campaigns.fail(&record, &e.to_string()).await,
    }
}

async fn resolve_audience(
    db: &DatabaseConnection,
    filter: &FilterSpec,
) -> Result<Vec<Recipient>, AppError> {
    let recipients = AudienceRepository::new(db)
        .resolve(filter, Utc::now())
        .await?;

    tracing::info!(
        "Filter {} selected {} recipients",
        filter.name(),
        recipients.len()
    );

    Ok(recipients)
}
