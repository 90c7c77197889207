use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    model::{
        audience::FilterSpec,
        broadcast::{BroadcastMessage, BroadcastParam, DispatchConfig},
    },
    service::broadcast::BroadcastService,
    transport::MessageTransport,
};

const REMINDER_TITLE: &str = "Subscription reminder";
const REMINDER_BODY: &str =
    "Your club subscription ends soon. Renew at the front desk to keep training without a break.";

/// Starts the subscription reminder scheduler
///
/// On every tick of `cron`, broadcasts a renewal reminder to clients whose active
/// subscription ends within `days` days. Each run produces its own campaign record.
///
/// # Arguments
/// - `db`: Database connection
/// - `transport`: Messaging transport shared with the API
/// - `dispatch_config`: Pacing for the reminder broadcast
/// - `cron`: Six-field cron expression (seconds first)
/// - `days`: Look-ahead window for expiring subscriptions
pub async fn start_scheduler(
    db: DatabaseConnection,
    transport: Arc<dyn MessageTransport>,
    dispatch_config: DispatchConfig,
    cron: String,
    days: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let transport = transport.clone();

        Box::pin(async move {
            if let Err(e) = send_reminders(&db, transport, dispatch_config, days).await {
                tracing::error!("Error sending subscription reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Subscription reminder scheduler started ({})", cron);

    Ok(())
}

/// Runs one reminder broadcast
async fn send_reminders(
    db: &DatabaseConnection,
    transport: Arc<dyn MessageTransport>,
    dispatch_config: DispatchConfig,
    days: i64,
) -> Result<(), AppError> {
    let service = BroadcastService::new(db, transport, dispatch_config);
    let record = service.run_broadcast(reminder_broadcast(days)).await?;

    tracing::info!(
        "Subscription reminders sent: campaign {} {} ({} delivered, {} failed)",
        record.id,
        record.status,
        record.success_count,
        record.failed_count
    );

    Ok(())
}

fn reminder_broadcast(days: i64) -> BroadcastParam {
    BroadcastParam {
        filter: FilterSpec::ExpiringSoon { days },
        message: BroadcastMessage::new(
            Some(REMINDER_TITLE.to_string()),
            REMINDER_BODY.to_string(),
            None,
        ),
    }
}
