mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::subscription_reminders, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let transport = startup::setup_transport(&config, http_client);

    tracing::info!("Starting server");

    // Start subscription reminder scheduler
    if let Some(cron) = config.reminder_cron.clone() {
        let scheduler_db = db.clone();
        let scheduler_transport = transport.clone();
        let dispatch_config = config.dispatch;
        let days = config.reminder_days;
        tokio::spawn(async move {
            if let Err(e) = subscription_reminders::start_scheduler(
                scheduler_db,
                scheduler_transport,
                dispatch_config,
                cron,
                days,
            )
            .await
            {
                tracing::error!("Subscription reminder scheduler error: {}", e);
            }
        });
    }

    let app = router::router().with_state(AppState::new(
        db,
        transport,
        config.dispatch,
        config.admin_token.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e))
        })?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
