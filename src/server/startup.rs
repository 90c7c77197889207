use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config,
    error::AppError,
    transport::{telegram::TelegramTransport, MessageTransport},
};

/// Upper bound for one Bot API call.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Bot API calls.
///
/// Redirects are disabled; the Bot API never redirects and following one would send the
/// token-bearing URL elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the messaging transport from configuration.
///
/// A missing bot token yields a transport that reports itself as unconfigured, so the
/// server still starts and broadcasts are recorded as skipped.
pub fn setup_transport(config: &Config, client: reqwest::Client) -> Arc<dyn MessageTransport> {
    let transport = TelegramTransport::new(
        client,
        config.telegram_api_url.clone(),
        config.telegram_bot_token.clone(),
    );

    if !transport.is_configured() {
        tracing::warn!("TELEGRAM_BOT_TOKEN is not set; broadcasts will be skipped");
    }

    Arc::new(transport)
}
