use std::{str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::broadcast::DispatchConfig,
    transport::telegram::DEFAULT_TELEGRAM_API_URL,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REMINDER_DAYS: i64 = 3;

pub struct Config {
    pub database_url: String,
    pub admin_token: String,
    pub bind_addr: String,

    pub telegram_bot_token: Option<String>,
    pub telegram_api_url: String,

    pub dispatch: DispatchConfig,

    /// Cron expression for subscription reminders; `None` disables the job.
    pub reminder_cron: Option<String>,
    pub reminder_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let delay_ms: u64 = parse_or(
            &lookup,
            "BROADCAST_DELAY_MS",
            DispatchConfig::DEFAULT_DELAY_MS,
        )?;
        let batch_size: usize = parse_or(
            &lookup,
            "BROADCAST_BATCH_SIZE",
            DispatchConfig::DEFAULT_BATCH_SIZE,
        )?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "BROADCAST_BATCH_SIZE".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            admin_token: required("ADMIN_TOKEN")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            telegram_bot_token: optional("TELEGRAM_BOT_TOKEN"),
            telegram_api_url: optional("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            dispatch: DispatchConfig {
                delay: Duration::from_millis(delay_ms),
                batch_size,
            },
            reminder_cron: optional("REMINDER_CRON"),
            reminder_days: parse_or(&lookup, "REMINDER_DAYS", DEFAULT_REMINDER_DAYS)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
