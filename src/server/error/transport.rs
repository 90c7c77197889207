use thiserror::Error;

/// Failure of a single messaging transport call.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No bot token is configured, so nothing can be sent.
    #[error("Messaging transport is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("Telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Bot API answered with `ok: false`.
    #[error("Telegram API rejected the request: {0}")]
    Rejected(String),
}
