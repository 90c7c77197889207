//! Telegram Bot API transport.
//!
//! Sends messages with `sendMessage` / `sendPhoto` using HTML parse mode and validates
//! the bot token with `getMe`. A missing token leaves the transport unconfigured: every
//! call fails fast with `TransportError::NotConfigured` and no request is made.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::error::transport::TransportError;

use super::MessageTransport;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Envelope returned by every Bot API method.
#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramBotUser {
    pub id: i64,
    pub username: Option<String>,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Serialize)]
struct SendPhotoBody<'a> {
    chat_id: &'a str,
    photo: &'a str,
    caption: &'a str,
    parse_mode: &'static str,
}

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramTransport {
    /// Shared HTTP client
    client: reqwest::Client,
    /// Base API URL without trailing slash
    api_url: String,
    /// Bot token, `None` when the bot is not configured
    bot_token: Option<String>,
}

impl TelegramTransport {
    /// Creates a new TelegramTransport.
    ///
    /// # Arguments
    /// - `client` - HTTP client used for all Bot API calls
    /// - `api_url` - Base API URL, usually `https://api.telegram.org`
    /// - `bot_token` - Bot token; blank or `None` leaves the transport unconfigured
    pub fn new(client: reqwest::Client, api_url: String, bot_token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Invokes a Bot API method and unwraps the response envelope.
    ///
    /// # Returns
    /// - `Ok(T)` - Method succeeded with `ok: true`
    /// - `Err(TransportError::NotConfigured)` - No bot token
    /// - `Err(TransportError::Request)` - Network or decode failure
    /// - `Err(TransportError::Rejected)` - API answered `ok: false` or omitted the result
    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self
            .bot_token
            .as_deref()
            .ok_or(TransportError::NotConfigured)?;
        let url = format!("{}/bot{}/{}", self.api_url, token, method);

        let response: TelegramResponse<T> = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(TransportError::Rejected(
                response
                    .description
                    .unwrap_or_else(|| format!("{} returned ok=false", method)),
            ));
        }

        response
            .result
            .ok_or_else(|| TransportError::Rejected(format!("{} returned no result", method)))
    }

    /// Fetches the bot's own account, confirming the token is valid.
    pub async fn get_me(&self) -> Result<TelegramBotUser, TransportError> {
        self.call("getMe", &serde_json::json!({})).await
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), TransportError> {
        let body = SendMessageBody {
            chat_id: recipient_id,
            text,
            parse_mode: "HTML",
        };

        self.call::<_, serde_json::Value>("sendMessage", &body)
            .await
            .map(|_| ())
    }

    async fn send_photo(
        &self,
        recipient_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TransportError> {
        let body = SendPhotoBody {
            chat_id: recipient_id,
            photo: photo_url,
            caption,
            parse_mode: "HTML",
        };

        self.call::<_, serde_json::Value>("sendPhoto", &body)
            .await
            .map(|_| ())
    }

    async fn validate_credentials(&self) -> bool {
        if !self.is_configured() {
            return false;
        }

        match self.get_me().await {
            Ok(bot) => {
                tracing::debug!(
                    "Telegram bot {} ({}) authenticated",
                    bot.username.as_deref().unwrap_or("unnamed"),
                    bot.id
                );
                true
            }
            Err(e) => {
                tracing::warn!("Telegram credential check failed: {}", e);
                false
            }
        }
    }
}
