//! Outbound messaging transport.
//!
//! The bulk dispatcher talks to the messaging platform only through the
//! `MessageTransport` trait. The application owns a single `TelegramTransport`
//! in its state and hands it to each broadcast; tests substitute an in-process double.

pub mod telegram;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::error::transport::TransportError;

/// Delivery channel used by the bulk dispatcher.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Sends a plain text message to one recipient.
    ///
    /// # Arguments
    /// - `recipient_id` - External chat identifier
    /// - `text` - Rendered message text
    ///
    /// # Returns
    /// - `Ok(())` - The platform acknowledged the message
    /// - `Err(TransportError)` - The request failed or was rejected
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), TransportError>;

    /// Sends a photo with a caption to one recipient.
    ///
    /// # Arguments
    /// - `recipient_id` - External chat identifier
    /// - `photo_url` - Publicly reachable image URL
    /// - `caption` - Rendered caption text
    ///
    /// # Returns
    /// - `Ok(())` - The platform acknowledged the message
    /// - `Err(TransportError)` - The request failed or was rejected
    async fn send_photo(
        &self,
        recipient_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TransportError>;

    /// Checks that the transport is configured and its credentials are accepted.
    async fn validate_credentials(&self) -> bool;
}
