//! Broadcast message and dispatch result models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::notification::DeliveryErrorDto;

use super::audience::FilterSpec;

/// Message sent to every recipient of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    pub title: Option<String>,
    pub body: String,
    pub photo_url: Option<String>,
}

impl BroadcastMessage {
    /// Creates a message, treating blank title and photo URL as absent.
    pub fn new(title: Option<String>, body: String, photo_url: Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            title: non_blank(title),
            body,
            photo_url: non_blank(photo_url),
        }
    }

    /// Renders the outbound text in Telegram HTML.
    ///
    /// The title, when present, is bolded and separated from the body by a blank line.
    /// Both parts are escaped so user text can never be parsed as markup.
    pub fn render(&self) -> String {
        match &self.title {
            Some(title) => format!("<b>{}</b>\n\n{}", escape_html(title), escape_html(&self.body)),
            None => escape_html(&self.body),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Pacing parameters for the bulk dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Pause after each send.
    pub delay: Duration,
    /// Recipients sent concurrently before pausing.
    pub batch_size: usize,
}

impl DispatchConfig {
    pub const DEFAULT_DELAY_MS: u64 = 100;
    pub const DEFAULT_BATCH_SIZE: usize = 30;

    /// Pause between consecutive batches, ten times the per-send delay.
    pub fn batch_delay(&self) -> Duration {
        self.delay * 10
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(Self::DEFAULT_DELAY_MS),
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }
}

/// Why a single recipient did not receive the broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryError {
    pub recipient: String,
    pub reason: String,
}

impl DeliveryError {
    pub fn new(recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            reason: reason.into(),
        }
    }

    pub fn into_dto(self) -> DeliveryErrorDto {
        DeliveryErrorDto {
            recipient: self.recipient,
            reason: self.reason,
        }
    }
}

/// Result of one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed { reason: String },
}

/// Aggregated outcome of a dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub success: usize,
    pub failed: usize,
    pub errors: Vec<DeliveryError>,
    /// Sizes of the batches sent, in order.
    pub batches: Vec<usize>,
}

impl DispatchSummary {
    /// Folds one recipient's outcome into the totals.
    pub fn record(&mut self, recipient: &str, outcome: DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.success += 1,
            DeliveryOutcome::Failed { reason } => {
                self.failed += 1;
                self.errors.push(DeliveryError::new(recipient, reason));
            }
        }
    }
}

/// Parameters for a single broadcast run.
#[derive(Debug, Clone)]
pub struct BroadcastParam {
    pub filter: FilterSpec,
    pub message: BroadcastMessage,
}
