//! In-process transport double that records every call.

use async_trait::async_trait;
use std::{collections::HashSet, sync::Mutex};

use crate::server::error::transport::TransportError;

use super::MessageTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text {
        recipient: String,
        text: String,
    },
    Photo {
        recipient: String,
        photo_url: String,
        caption: String,
    },
}

impl SentMessage {
    pub fn recipient(&self) -> &str {
        match self {
            Self::Text { recipient, .. } | Self::Photo { recipient, .. } => recipient,
        }
    }
}

/// Transport that accepts everything except configured failing recipients.
pub struct RecordingTransport {
    configured: bool,
    failing: HashSet<String>,
    fail_all: bool,
    sent: Mutex<Vec<SentMessage>>,
    credential_checks: Mutex<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            configured: true,
            failing: HashSet::new(),
            fail_all: false,
            sent: Mutex::new(Vec::new()),
            credential_checks: Mutex::new(0),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Rejects sends to the given recipients.
    pub fn failing_for(mut self, recipients: &[&str]) -> Self {
        self.failing = recipients.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Rejects every send while still passing the credential check.
    pub fn failing_all(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn credential_checks(&self) -> usize {
        *self.credential_checks.lock().unwrap()
    }

    fn deliver(&self, message: SentMessage) -> Result<(), TransportError> {
        let recipient = message.recipient().to_string();
        self.sent.lock().unwrap().push(message);

        if self.fail_all || self.failing.contains(&recipient) {
            return Err(TransportError::Rejected(format!(
                "Forbidden: bot was blocked by user {}",
                recipient
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), TransportError> {
        self.deliver(SentMessage::Text {
            recipient: recipient_id.to_string(),
            text: text.to_string(),
        })
    }

    async fn send_photo(
        &self,
        recipient_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<(), TransportError> {
        self.deliver(SentMessage::Photo {
            recipient: recipient_id.to_string(),
            photo_url: photo_url.to_string(),
            caption: caption.to_string(),
        })
    }

    async fn validate_credentials(&self) -> bool {
        *self.credential_checks.lock().unwrap() += 1;
        self.configured
    }
}
