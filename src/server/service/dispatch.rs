//! Bulk dispatcher.
//!
//! Sends one message per recipient through a `MessageTransport`. Recipients are split into
//! consecutive batches; sends inside a batch run concurrently but are staggered by the
//! configured delay, and batches run strictly one after another with a longer pause between
//! them. Per-recipient failures are folded into the summary and never abort the run.

use futures::future::join_all;
use std::{sync::Arc, time::Duration};

use crate::server::{
    error::dispatch::DispatchError,
    model::{
        audience::Recipient,
        broadcast::{BroadcastMessage, DeliveryOutcome, DispatchConfig, DispatchSummary},
    },
    transport::MessageTransport,
};

pub struct BulkDispatcher {
    transport: Arc<dyn MessageTransport>,
}

impl BulkDispatcher {
    /// Creates a new BulkDispatcher over the given transport.
    ///
    /// # Arguments
    /// - `transport` - Delivery channel shared with the rest of the application
    ///
    /// # Returns
    /// - `BulkDispatcher` - New dispatcher instance
    pub fn new(transport: Arc<dyn MessageTransport>) -> Self {
        Self { transport }
    }

    /// Sends the message to every recipient and aggregates the outcomes.
    ///
    /// The `k`-th send of a batch starts `k * delay` after the batch starts and is followed
    /// by a further `delay` before its slot is released. The next batch starts once every
    /// send of the current one has settled and `config.batch_delay()` has elapsed.
    ///
    /// # Arguments
    /// - `recipients` - Audience in dispatch order; duplicates are sent twice
    /// - `message` - Content to deliver
    /// - `config` - Per-send delay and batch size
    ///
    /// # Returns
    /// - `Ok(DispatchSummary)` - Aggregate outcome, also when every send failed
    /// - `Err(DispatchError::ZeroBatchSize)` - `config.batch_size` is zero; nothing was sent
    pub async fn dispatch(
        &self,
        recipients: &[Recipient],
        message: &BroadcastMessage,
        config: DispatchConfig,
    ) -> Result<DispatchSummary, DispatchError> {
        if config.batch_size == 0 {
            return Err(DispatchError::ZeroBatchSize);
        }

        let text = message.render();
        let batch_count = recipients.len().div_ceil(config.batch_size);
        let mut summary = DispatchSummary::default();

        for (index, batch) in recipients.chunks(config.batch_size).enumerate() {
            if index > 0 {
                tokio::time::sleep(config.batch_delay()).await;
            }

            tracing::debug!(
                "Sending batch {}/{} with {} recipients",
                index + 1,
                batch_count,
                batch.len()
            );

            let sends = batch.iter().enumerate().map(|(slot, recipient)| {
                let stagger = config.delay * u32::try_from(slot).unwrap_or(u32::MAX);
                self.send_one(recipient, message, &text, stagger, config.delay)
            });
            let outcomes = join_all(sends).await;

            for (recipient, outcome) in batch.iter().zip(outcomes) {
                summary.record(&recipient.telegram_id, outcome);
            }
            summary.batches.push(batch.len());
        }

        tracing::info!(
            "Dispatch finished: {} delivered, {} failed in {} batches",
            summary.success,
            summary.failed,
            summary.batches.len()
        );

        Ok(summary)
    }

    /// Delivers to a single recipient, choosing the photo path iff a photo is attached.
    async fn send_one(
        &self,
        recipient: &Recipient,
        message: &BroadcastMessage,
        text: &str,
        stagger: Duration,
        delay: Duration,
    ) -> DeliveryOutcome {
        tokio::time::sleep(stagger).await;

        let result = match &message.photo_url {
            Some(photo_url) => {
                self.transport
                    .send_photo(&recipient.telegram_id, photo_url, text)
                    .await
            }
            None => self.transport.send_text(&recipient.telegram_id, text).await,
        };

        tokio::time::sleep(delay).await;

        match result {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(e) => {
                tracing::warn!(
                    "Failed to deliver broadcast to {} ({}): {}",
                    recipient.telegram_id,
                    recipient.name,
                    e
                );
                DeliveryOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
