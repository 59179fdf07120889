//! Outcome of a fan-out call.

use crate::error::DeliveryError;

/// Target name recorded for failed broadcasts.
pub const BROADCAST_TARGET: &str = "<broadcast>";

/// One delivery that did not go through.
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Recipient name, or [`BROADCAST_TARGET`].
    pub recipient: String,
    /// Index of the message within the batch.
    pub message: usize,
    pub error: DeliveryError,
}

/// Counts of what a fan-out call delivered.
///
/// A failed delivery never stops the others; it is recorded here instead.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    /// Deliveries that succeeded.
    pub delivered: usize,
    /// Deliveries that failed, in the order they were attempted.
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total deliveries attempted.
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    /// Returns true if every delivery succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record the outcome of one delivery.
    pub(crate) fn record(&mut self, recipient: &str, message: usize, result: Result<(), DeliveryError>) {
        match result {
            Ok(()) => self.delivered += 1,
            Err(error) => {
                log::warn!("failed to deliver message {message} to {recipient}: {error}");
                self.failures.push(DeliveryFailure {
                    recipient: recipient.to_string(),
                    message,
                    error,
                });
            }
        }
    }
}
