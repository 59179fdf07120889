//! Error types for message delivery.

use thiserror::Error;

/// Errors a recipient or broadcaster may report for one delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The recipient is no longer connected.
    #[error("recipient {0} is disconnected")]
    Disconnected(String),

    /// The recipient refused the message.
    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("delivery I/O error: {0}")]
    Io(#[from] std::io::Error),
}
