//! Delivery capabilities consumed by the fan-out helpers.
//!
//! Both are passed in explicitly; nothing here reaches for a global server.

use std::sync::Arc;

use chatfmt::Fragment;

use crate::error::DeliveryError;

/// A single endpoint that can display formatted fragments.
pub trait Recipient {
    /// Name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Display `fragments`, in order, to this recipient.
    fn display(&self, fragments: &[Fragment]) -> Result<(), DeliveryError>;
}

/// Delivers fragments to every currently connected recipient.
pub trait Broadcaster {
    fn broadcast(&self, fragments: &[Fragment]) -> Result<(), DeliveryError>;
}

impl<T: Recipient + ?Sized> Recipient for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn display(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).display(fragments)
    }
}

impl<T: Recipient + ?Sized> Recipient for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn display(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).display(fragments)
    }
}

impl<T: Recipient + ?Sized> Recipient for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn display(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).display(fragments)
    }
}

impl<T: Broadcaster + ?Sized> Broadcaster for &T {
    fn broadcast(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).broadcast(fragments)
    }
}

impl<T: Broadcaster + ?Sized> Broadcaster for Box<T> {
    fn broadcast(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).broadcast(fragments)
    }
}

impl<T: Broadcaster + ?Sized> Broadcaster for Arc<T> {
    fn broadcast(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
        (**self).broadcast(fragments)
    }
}
