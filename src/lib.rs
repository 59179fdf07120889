//! Chat message formatting and delivery.
//!
//! Re-exports [`chatfmt`] for turning `&`-coded text into styled, optionally
//! clickable fragments, and [`relay`] for delivering them to one recipient,
//! a list, or everyone.
//!
//! ```
//! use chatline::{Composer, plain_text};
//!
//! let fragments = Composer::default().compose("&eClick @here@ to join", "/join");
//! assert_eq!(plain_text(&fragments), "Click here to join");
//! ```

pub use chatfmt::*;
pub use relay::{
    BROADCAST_TARGET, Broadcaster, DeliveryError, DeliveryFailure, DeliveryReport, Markup,
    Messenger, Recipient,
};

// Re-export the log crate so users can use chatline::log::info!, etc.
pub use log;
