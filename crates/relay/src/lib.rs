//! Fan-out delivery of formatted chat messages.
//!
//! [`Messenger`] formats text with [`chatfmt`] and hands the fragments to one
//! [`Recipient`], a list of them, or a [`Broadcaster`]. Every helper
//! translates `&` markup unless asked for [`Markup::Verbatim`], and returns a
//! [`DeliveryReport`] instead of stopping at the first failed recipient.
//!
//! ```
//! use chatfmt::Fragment;
//! use relay::{Broadcaster, DeliveryError, Messenger};
//!
//! struct Everyone;
//!
//! impl Broadcaster for Everyone {
//!     fn broadcast(&self, _fragments: &[Fragment]) -> Result<(), DeliveryError> {
//!         Ok(())
//!     }
//! }
//!
//! let report = Messenger::default().broadcast_batch(&Everyone, &["&eServer restarting", "&7in 5 minutes"]);
//! assert_eq!(report.delivered, 2);
//! ```

pub mod error;
pub mod messenger;
pub mod recipient;
pub mod report;

pub use error::DeliveryError;
pub use messenger::{Markup, Messenger};
pub use recipient::{Broadcaster, Recipient};
pub use report::{BROADCAST_TARGET, DeliveryFailure, DeliveryReport};
