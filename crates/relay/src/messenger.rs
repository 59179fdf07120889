//! Fan-out helpers.
//!
//! Every helper formats each message once, then hands the same fragments to
//! each target in turn. Targets are independent: a failure is logged and
//! recorded in the [`DeliveryReport`], and delivery moves on.

use chatfmt::{Composer, ConventionError, Conventions, Fragment, LegacyText};

use crate::recipient::{Broadcaster, Recipient};
use crate::report::{BROADCAST_TARGET, DeliveryReport};

/// How message text is read before delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Markup {
    /// Translate alternate markers (`&c`) into styles.
    #[default]
    Translate,
    /// Send as written; only canonical `§` escapes are styled.
    Verbatim,
}

/// Formats messages and delivers them to recipients.
///
/// # Examples
///
/// ```
/// use chatfmt::Fragment;
/// use relay::{DeliveryError, Messenger, Recipient};
///
/// struct Console;
///
/// impl Recipient for Console {
///     fn name(&self) -> &str {
///         "console"
///     }
///
///     fn display(&self, fragments: &[Fragment]) -> Result<(), DeliveryError> {
///         println!("{}", chatfmt::plain_text(fragments));
///         Ok(())
///     }
/// }
///
/// let report = Messenger::default().send(&Console, "&aWelcome!");
/// assert_eq!(report.delivered, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Messenger {
    composer: Composer,
    markup: Markup,
}

impl Messenger {
    pub fn new(conventions: &Conventions) -> Result<Self, ConventionError> {
        Ok(Self {
            composer: Composer::new(conventions)?,
            markup: Markup::default(),
        })
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// A copy of this messenger that sends text as written.
    pub fn verbatim(&self) -> Self {
        self.clone().with_markup(Markup::Verbatim)
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Format one message according to this messenger's markup setting.
    pub fn format(&self, message: &str) -> Vec<Fragment> {
        match self.markup {
            Markup::Translate => self.composer.format(message),
            Markup::Verbatim => self
                .composer
                .translator()
                .expand(&LegacyText::new(message)),
        }
    }

    /// Send one message to one recipient.
    pub fn send<R: Recipient + ?Sized>(&self, recipient: &R, message: &str) -> DeliveryReport {
        let fragments = self.format(message);
        let mut report = DeliveryReport::new();
        report.record(recipient.name(), 0, recipient.display(&fragments));
        report
    }

    /// Send a batch of messages, in order, to one recipient.
    pub fn send_batch<R, S>(&self, recipient: &R, messages: &[S]) -> DeliveryReport
    where
        R: Recipient + ?Sized,
        S: AsRef<str>,
    {
        let mut report = DeliveryReport::new();
        for (index, message) in messages.iter().enumerate() {
            let fragments = self.format(message.as_ref());
            report.record(recipient.name(), index, recipient.display(&fragments));
        }
        report
    }

    /// Send one message to each recipient in a list.
    pub fn send_to_list<R: Recipient>(&self, recipients: &[R], message: &str) -> DeliveryReport {
        self.send_batch_to_list(recipients, &[message])
    }

    /// Send every message in a batch to each recipient in a list.
    ///
    /// Produces `messages.len() * recipients.len()` deliveries.
    pub fn send_batch_to_list<R, S>(&self, recipients: &[R], messages: &[S]) -> DeliveryReport
    where
        R: Recipient,
        S: AsRef<str>,
    {
        let mut report = DeliveryReport::new();
        for (index, message) in messages.iter().enumerate() {
            let fragments = self.format(message.as_ref());
            for recipient in recipients {
                report.record(recipient.name(), index, recipient.display(&fragments));
            }
        }

        log::debug!(
            "sent {} messages to {} recipients: {} delivered, {} failed",
            messages.len(),
            recipients.len(),
            report.delivered,
            report.failures.len()
        );
        report
    }

    /// Broadcast one message.
    pub fn broadcast<B: Broadcaster + ?Sized>(&self, broadcaster: &B, message: &str) -> DeliveryReport {
        self.broadcast_batch(broadcaster, &[message])
    }

    /// Broadcast a batch of messages, in order.
    pub fn broadcast_batch<B, S>(&self, broadcaster: &B, messages: &[S]) -> DeliveryReport
    where
        B: Broadcaster + ?Sized,
        S: AsRef<str>,
    {
        let mut report = DeliveryReport::new();
        for (index, message) in messages.iter().enumerate() {
            let fragments = self.format(message.as_ref());
            report.record(BROADCAST_TARGET, index, broadcaster.broadcast(&fragments));
        }
        report
    }

    /// Send a message whose delimited region runs `command` when clicked.
    ///
    /// Interactive messages are always translated.
    pub fn send_interactive<R: Recipient + ?Sized>(
        &self,
        recipient: &R,
        message: &str,
        command: &str,
    ) -> DeliveryReport {
        let fragments = self.composer.compose(message, command);
        let mut report = DeliveryReport::new();
        report.record(recipient.name(), 0, recipient.display(&fragments));
        report
    }

    /// Broadcast a message whose delimited region runs `command` when clicked.
    pub fn broadcast_interactive<B: Broadcaster + ?Sized>(
        &self,
        broadcaster: &B,
        message: &str,
        command: &str,
    ) -> DeliveryReport {
        let fragments = self.composer.compose(message, command);
        let mut report = DeliveryReport::new();
        report.record(BROADCAST_TARGET, 0, broadcaster.broadcast(&fragments));
        report
    }
}
