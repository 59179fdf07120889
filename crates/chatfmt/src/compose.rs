//! Interactive segment composition.
//!
//! A message may carry one region bounded by a pair of delimiters. The text
//! between them becomes a single clickable fragment that runs a
//! caller-supplied command:
//!
//! ```text
//! "Click @&arun@ to continue"
//!  ^^^^^^ ^^^^^ ^^^^^^^^^^^^
//!  prefix label suffix
//! ```
//!
//! Only the first pair counts. Later delimiters are ordinary text.

use crate::conventions::Conventions;
use crate::error::ConventionError;
use crate::fragment::{ClickAction, Fragment};
use crate::parser::FragmentBuilder;
use crate::translate::Translator;

/// A message cut around its interactive region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interactive<'a> {
    /// Text before the opening delimiter.
    pub prefix: &'a str,
    /// Text between the delimiters, shown on the clickable fragment.
    pub label: &'a str,
    /// Text after the closing delimiter.
    pub suffix: &'a str,
}

/// Locate the first delimiter pair in `message`.
///
/// Returns `None` when there is no opening delimiter, no closing delimiter
/// after it, or the delimiter is empty.
///
/// # Examples
///
/// ```
/// use chatfmt::split_interactive;
///
/// let parts = split_interactive("Click @run@ now", "@").unwrap();
/// assert_eq!((parts.prefix, parts.label, parts.suffix), ("Click ", "run", " now"));
///
/// assert!(split_interactive("mail me @ home", "@").is_none());
/// ```
pub fn split_interactive<'a>(message: &'a str, delimiter: &str) -> Option<Interactive<'a>> {
    if delimiter.is_empty() {
        return None;
    }

    let open = message.find(delimiter)?;
    let label_start = open + delimiter.len();
    let close = label_start + message[label_start..].find(delimiter)?;

    Some(Interactive {
        prefix: &message[..open],
        label: &message[label_start..close],
        suffix: &message[close + delimiter.len()..],
    })
}

/// Formats messages, binding a command to their interactive region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composer {
    translator: Translator,
    delimiter: String,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            translator: Translator::default(),
            delimiter: crate::conventions::DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Composer {
    pub fn new(conventions: &Conventions) -> Result<Self, ConventionError> {
        conventions.validate()?;
        Ok(Self {
            translator: Translator::from_conventions(conventions),
            delimiter: conventions.delimiter.clone(),
        })
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Locate the interactive region of `message`, if it has one.
    pub fn split<'a>(&self, message: &'a str) -> Option<Interactive<'a>> {
        split_interactive(message, &self.delimiter)
    }

    /// Translate `message` into fragments, ignoring delimiters.
    pub fn format(&self, message: &str) -> Vec<Fragment> {
        self.translator.to_fragments(message)
    }

    /// Format `message` with its interactive region bound to `command`.
    ///
    /// The output is the prefix fragments, exactly one interactive fragment,
    /// then the suffix fragments. The clickable fragment shows the label text
    /// but runs `command`. A message without a delimiter pair is formatted
    /// as-is with no click action.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatfmt::{ClickAction, Composer, plain_text};
    ///
    /// let fragments = Composer::default().compose("Click @run@ to continue", "/help");
    ///
    /// assert_eq!(fragments.len(), 3);
    /// assert_eq!(fragments[1].text, "run");
    /// assert_eq!(fragments[1].click, Some(ClickAction::RunCommand("/help".into())));
    /// assert_eq!(plain_text(&fragments), "Click run to continue");
    /// ```
    pub fn compose(&self, message: &str, command: &str) -> Vec<Fragment> {
        let Some(parts) = self.split(message) else {
            log::trace!("no interactive region in {message:?}");
            return self.format(message);
        };

        let mut fragments = self.format(parts.prefix);
        fragments.push(self.interactive_fragment(parts.label, command));
        if !parts.suffix.is_empty() {
            fragments.extend(self.format(parts.suffix));
        }

        log::trace!(
            "composed {} fragments, label {:?} runs {:?}",
            fragments.len(),
            parts.label,
            command
        );
        fragments
    }

    /// One fragment showing `label`, bound to `command`.
    ///
    /// A label with several style runs becomes an empty parent whose
    /// children carry the runs.
    fn interactive_fragment(&self, label: &str, command: &str) -> Fragment {
        let action = ClickAction::RunCommand(command.to_string());
        // No URL linking inside the label: it already has an action.
        let mut runs = FragmentBuilder::new().build(&self.translator.translate(label));

        if runs.len() == 1 {
            if let Some(only) = runs.pop() {
                return only.with_click(action);
            }
        }
        Fragment::new("").with_children(runs).with_click(action)
    }
}
