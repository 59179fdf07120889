//! Legacy chat markup translation and clickable fragment composition.
//!
//! This crate turns author-friendly chat text like `&6Gold &lbold` into an
//! ordered list of styled [`Fragment`]s, and can bind a command to one
//! delimited region of a message.
//!
//! # Overview
//!
//! Styling uses a marker character followed by one code character:
//!
//! - `&0`-`&9`, `&a`-`&f` - Named colors (a color clears formatting)
//! - `&k` `&l` `&m` `&n` `&o` - Obfuscated, bold, strikethrough, underlined, italic
//! - `&r` - Reset color and formatting
//! - `&x&R&R&G&G&B&B` - Hex color
//!
//! [`translate`] rewrites the marker into the canonical `§` escape, producing
//! a [`LegacyText`]; [`LegacyText::to_fragments`] expands that into fragments.
//! Unrecognised codes stay as literal text.
//!
//! # Interactive Region
//!
//! The [`Composer`] treats the text between the first pair of delimiters
//! (`@` by default) as a clickable label:
//!
//! ```text
//! Click @here@ to continue
//! ```
//!
//! yields `"Click "`, a fragment showing `here` that runs the caller's
//! command, then `" to continue"`.
//!
//! # Usage
//!
//! ```
//! use chatfmt::{Composer, NamedColor, Style, strip, translate};
//!
//! let text = translate("&cWarning:&r read this", '&');
//! assert_eq!(text.as_str(), "§cWarning:§r read this");
//! assert_eq!(strip(text.as_str()), "Warning: read this");
//!
//! let fragments = text.to_fragments();
//! assert_eq!(fragments[0].style, Style::colored(NamedColor::Red));
//!
//! let fragments = Composer::default().compose("Type @&ahere@", "/spawn");
//! assert!(fragments[1].is_interactive());
//! ```

pub mod code;
pub mod color;
pub mod compose;
pub mod conventions;
pub mod error;
pub mod fragment;
pub mod parser;
pub mod style;
pub mod translate;

// Re-export main types at crate root
pub use code::{LegacyCode, SECTION_SIGN};
pub use color::{Color, NamedColor};
pub use compose::{Composer, Interactive, split_interactive};
pub use conventions::Conventions;
pub use error::{ColorParseError, ConventionError};
pub use fragment::{ClickAction, Fragment, click_actions, plain_text, to_legacy};
pub use parser::{FragmentBuilder, to_fragments};
pub use style::{Format, Style};
pub use translate::{LegacyText, Translator, strip, strip_markup, translate};
