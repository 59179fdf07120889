//! Style types for legacy chat text.
//!
//! A Style combines an optional color with a set of formatting flags.

use std::fmt;

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text formatting flags toggled by the `k`-`o` codes.
    ///
    /// # Example
    ///
    /// ```
    /// use chatfmt::Format;
    ///
    /// let mut format = Format::empty();
    /// format |= Format::BOLD;
    /// format |= Format::from_code('o').unwrap();
    ///
    /// assert!(format.contains(Format::BOLD | Format::ITALIC));
    /// assert!(!format.contains(Format::UNDERLINED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Format: u8 {
        /// Randomly cycling glyphs (`k`)
        const OBFUSCATED    = 0b0000_0001;
        /// Bold (`l`)
        const BOLD          = 0b0000_0010;
        /// Strikethrough (`m`)
        const STRIKETHROUGH = 0b0000_0100;
        /// Underlined (`n`)
        const UNDERLINED    = 0b0000_1000;
        /// Italic (`o`)
        const ITALIC        = 0b0001_0000;
    }
}

impl Format {
    /// The single flag selected by a format code character.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(Format::OBFUSCATED),
            'l' => Some(Format::BOLD),
            'm' => Some(Format::STRIKETHROUGH),
            'n' => Some(Format::UNDERLINED),
            'o' => Some(Format::ITALIC),
            _ => None,
        }
    }

    /// Code characters for every flag that is set, in code order.
    pub fn codes(self) -> impl Iterator<Item = char> {
        [
            (Format::OBFUSCATED, 'k'),
            (Format::BOLD, 'l'),
            (Format::STRIKETHROUGH, 'm'),
            (Format::UNDERLINED, 'n'),
            (Format::ITALIC, 'o'),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// Complete style of a fragment: color plus formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text color. `None` leaves the receiving client's default.
    pub color: Option<Color>,
    /// Formatting flags.
    pub format: Format,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with only a color set.
    ///
    /// Selecting a color clears any formatting, matching legacy semantics.
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            format: Format::empty(),
        }
    }

    /// Returns a copy with `format` added.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format |= format;
        self
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.format.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("plain");
        }

        let mut words: Vec<String> = Vec::new();
        if let Some(color) = &self.color {
            words.push(color.to_string());
        }
        for (name, _) in self.format.iter_names() {
            words.push(name.to_lowercase());
        }
        f.write_str(&words.join(" "))
    }
}
