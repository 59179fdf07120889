//! Color types for legacy chat text.
//!
//! The sixteen named colors map one-to-one onto the code characters `0-9`
//! and `a-f`. Anything else is an RGB color carried by a hex escape.

use std::fmt;

use crate::error::ColorParseError;

/// One of the sixteen colors addressable by a single code character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors, ordered by code character.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The (lowercase) code character selecting this color.
    pub fn code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    /// Snake-case name, e.g. `dark_aqua`.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Look a color up by its snake-case name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// A color specification in chat text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the sixteen code-addressable colors.
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a name (`gold`) or a hex value (`#ffaa00`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chatfmt::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("gold").unwrap(), Color::Named(NamedColor::Gold));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        NamedColor::from_name(input)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a `#RRGGBB` hex color.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidHex(input.to_string()))?;

        let invalid = || ColorParseError::InvalidHex(input.to_string());
        let nibbles: Vec<u8> = digits
            .chars()
            .map(|c| Self::parse_hex_digit(c).ok_or_else(invalid))
            .collect::<Result<_, _>>()?;

        match nibbles.as_slice() {
            [r1, r2, g1, g2, b1, b2] => Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        }
    }

    fn parse_hex_digit(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }

    /// Returns the named color, if this is one.
    pub fn as_named(&self) -> Option<NamedColor> {
        match self {
            Color::Named(named) => Some(*named),
            Color::Rgb(..) => None,
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
