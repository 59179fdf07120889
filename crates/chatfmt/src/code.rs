//! The legacy style code table.
//!
//! A style escape is the section sign followed by one code character:
//!
//! ```text
//! §0 .. §9, §a .. §f   named colors
//! §k §l §m §n §o       obfuscated, bold, strikethrough, underlined, italic
//! §r                   reset
//! §x                   start of a §x§R§R§G§G§B§B hex color
//! ```

use phf::phf_map;

use crate::color::NamedColor;
use crate::style::Format;

/// The canonical style escape character.
pub const SECTION_SIGN: char = '§';

/// What a single code character does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyCode {
    /// Switch to a named color, clearing formatting.
    Color(NamedColor),
    /// Add a formatting flag.
    Format(Format),
    /// Clear color and formatting.
    Reset,
    /// Introduces a six-digit hex color.
    Hex,
}

static CODES: phf::Map<char, LegacyCode> = phf_map! {
    '0' => LegacyCode::Color(NamedColor::Black),
    '1' => LegacyCode::Color(NamedColor::DarkBlue),
    '2' => LegacyCode::Color(NamedColor::DarkGreen),
    '3' => LegacyCode::Color(NamedColor::DarkAqua),
    '4' => LegacyCode::Color(NamedColor::DarkRed),
    '5' => LegacyCode::Color(NamedColor::DarkPurple),
    '6' => LegacyCode::Color(NamedColor::Gold),
    '7' => LegacyCode::Color(NamedColor::Gray),
    '8' => LegacyCode::Color(NamedColor::DarkGray),
    '9' => LegacyCode::Color(NamedColor::Blue),
    'a' => LegacyCode::Color(NamedColor::Green),
    'b' => LegacyCode::Color(NamedColor::Aqua),
    'c' => LegacyCode::Color(NamedColor::Red),
    'd' => LegacyCode::Color(NamedColor::LightPurple),
    'e' => LegacyCode::Color(NamedColor::Yellow),
    'f' => LegacyCode::Color(NamedColor::White),
    'k' => LegacyCode::Format(Format::OBFUSCATED),
    'l' => LegacyCode::Format(Format::BOLD),
    'm' => LegacyCode::Format(Format::STRIKETHROUGH),
    'n' => LegacyCode::Format(Format::UNDERLINED),
    'o' => LegacyCode::Format(Format::ITALIC),
    'r' => LegacyCode::Reset,
    'x' => LegacyCode::Hex,
};

impl LegacyCode {
    /// Look up a code character, ignoring ASCII case.
    pub fn lookup(code: char) -> Option<Self> {
        CODES.get(&code.to_ascii_lowercase()).copied()
    }
}

/// Returns true if `code` is a recognised code character (either case).
pub fn is_code(code: char) -> bool {
    LegacyCode::lookup(code).is_some()
}
