//! Alternate marker translation and stripping.
//!
//! Authors write `&c` because `§` is awkward to type. Translation rewrites
//! every marker that is directly followed by a code character into the
//! canonical `§` escape; anything else passes through untouched.

use std::fmt;

use crate::code::{SECTION_SIGN, is_code};
use crate::conventions::{Conventions, DEFAULT_MARKER};
use crate::fragment::Fragment;
use crate::parser::FragmentBuilder;

/// Text whose styling uses the canonical `§` escape.
///
/// Produced by [`translate`], or wrapped directly with [`LegacyText::new`]
/// when the source already uses the canonical escape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LegacyText(String);

impl LegacyText {
    /// Wrap text that already uses the canonical escape.
    pub fn new(canonical: impl Into<String>) -> Self {
        Self(canonical.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text a reader would see, with every escape removed.
    pub fn plain(&self) -> String {
        strip(&self.0)
    }

    /// Expand into styled fragments.
    pub fn to_fragments(&self) -> Vec<Fragment> {
        FragmentBuilder::new().build(self)
    }
}

impl AsRef<str> for LegacyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegacyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace each `marker` + code pair with the canonical escape.
///
/// The code character is lowercased. A marker followed by anything other than
/// a code character, or at the very end of the text, stays literal.
///
/// # Examples
///
/// ```
/// use chatfmt::translate;
///
/// assert_eq!(translate("&cRed &zkeep &", '&').as_str(), "§cRed &zkeep &");
/// assert_eq!(translate("&L&6gold", '&').as_str(), "§l§6gold");
/// ```
pub fn translate(text: &str, marker: char) -> LegacyText {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == marker {
            if let Some(code) = chars.next_if(|&next| is_code(next)) {
                output.push(SECTION_SIGN);
                output.push(code.to_ascii_lowercase());
                continue;
            }
        }
        output.push(c);
    }

    LegacyText(output)
}

/// Remove every canonical escape pair, leaving all other characters.
///
/// # Examples
///
/// ```
/// use chatfmt::strip;
///
/// assert_eq!(strip("§cHello §lWorld"), "Hello World");
/// assert_eq!(strip("§zodd §"), "§zodd §");
/// ```
pub fn strip(text: &str) -> String {
    strip_pairs(text, SECTION_SIGN)
}

/// Remove every `marker` + code pair from untranslated text.
///
/// For text without the canonical escape this equals
/// `strip(translate(text, marker).as_str())`.
pub fn strip_markup(text: &str, marker: char) -> String {
    strip_pairs(text, marker)
}

fn strip_pairs(text: &str, marker: char) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == marker && chars.next_if(|&next| is_code(next)).is_some() {
            continue;
        }
        output.push(c);
    }

    output
}

/// Translation bound to a marker character and fragment options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translator {
    marker: char,
    builder: FragmentBuilder,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Translator {
    pub fn new(marker: char) -> Self {
        Self {
            marker,
            builder: FragmentBuilder::new(),
        }
    }

    pub fn from_conventions(conventions: &Conventions) -> Self {
        Self {
            marker: conventions.marker,
            builder: FragmentBuilder::new().link_urls(conventions.link_urls),
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn translate(&self, text: &str) -> LegacyText {
        translate(text, self.marker)
    }

    pub fn strip_markup(&self, text: &str) -> String {
        strip_markup(text, self.marker)
    }

    /// Translate `text` and expand it into fragments.
    pub fn to_fragments(&self, text: &str) -> Vec<Fragment> {
        let translated = self.translate(text);
        log::trace!("translated {:?} -> {:?}", text, translated.as_str());
        self.expand(&translated)
    }

    /// Expand already-canonical text with this translator's fragment options.
    pub fn expand(&self, text: &LegacyText) -> Vec<Fragment> {
        self.builder.build(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_plain_text_is_identity() {
        assert_eq!(translate("no markers here", '&').as_str(), "no markers here");
    }

    #[test]
    fn translate_lowercases_codes() {
        assert_eq!(translate("&AGreen&X", '&').as_str(), "§aGreen§x");
    }

    #[test]
    fn translate_double_marker() {
        // The first marker is followed by a marker, not a code.
        assert_eq!(translate("&&c", '&').as_str(), "&§c");
    }

    #[test]
    fn translate_trailing_marker() {
        assert_eq!(translate("end&", '&').as_str(), "end&");
    }

    #[test]
    fn translate_custom_marker() {
        assert_eq!(translate("~cred &cnot", '~').as_str(), "§cred &cnot");
    }

    #[test]
    fn translate_empty() {
        assert!(translate("", '&').is_empty());
    }

    #[test]
    fn strip_leaves_unknown_pairs() {
        assert_eq!(strip("§q§cA§"), "§qA§");
    }

    #[test]
    fn strip_hex_sequence() {
        assert_eq!(strip("§x§f§f§0§0§0§0hex"), "hex");
    }

    #[test]
    fn strip_markup_matches_strip_of_translation() {
        let samples = ["&cHi &lthere", "&&a&", "plain", "&z&R&k", "日本&6語"];
        for sample in samples {
            assert_eq!(
                strip_markup(sample, '&'),
                strip(translate(sample, '&').as_str()),
                "sample {sample:?}"
            );
        }
    }

    #[test]
    fn translator_uses_its_marker() {
        let translator = Translator::new('$');
        assert_eq!(translator.translate("$aok").as_str(), "§aok");
        assert_eq!(translator.strip_markup("$aok &a"), "ok &a");
    }
}
