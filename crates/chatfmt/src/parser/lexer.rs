//! Lexer for canonical legacy text.
//!
//! Converts `§`-escaped text into a stream of tokens. Escapes the lexer does
//! not understand are dropped rather than reported.

use crate::code::{LegacyCode, SECTION_SIGN};
use crate::color::Color;
use crate::style::Format;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Switch color, clearing formatting.
    Color(Color),
    /// Add a formatting flag.
    Format(Format),
    /// Clear color and formatting.
    Reset,
}

/// Lexer for canonical legacy text.
///
/// # Examples
///
/// ```
/// use chatfmt::parser::{Lexer, Token};
/// use chatfmt::{Color, NamedColor};
///
/// let tokens: Vec<_> = Lexer::new("§cHi").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::Color(Color::Named(NamedColor::Red)), Token::Text("Hi")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until the next escape or end of input.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c == SECTION_SIGN {
                break;
            }
            self.advance();
        }

        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Consume the six `§<digit>` pairs following `§x`.
    ///
    /// Nothing is consumed unless all six pairs are well formed.
    fn consume_hex(&mut self) -> Option<Color> {
        let mut chars = self.remaining().chars();
        let mut hex = String::from("#");
        let mut consumed = 0;

        for _ in 0..6 {
            let sign = chars.next()?;
            let digit = chars.next()?;
            if sign != SECTION_SIGN || !digit.is_ascii_hexdigit() {
                return None;
            }
            hex.push(digit);
            consumed += sign.len_utf8() + digit.len_utf8();
        }

        let color = Color::from_hex(&hex).ok()?;
        self.pos += consumed;
        Some(color)
    }

    /// Consume one escape. `None` means the escape produced no token.
    fn consume_escape(&mut self) -> Option<Token<'a>> {
        self.advance(); // consume '§'
        let code = self.advance()?;

        match LegacyCode::lookup(code)? {
            LegacyCode::Color(named) => Some(Token::Color(Color::Named(named))),
            LegacyCode::Format(format) => Some(Token::Format(format)),
            LegacyCode::Reset => Some(Token::Reset),
            LegacyCode::Hex => self.consume_hex().map(Token::Color),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.peek()? {
                SECTION_SIGN => {
                    if let Some(token) = self.consume_escape() {
                        return Some(token);
                    }
                }
                _ => return self.consume_text().map(Token::Text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect()
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_color_and_format() {
        assert_eq!(
            lex("§6§lGold"),
            vec![
                Token::Color(Color::Named(NamedColor::Gold)),
                Token::Format(Format::BOLD),
                Token::Text("Gold"),
            ]
        );
    }

    #[test]
    fn lex_uppercase_code() {
        assert_eq!(lex("§C"), vec![Token::Color(Color::Named(NamedColor::Red))]);
    }

    #[test]
    fn lex_reset() {
        assert_eq!(
            lex("a§rb"),
            vec![Token::Text("a"), Token::Reset, Token::Text("b")]
        );
    }

    #[test]
    fn lex_drops_unknown_escape() {
        assert_eq!(lex("a§zb"), vec![Token::Text("a"), Token::Text("b")]);
    }

    #[test]
    fn lex_drops_dangling_escape() {
        assert_eq!(lex("end§"), vec![Token::Text("end")]);
    }

    #[test]
    fn lex_hex_color() {
        assert_eq!(
            lex("§x§f§f§8§8§0§0warm"),
            vec![Token::Color(Color::Rgb(255, 136, 0)), Token::Text("warm")]
        );
    }

    #[test]
    fn lex_truncated_hex_drops_only_the_x() {
        assert_eq!(
            lex("§x§f§fab"),
            vec![
                Token::Color(Color::Named(NamedColor::White)),
                Token::Color(Color::Named(NamedColor::White)),
                Token::Text("ab"),
            ]
        );
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("§a日本語"),
            vec![Token::Color(Color::Named(NamedColor::Green)), Token::Text("日本語")]
        );
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
    }
}
