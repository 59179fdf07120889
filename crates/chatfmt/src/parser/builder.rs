//! Fragment builder.
//!
//! Folds the lexer's tokens into an ordered list of styled fragments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::{ClickAction, Fragment};
use crate::style::Style;
use crate::translate::LegacyText;

use super::lexer::{Lexer, Token};

/// A bare word that looks like a web address.
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(https?)://)?([-\w_.]{2,}\.[a-z]{2,4})(/\S*)?$").expect("URL pattern is valid")
});

/// Expand canonical legacy text into fragments with default options.
///
/// # Examples
///
/// ```
/// use chatfmt::{LegacyText, parser::to_fragments};
///
/// let fragments = to_fragments(&LegacyText::new("§cRed §lBold"));
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(fragments[0].text, "Red ");
/// assert_eq!(fragments[1].text, "Bold");
/// ```
pub fn to_fragments(text: &LegacyText) -> Vec<Fragment> {
    FragmentBuilder::new().build(text)
}

/// Options for turning legacy text into fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FragmentBuilder {
    link_urls: bool,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give words that look like web addresses an `OpenUrl` action.
    pub fn link_urls(mut self, link_urls: bool) -> Self {
        self.link_urls = link_urls;
        self
    }

    /// Expand `text` into fragments.
    ///
    /// Empty input, or input made only of escapes, yields no fragments.
    pub fn build(&self, text: &LegacyText) -> Vec<Fragment> {
        let mut state = BuildState::new(self.link_urls);
        for token in Lexer::new(text.as_str()) {
            state.process_token(token);
        }
        state.finish()
    }
}

/// The builder state.
struct BuildState {
    link_urls: bool,
    /// Style applied to the text being buffered.
    style: Style,
    /// Text that has not been emitted yet.
    buffer: String,
    /// Emitted fragments.
    fragments: Vec<Fragment>,
}

impl BuildState {
    fn new(link_urls: bool) -> Self {
        Self {
            link_urls,
            style: Style::default(),
            buffer: String::new(),
            fragments: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) if self.link_urls => self.push_linked(text),
            Token::Text(text) => self.buffer.push_str(text),
            Token::Color(color) => {
                self.flush();
                self.style = Style::colored(color);
            }
            Token::Format(format) => {
                self.flush();
                self.style.format |= format;
            }
            Token::Reset => {
                self.flush();
                self.style = Style::default();
            }
        }
    }

    /// Buffer `text`, splitting web addresses into their own fragments.
    fn push_linked(&mut self, text: &str) {
        for piece in text.split_inclusive(' ') {
            let word = piece.trim_end_matches(' ');
            if word.is_empty() || !URL.is_match(word) {
                self.buffer.push_str(piece);
                continue;
            }

            self.flush();
            let target = if word.starts_with("http") {
                word.to_string()
            } else {
                format!("http://{word}")
            };
            self.fragments
                .push(Fragment::styled(word, self.style).with_click(ClickAction::OpenUrl(target)));
            self.buffer.push_str(&piece[word.len()..]);
        }
    }

    /// Emit buffered text, merging into the previous fragment when nothing
    /// distinguishes them.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);

        if let Some(last) = self.fragments.last_mut() {
            if last.style == self.style && last.click.is_none() && last.children.is_empty() {
                last.text.push_str(&text);
                return;
            }
        }
        self.fragments.push(Fragment::styled(text, self.style));
    }

    fn finish(mut self) -> Vec<Fragment> {
        self.flush();
        self.fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, NamedColor};
    use crate::style::Format;

    fn build(text: &str) -> Vec<Fragment> {
        FragmentBuilder::new().build(&LegacyText::new(text))
    }

    #[test]
    fn build_plain_text() {
        let fragments = build("Hello World");
        assert_eq!(fragments, vec![Fragment::new("Hello World")]);
    }

    #[test]
    fn build_empty_input() {
        assert!(build("").is_empty());
    }

    #[test]
    fn build_only_escapes() {
        assert!(build("§c§l").is_empty());
    }

    #[test]
    fn color_clears_format() {
        let fragments = build("§lbold§cred");
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].style, Style::new().with_format(Format::BOLD));
        assert_eq!(fragments[1].style, Style::colored(NamedColor::Red));
    }

    #[test]
    fn format_accumulates() {
        let fragments = build("§6§l§ogold");
        assert_eq!(
            fragments[0].style,
            Style::colored(NamedColor::Gold).with_format(Format::BOLD | Format::ITALIC)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let fragments = build("§c§lA§rB");
        assert_eq!(fragments[1].text, "B");
        assert!(fragments[1].style.is_empty());
    }

    #[test]
    fn identical_styles_merge() {
        let fragments = build("§cA§cB§zC");
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "ABC");
        assert_eq!(fragments[0].style.color, Some(Color::Named(NamedColor::Red)));
    }

    #[test]
    fn links_are_off_by_default() {
        let fragments = build("see example.com now");
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].click.is_none());
    }

    #[test]
    fn links_split_urls() {
        let fragments = FragmentBuilder::new()
            .link_urls(true)
            .build(&LegacyText::new("§asee example.com now"));

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].text, "see ");
        assert_eq!(fragments[1].text, "example.com");
        assert_eq!(
            fragments[1].click,
            Some(ClickAction::OpenUrl("http://example.com".to_string()))
        );
        assert_eq!(fragments[1].style, Style::colored(NamedColor::Green));
        assert_eq!(fragments[2].text, " now");
    }

    #[test]
    fn links_keep_scheme() {
        let fragments = FragmentBuilder::new()
            .link_urls(true)
            .build(&LegacyText::new("https://docs.rs/log"));
        assert_eq!(
            fragments[0].click,
            Some(ClickAction::OpenUrl("https://docs.rs/log".to_string()))
        );
    }
}
