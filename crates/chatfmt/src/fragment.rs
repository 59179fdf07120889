//! Styled fragments, the unit handed to recipients.

use std::fmt;

use crate::code::SECTION_SIGN;
use crate::color::Color;
use crate::style::Style;

/// What happens when a reader clicks a fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Run a command on the reader's behalf.
    RunCommand(String),
    /// Open a web address.
    OpenUrl(String),
}

impl ClickAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ClickAction::RunCommand(_) => "run_command",
            ClickAction::OpenUrl(_) => "open_url",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ClickAction::RunCommand(value) | ClickAction::OpenUrl(value) => value,
        }
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

/// A run of text sharing one style and at most one click action.
///
/// Children are displayed right after the fragment's own text and inherit
/// its click action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: Style,
    pub click: Option<ClickAction>,
    pub children: Vec<Fragment>,
}

impl Fragment {
    /// An unstyled fragment.
    pub fn new(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            click: None,
            children: Vec::new(),
        }
    }

    pub fn with_click(mut self, action: ClickAction) -> Self {
        self.click = Some(action);
        self
    }

    pub fn with_children(mut self, children: Vec<Fragment>) -> Self {
        self.children = children;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.click.is_some()
    }

    /// Displayed text of this fragment and its children.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.write_plain(out);
        }
    }

    /// Re-encode this fragment as canonical legacy text.
    ///
    /// Click actions have no legacy encoding and are dropped.
    pub fn to_legacy(&self) -> String {
        let mut out = String::new();
        self.write_legacy(&mut out, &mut Style::default());
        out
    }

    fn write_legacy(&self, out: &mut String, current: &mut Style) {
        if !self.text.is_empty() {
            write_style(out, self.style, current);
            out.push_str(&self.text);
        }
        for child in &self.children {
            child.write_legacy(out, current);
        }
    }
}

/// Emit the escapes that move from `current` to `style`.
fn write_style(out: &mut String, style: Style, current: &mut Style) {
    if style == *current {
        return;
    }

    match style.color {
        Some(color) => push_color(out, color),
        None if !current.is_empty() => push_code(out, 'r'),
        None => {}
    }
    for code in style.format.codes() {
        push_code(out, code);
    }
    *current = style;
}

fn push_code(out: &mut String, code: char) {
    out.push(SECTION_SIGN);
    out.push(code);
}

fn push_color(out: &mut String, color: Color) {
    match color {
        Color::Named(named) => push_code(out, named.code()),
        Color::Rgb(r, g, b) => {
            push_code(out, 'x');
            for digit in format!("{r:02x}{g:02x}{b:02x}").chars() {
                push_code(out, digit);
            }
        }
    }
}

/// Displayed text of a fragment sequence.
pub fn plain_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::plain_text).collect()
}

/// Re-encode a fragment sequence as canonical legacy text.
pub fn to_legacy(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    let mut current = Style::default();
    for fragment in fragments {
        fragment.write_legacy(&mut out, &mut current);
    }
    out
}

/// Every click action set anywhere in the sequence, in display order.
pub fn click_actions(fragments: &[Fragment]) -> Vec<&ClickAction> {
    fn collect<'a>(fragment: &'a Fragment, out: &mut Vec<&'a ClickAction>) {
        if let Some(action) = &fragment.click {
            out.push(action);
        }
        for child in &fragment.children {
            collect(child, out);
        }
    }

    let mut out = Vec::new();
    for fragment in fragments {
        collect(fragment, &mut out);
    }
    out
}
