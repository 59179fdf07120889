//! Error types for chat formatting.
//!
//! The text transforms themselves never fail; these errors only come from
//! building colors by hand or from rejected [`Conventions`](crate::Conventions).

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Errors raised when validating formatting conventions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConventionError {
    /// The interactive delimiter must contain at least one character.
    #[error("interactive delimiter must not be empty")]
    EmptyDelimiter,

    /// The delimiter cannot contain the style marker, or every marker
    /// occurrence would be ambiguous.
    #[error("interactive delimiter {delimiter:?} contains the style marker {marker:?}")]
    DelimiterContainsMarker { delimiter: String, marker: char },
}
