//! Parser for canonical legacy text.
//!
//! This module contains the lexer and the fragment builder.

mod builder;
mod lexer;

pub use builder::{FragmentBuilder, to_fragments};
pub use lexer::{Lexer, Token};
