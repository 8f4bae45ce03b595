//! Error types for the board engine
//!
//! The engine has exactly one failing operation: decoding coordinate notation.
//! Structural move rejections are ordinary outcomes ([`crate::MoveOutcome`]),
//! and an undo on an empty history is a plain `false`.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors produced while turning notation such as `"E4"` into grid coordinates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after trimming whitespace
    #[error("Empty coordinate")]
    Empty,

    /// The first character is not an ASCII letter
    #[error("Invalid file character '{0}' (expected a letter)")]
    BadFile(char),

    /// A file letter with no rank number after it
    #[error("Missing rank number after file '{0}'")]
    MissingRank(char),

    /// The rank part is not a number
    #[error("Invalid rank number: {0}")]
    BadRank(#[from] ParseIntError),

    /// Well-formed notation that lands outside the grid
    #[error("Coordinate {notation} is outside the {size}x{size} board")]
    OutOfBounds { notation: String, size: usize },

    /// Unrecognized variant name or menu number
    #[error("Unknown game variant: {0}")]
    UnknownVariant(String),
}

/// Result type alias for notation parsing
pub type ParseResult<T> = Result<T, ParseError>;
