//! Coordinate notation <-> internal grid index
//!
//! Notation is one file letter followed by a rank number, e.g. `"E4"` or
//! `"c11"`. Letters are case-insensitive; surrounding whitespace is ignored.
//!
//! | Variant   | column                 | row          |
//! |-----------|------------------------|--------------|
//! | Chess     | `letter - 'a'`         | `8 - number` |
//! | Checkers  | `letter - 'a'`         | `8 - number` |
//! | Hex-chess | `letter - 'a' + 1`     | `11 - number`|
//!
//! The hex file offset of 1 does not match the layout offset of 2 used when
//! placing the starting pieces; see [`crate::constants`] for the resulting
//! board/notation picture.

use crate::constants::HEX_NOTATION_COLUMN_OFFSET;
use crate::error::{ParseError, ParseResult};
use crate::types::{Square, Variant};

/// Stateless per-variant notation translator
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Internal column addressed by file `a`
    fn column_offset(variant: Variant) -> usize {
        match variant {
            Variant::Chess | Variant::Checkers => 0,
            Variant::HexChess => HEX_NOTATION_COLUMN_OFFSET,
        }
    }

    /// Decode `notation` into a square of `variant`'s grid
    ///
    /// # Errors
    ///
    /// - [`ParseError::Empty`] for blank input
    /// - [`ParseError::BadFile`] when the first character is not a letter
    /// - [`ParseError::MissingRank`] / [`ParseError::BadRank`] for a missing
    ///   or non-numeric rank
    /// - [`ParseError::OutOfBounds`] when the result is off the grid
    pub fn parse(variant: Variant, notation: &str) -> ParseResult<Square> {
        let notation = notation.trim();
        let mut chars = notation.chars();
        let file = chars.next().ok_or(ParseError::Empty)?;
        if !file.is_ascii_alphabetic() {
            return Err(ParseError::BadFile(file));
        }

        let rank_text = chars.as_str();
        if rank_text.is_empty() {
            return Err(ParseError::MissingRank(file));
        }
        let rank: usize = rank_text.parse()?;

        let size = variant.board_size();
        let out_of_bounds = || ParseError::OutOfBounds {
            notation: notation.to_string(),
            size,
        };

        let col = (file.to_ascii_lowercase() as u8 - b'a') as usize + Self::column_offset(variant);
        if rank == 0 || rank > size || col >= size {
            return Err(out_of_bounds());
        }

        Ok(Square::new(size - rank, col))
    }

    /// Encode `square` as upper-case notation
    ///
    /// Returns `None` for squares off the grid and for squares no notation can
    /// reach (hex-chess column 0).
    pub fn render(variant: Variant, square: Square) -> Option<String> {
        let size = variant.board_size();
        if square.row >= size || square.col >= size {
            return None;
        }
        let file_index = square.col.checked_sub(Self::column_offset(variant))?;
        let file = (b'A' + u8::try_from(file_index).ok()?) as char;
        Some(format!("{}{}", file, size - square.row))
    }
}
