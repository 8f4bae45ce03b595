//! # Board Engine Constants - Topologies, Layouts & Keywords
//!
//! ## Overview
//!
//! Centralizes the numbers that define each variant's topology: grid sizes,
//! which rows hold the starting pieces, and the column offsets used both by the
//! layout builder and by the coordinate mapper.
//!
//! ## Grid Sizes
//!
//! - **Chess**: 8×8, every cell playable
//! - **Checkers**: 8×8, pieces only ever start on dark cells (`(row + col)` odd)
//! - **Hex-chess**: 11×11 storage holding a projected parallelogram. Pieces start
//!   in columns 2..=9; every other cell exists in storage but starts empty.
//!
//! ## The Hex Column Skew
//!
//! Hex notation maps file `a` to internal column 1 (`HEX_NOTATION_COLUMN_OFFSET`)
//! while the starting pieces begin at internal column 2
//! (`HEX_LAYOUT_COLUMN_OFFSET`). The two offsets disagree by one column and both
//! are kept as they are: `"a1"` addresses an empty cell and the white rook that
//! opens the back rank sits on `"b1"`. Internal column 0 has no notation at all.
//!
//! ```text
//! internal col:  0  1  2  3  4  5  6  7  8  9  10
//! notation:      -  a  b  c  d  e  f  g  h  i  j
//! row 10 pieces: .  .  R  N  B  Q  K  B  N  R  .
//! ```

use crate::piece::PieceKind;

/// Side length of the orthogonal chess grid
pub const CHESS_SIZE: usize = 8;

/// Side length of the checkers grid
pub const CHECKERS_SIZE: usize = 8;

/// Side length of the hex-chess storage grid
pub const HEX_SIZE: usize = 11;

/// Back rank order, file a to file h, for both colors
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// First internal column that receives a starting piece on the hex board
pub const HEX_LAYOUT_COLUMN_OFFSET: usize = 2;

/// Internal column addressed by file `a` in hex notation
pub const HEX_NOTATION_COLUMN_OFFSET: usize = 1;

/// Rows holding black checkers at the start
pub const CHECKERS_BLACK_ROWS: std::ops::Range<usize> = 0..3;

/// Rows holding white checkers at the start
pub const CHECKERS_WHITE_ROWS: std::ops::Range<usize> = 5..8;

/// Pseudo-move that pops the last snapshot instead of moving
pub const UNDO_KEYWORD: &str = "undo";

/// Default glyph for an empty cell when a board is drawn as text
pub const EMPTY_GLYPH: char = '.';
