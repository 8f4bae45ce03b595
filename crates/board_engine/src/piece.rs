//! Game pieces for all three variants
//!
//! A closed set of kinds: the six chess kinds shared by orthogonal and hex
//! chess, plus the checkers man which carries its own promotion flag.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Color;

/// What a piece is, independent of its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    /// Checkers man; `promoted` turns it into a king
    Checker { promoted: bool },
}

/// A piece standing on a cell
///
/// `color` is fixed at construction. The only state change a piece ever
/// undergoes is checkers promotion, which is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Create a chess piece (or an unpromoted checker via [`Piece::checker`])
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { color, kind }
    }

    /// Create an unpromoted checkers man
    pub fn checker(color: Color) -> Self {
        Self::new(PieceKind::Checker { promoted: false }, color)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// True for a promoted checker
    pub fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::Checker { promoted: true })
    }

    /// Crown a checkers man
    ///
    /// Chess pieces are left untouched; an already promoted checker stays
    /// promoted. Returns `true` if the piece changed.
    pub fn promote(&mut self) -> bool {
        match self.kind {
            PieceKind::Checker { promoted: false } => {
                self.kind = PieceKind::Checker { promoted: true };
                true
            }
            _ => false,
        }
    }

    /// Single display character
    ///
    /// Chess: `KQRBNP`, upper-case for white and lower-case for black.
    /// Checkers: `w`/`b` for men, `W`/`B` for kings.
    pub fn glyph(&self) -> char {
        let (letter, upper) = match self.kind {
            PieceKind::King => ('k', self.color == Color::White),
            PieceKind::Queen => ('q', self.color == Color::White),
            PieceKind::Rook => ('r', self.color == Color::White),
            PieceKind::Bishop => ('b', self.color == Color::White),
            PieceKind::Knight => ('n', self.color == Color::White),
            PieceKind::Pawn => ('p', self.color == Color::White),
            PieceKind::Checker { promoted } => match self.color {
                Color::White => ('w', promoted),
                Color::Black => ('b', promoted),
            },
        };
        if upper {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}
