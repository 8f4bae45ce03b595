//! # Board Engine Core Types
//!
//! ## Overview
//!
//! The small value types every other module speaks in:
//!
//! - [`Color`] - the two sides, White always moves first
//! - [`Square`] - an internal `(row, col)` grid index, row 0 at the top (Black's side)
//! - [`Variant`] - which game is being played; fixes topology and legality policy
//! - [`MoveOutcome`] / [`RejectReason`] - the result of a move request
//!
//! ## Coordinates
//!
//! `Square` is the *internal* index, not the notation a player
//! types. Row 0 is the far rank from White, so White pawns and checkers move
//! towards smaller rows. Translating between `Square` and `"E4"`-style text is
//! the job of [`crate::coords::CoordinateMapper`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{CHECKERS_SIZE, CHESS_SIZE, HEX_SIZE};
use crate::error::ParseError;
use crate::rules::LegalityPolicy;

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step for men of this color
    pub fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Internal grid index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed `(row, col)` delta, `None` if it leaves the
    /// non-negative quadrant
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the three supported games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Orthogonal 8×8 chess
    Chess,
    /// Hexagonal-layout chess projected onto an 11×11 grid
    HexChess,
    /// 8×8 checkers
    Checkers,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Chess, Variant::HexChess, Variant::Checkers];

    /// Side length of the (square) storage grid
    pub fn board_size(self) -> usize {
        match self {
            Variant::Chess => CHESS_SIZE,
            Variant::HexChess => HEX_SIZE,
            Variant::Checkers => CHECKERS_SIZE,
        }
    }

    /// Legality policy the board enforces for this variant
    pub fn policy(self) -> LegalityPolicy {
        match self {
            Variant::Chess | Variant::HexChess => LegalityPolicy::Permissive,
            Variant::Checkers => LegalityPolicy::Checkers,
        }
    }

    /// Whether sessions of this variant report a move number
    pub fn counts_moves(self) -> bool {
        !matches!(self, Variant::Checkers)
    }

    /// Human-readable name
    pub fn title(self) -> &'static str {
        match self {
            Variant::Chess => "Classic chess",
            Variant::HexChess => "Hexagonal chess",
            Variant::Checkers => "Checkers",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    /// Accepts the menu numbers `1`/`2`/`3` and the variant names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "chess" | "classic" => Ok(Variant::Chess),
            "2" | "hex" | "hexchess" | "hex-chess" => Ok(Variant::HexChess),
            "3" | "checkers" | "draughts" => Ok(Variant::Checkers),
            _ => Err(ParseError::UnknownVariant(s.trim().to_string())),
        }
    }
}

/// Why a move request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Start or end lies outside the grid
    OffBoard,
    /// Nothing stands on the start cell
    EmptyStart,
    /// The destination is already occupied (checkers)
    OccupiedTarget,
    /// The geometry is not a legal step or jump for this piece (checkers)
    IllegalGeometry,
    /// A jump whose midpoint holds no opposing piece (checkers)
    NothingToCapture,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RejectReason::OffBoard => "square is off the board",
            RejectReason::EmptyStart => "no piece on the starting square",
            RejectReason::OccupiedTarget => "target square is occupied",
            RejectReason::IllegalGeometry => "piece cannot move that way",
            RejectReason::NothingToCapture => "no opposing piece to jump",
        };
        f.write_str(msg)
    }
}

/// Result of [`crate::Board::move_piece`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and a snapshot pushed
    Applied {
        /// Cell of the piece removed by a checkers jump
        captured: Option<Square>,
        /// The mover was crowned on arrival
        promoted: bool,
    },
    /// Nothing changed
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opposite_alternates() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[test]
    fn test_square_offset_stays_non_negative() {
        let sq = Square::new(1, 0);
        assert_eq!(sq.offset(1, 1), Some(Square::new(2, 1)));
        assert_eq!(sq.offset(-1, 0), Some(Square::new(0, 0)));
        assert_eq!(sq.offset(-2, 0), None);
        assert_eq!(sq.offset(0, -1), None);
    }

    #[test]
    fn test_variant_from_menu_numbers_and_names() {
        assert_eq!("1".parse::<Variant>().unwrap(), Variant::Chess);
        assert_eq!("2".parse::<Variant>().unwrap(), Variant::HexChess);
        assert_eq!("3".parse::<Variant>().unwrap(), Variant::Checkers);
        assert_eq!(" Checkers ".parse::<Variant>().unwrap(), Variant::Checkers);
        assert_eq!("hex".parse::<Variant>().unwrap(), Variant::HexChess);
        assert_eq!(
            "4".parse::<Variant>(),
            Err(ParseError::UnknownVariant("4".to_string()))
        );
    }

    #[test]
    fn test_variant_topology() {
        assert_eq!(Variant::Chess.board_size(), 8);
        assert_eq!(Variant::HexChess.board_size(), 11);
        assert_eq!(Variant::Checkers.board_size(), 8);
        assert_eq!(Variant::Chess.policy(), LegalityPolicy::Permissive);
        assert_eq!(Variant::HexChess.policy(), LegalityPolicy::Permissive);
        assert_eq!(Variant::Checkers.policy(), LegalityPolicy::Checkers);
    }
}
