//! Move legality policies - pure functions, no board mutation
//!
//! Each variant is governed by one [`LegalityPolicy`]:
//!
//! - [`LegalityPolicy::Permissive`] - chess and hex-chess. Any move from an
//!   occupied cell to any cell of the grid is accepted. Geometry, blocking
//!   pieces and check are not considered.
//! - [`LegalityPolicy::Checkers`] - the checkers rule engine: forward diagonal
//!   steps, forward jumps over an opposing piece, and king moves.
//!
//! Judging never touches the grid. A jump reports the square to capture in its
//! [`Verdict`] and the board removes that piece only once the move is accepted,
//! so a refused move can never cost a piece.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Color, RejectReason, Square};

/// Legality rule set attached to a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalityPolicy {
    /// Accept every move whose start cell holds a piece
    Permissive,
    /// Checkers steps, jumps and king moves
    Checkers,
}

/// Decision on a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Legal, nothing captured
    Legal,
    /// Legal jump removing the piece on the given square
    Capture(Square),
    /// Refused
    Illegal(RejectReason),
}

impl Verdict {
    pub fn is_legal(&self) -> bool {
        !matches!(self, Verdict::Illegal(_))
    }
}

impl LegalityPolicy {
    /// Judge moving `piece` from `start` to `end`
    ///
    /// Both squares are expected to be on `grid`; `piece` is the piece on
    /// `start`.
    pub fn judge(self, grid: &Grid, piece: &Piece, start: Square, end: Square) -> Verdict {
        match self {
            LegalityPolicy::Permissive => Verdict::Legal,
            LegalityPolicy::Checkers => judge_checkers(grid, piece, start, end),
        }
    }

    /// Boolean form of [`LegalityPolicy::judge`]
    pub fn is_valid_move(self, grid: &Grid, piece: &Piece, start: Square, end: Square) -> bool {
        self.judge(grid, piece, start, end).is_legal()
    }

    /// Row on which a man of `color` gets crowned, if the policy crowns at all
    pub fn promotion_row(self, color: Color, size: usize) -> Option<usize> {
        match (self, color) {
            (LegalityPolicy::Permissive, _) => None,
            (LegalityPolicy::Checkers, Color::White) => Some(0),
            (LegalityPolicy::Checkers, Color::Black) => Some(size - 1),
        }
    }
}

fn judge_checkers(grid: &Grid, piece: &Piece, start: Square, end: Square) -> Verdict {
    if !grid.is_empty_at(end) {
        return Verdict::Illegal(RejectReason::OccupiedTarget);
    }

    let d_row = end.row as isize - start.row as isize;
    let d_col = end.col as isize - start.col as isize;

    // Kings: one or two diagonal cells either way, geometry only
    if piece.is_king() {
        return if d_row.abs() == d_col.abs() && matches!(d_row.abs(), 1 | 2) {
            Verdict::Legal
        } else {
            Verdict::Illegal(RejectReason::IllegalGeometry)
        };
    }

    let forward = piece.color().forward();

    if d_row == forward && d_col.abs() == 1 {
        return Verdict::Legal;
    }

    if d_row == 2 * forward && d_col.abs() == 2 {
        let victim = start
            .offset(forward, d_col.signum())
            .and_then(|mid| grid.get(mid).map(|jumped| (mid, jumped)));
        return match victim {
            Some((mid, jumped)) if jumped.color() != piece.color() => Verdict::Capture(mid),
            _ => Verdict::Illegal(RejectReason::NothingToCapture),
        };
    }

    Verdict::Illegal(RejectReason::IllegalGeometry)
}
