//! Board: grid ownership, initial layouts, move application and undo
//!
//! The board is the only place game state changes. It owns the live [`Grid`]
//! and the [`SnapshotHistory`]; nothing else holds references into either.
//!
//! - Layout construction per variant ([`create_initial_board`])
//! - Move validation through the variant's [`crate::rules::LegalityPolicy`]
//! - Move application with checkers capture and promotion
//! - Undo by restoring the last full snapshot

use tracing::{debug, warn};

use crate::constants::{
    BACK_RANK, CHECKERS_BLACK_ROWS, CHECKERS_WHITE_ROWS, HEX_LAYOUT_COLUMN_OFFSET,
};
use crate::grid::Grid;
use crate::history::SnapshotHistory;
use crate::piece::{Piece, PieceKind};
use crate::rules::Verdict;
use crate::types::{Color, MoveOutcome, RejectReason, Square, Variant};

/// Build the starting grid for `variant`
///
/// - Chess: black back rank on row 0, black pawns on row 1, white pawns on
///   row 6, white back rank on row 7.
/// - Hex-chess: the same two ranks per side written into columns 2..=9 of
///   rows 0/1 (black) and 10/9 (white) of an 11×11 grid.
/// - Checkers: men on every cell with odd `row + col`, black on rows 0..3,
///   white on rows 5..8.
pub fn create_initial_board(variant: Variant) -> Grid {
    let size = variant.board_size();
    let mut grid = Grid::empty(size);

    match variant {
        Variant::Chess => place_chess_ranks(&mut grid, 0),
        Variant::HexChess => place_chess_ranks(&mut grid, HEX_LAYOUT_COLUMN_OFFSET),
        Variant::Checkers => {
            for row in CHECKERS_BLACK_ROWS.chain(CHECKERS_WHITE_ROWS) {
                let color = if CHECKERS_BLACK_ROWS.contains(&row) {
                    Color::Black
                } else {
                    Color::White
                };
                for col in (0..size).filter(|col| (row + col) % 2 == 1) {
                    grid.set(Square::new(row, col), Some(Piece::checker(color)));
                }
            }
        }
    }

    grid
}

/// Back ranks on the outer rows, pawns just inside, starting at `first_col`
fn place_chess_ranks(grid: &mut Grid, first_col: usize) {
    let last_row = grid.size() - 1;
    for (i, kind) in BACK_RANK.iter().copied().enumerate() {
        let col = first_col + i;
        grid.set(Square::new(0, col), Some(Piece::new(kind, Color::Black)));
        grid.set(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        grid.set(Square::new(last_row - 1, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
        grid.set(Square::new(last_row, col), Some(Piece::new(kind, Color::White)));
    }
}

/// Playing surface for one game
#[derive(Debug, Clone)]
pub struct Board {
    variant: Variant,
    grid: Grid,
    history: SnapshotHistory,
}

impl Board {
    /// A board in the starting position of `variant` with empty history
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            grid: create_initial_board(variant),
            history: SnapshotHistory::default(),
        }
    }

    /// A board holding an arbitrary position, with empty history
    ///
    /// Returns `None` if `grid` does not have `variant`'s dimensions.
    pub fn from_grid(variant: Variant, grid: Grid) -> Option<Self> {
        (grid.size() == variant.board_size()).then(|| Self {
            variant,
            grid,
            history: SnapshotHistory::default(),
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The live grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Piece on `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid.get(square)
    }

    /// Glyph rows for presentation, row 0 first; `None` marks an empty cell
    pub fn display(&self) -> Vec<Vec<Option<char>>> {
        self.grid
            .rows()
            .map(|row| row.iter().map(|cell| cell.map(|piece| piece.glyph())).collect())
            .collect()
    }

    /// Validate and apply a move
    ///
    /// On success the pre-move grid is pushed onto the history, any jumped
    /// piece is removed, the mover lands on `end` and, for checkers, is crowned
    /// on reaching the far row. On rejection nothing changes.
    pub fn move_piece(&mut self, start: Square, end: Square) -> MoveOutcome {
        let outcome = self.apply(start, end);
        match outcome {
            MoveOutcome::Applied { captured, promoted } => {
                debug!(
                    "[BOARD] {:?} move {} -> {} applied (captured: {:?}, promoted: {})",
                    self.variant, start, end, captured, promoted
                );
            }
            MoveOutcome::Rejected(reason) => {
                warn!(
                    "[BOARD] {:?} move {} -> {} rejected: {}",
                    self.variant, start, end, reason
                );
            }
        }
        outcome
    }

    fn apply(&mut self, start: Square, end: Square) -> MoveOutcome {
        if !self.grid.contains(start) || !self.grid.contains(end) {
            return MoveOutcome::Rejected(RejectReason::OffBoard);
        }

        let Some(mut piece) = self.grid.get(start).copied() else {
            return MoveOutcome::Rejected(RejectReason::EmptyStart);
        };

        let policy = self.variant.policy();
        let captured = match policy.judge(&self.grid, &piece, start, end) {
            Verdict::Legal => None,
            Verdict::Capture(square) => Some(square),
            Verdict::Illegal(reason) => return MoveOutcome::Rejected(reason),
        };

        self.history.push(self.grid.clone());

        if let Some(square) = captured {
            self.grid.take(square);
        }

        self.grid.take(start);
        let promoted = policy.promotion_row(piece.color(), self.grid.size()) == Some(end.row)
            && piece.promote();
        self.grid.set(end, Some(piece));

        MoveOutcome::Applied { captured, promoted }
    }

    /// Restore the grid from before the most recent applied move
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.grid = snapshot;
                debug!("[BOARD] Undo restored snapshot, {} left", self.history.len());
                true
            }
            None => {
                debug!("[BOARD] Undo requested with empty history");
                false
            }
        }
    }
}
