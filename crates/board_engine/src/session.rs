//! Turn-alternation state machine
//!
//! A [`GameSession`] owns one [`Board`] and is driven one request at a time
//! through [`GameSession::step`], which takes the two raw strings a player
//! typed (piece, then destination).
//!
//! # Turn flow
//!
//! ```text
//!            step(start, end)
//! Turn(White) ───────────────▶ Turn(Black)
//!      ▲                           │
//!      └───────────────────────────┘
//! ```
//!
//! - Either string is `undo` → pop one snapshot, pass the turn, move count unchanged
//! - Either string fails to parse → nothing happens, same player again
//! - Otherwise → the board judges the move; the turn passes whether it was
//!   applied or rejected, the move count grows only when applied
//!
//! There is no terminal state; a session runs until its caller stops stepping.

use tracing::{debug, info};

use crate::board::Board;
use crate::constants::UNDO_KEYWORD;
use crate::coords::CoordinateMapper;
use crate::error::ParseError;
use crate::types::{Color, MoveOutcome, Square, Variant};

/// What a single [`GameSession::step`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Both squares parsed and the board judged the move; turn passed
    Moved {
        start: Square,
        end: Square,
        outcome: MoveOutcome,
    },
    /// The undo keyword was given; `restored` is false on empty history.
    /// Turn passed.
    Undone { restored: bool },
    /// Notation could not be decoded; turn kept
    InvalidInput(ParseError),
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    move_count: u32,
}

impl GameSession {
    /// Fresh game of `variant`, White to move
    pub fn new(variant: Variant) -> Self {
        info!("[SESSION] New {} game", variant);
        Self {
            board: Board::new(variant),
            turn: Color::White,
            move_count: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Applied moves so far
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pass the turn to the other side
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Process one request from the player to move
    pub fn step(&mut self, raw_start: &str, raw_end: &str) -> StepOutcome {
        if is_undo(raw_start) || is_undo(raw_end) {
            let restored = self.board.undo_move();
            self.switch_turn();
            debug!("[SESSION] Undo (restored: {}), {} to move", restored, self.turn);
            return StepOutcome::Undone { restored };
        }

        let variant = self.variant();
        let squares = CoordinateMapper::parse(variant, raw_start)
            .and_then(|start| Ok((start, CoordinateMapper::parse(variant, raw_end)?)));
        let (start, end) = match squares {
            Ok(squares) => squares,
            Err(err) => {
                debug!("[SESSION] Discarding input {:?} / {:?}: {}", raw_start, raw_end, err);
                return StepOutcome::InvalidInput(err);
            }
        };

        let outcome = self.board.move_piece(start, end);
        if outcome.is_applied() {
            self.move_count += 1;
        }
        self.switch_turn();
        debug!(
            "[SESSION] Move {} -> {} by {}, {} applied so far",
            start,
            end,
            self.turn.opposite(),
            self.move_count
        );

        StepOutcome::Moved { start, end, outcome }
    }
}

fn is_undo(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(UNDO_KEYWORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RejectReason;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(Variant::Chess);
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.variant(), Variant::Chess);
        assert!(session.board().history().is_empty());
    }

    #[test]
    fn test_applied_move_passes_turn_and_counts() {
        let mut session = GameSession::new(Variant::Chess);

        let step = session.step("e2", "e4");
        assert_eq!(
            step,
            StepOutcome::Moved {
                start: Square::new(6, 4),
                end: Square::new(4, 4),
                outcome: MoveOutcome::Applied {
                    captured: None,
                    promoted: false
                },
            }
        );
        assert_eq!(session.turn(), Color::Black);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_rejected_move_still_passes_turn() {
        //! Moving from an empty cell is refused, yet the turn alternates
        let mut session = GameSession::new(Variant::Chess);

        let step = session.step("e4", "e5");
        assert!(matches!(
            step,
            StepOutcome::Moved {
                outcome: MoveOutcome::Rejected(RejectReason::EmptyStart),
                ..
            }
        ));
        assert_eq!(session.turn(), Color::Black);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_invalid_input_keeps_turn() {
        let mut session = GameSession::new(Variant::Checkers);

        let step = session.step("x", "c5");
        assert!(matches!(step, StepOutcome::InvalidInput(ParseError::MissingRank('x'))));

        let step = session.step("b6", "??");
        assert!(matches!(step, StepOutcome::InvalidInput(ParseError::BadFile('?'))));

        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.move_count(), 0);
        assert!(session.board().history().is_empty());
    }

    #[test]
    fn test_undo_keyword_in_either_slot() {
        let mut session = GameSession::new(Variant::Chess);
        session.step("e2", "e4");

        assert_eq!(session.step("e7", "UNDO"), StepOutcome::Undone { restored: true });
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.move_count(), 1, "Undo does not touch the move count");

        assert_eq!(session.step(" Undo ", ""), StepOutcome::Undone { restored: false });
        assert_eq!(session.turn(), Color::Black);
    }
}
