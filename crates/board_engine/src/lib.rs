//! # Board Engine
//!
//! Board, move and undo-history engine shared by three turn-based games:
//! orthogonal chess, hexagonal-layout chess and checkers.
//!
//! ## Layers
//!
//! - [`piece`] - closed set of piece kinds and their glyphs
//! - [`grid`] / [`board`] - storage, initial layouts, move application, undo
//! - [`rules`] - legality policies (permissive for the chess variants, the
//!   checkers rule engine)
//! - [`coords`] - `"E4"`-style notation to grid indices and back
//! - [`session`] - turn alternation driven by discrete `step` calls
//!
//! ## Example
//!
//! ```rust
//! use board_engine::{GameSession, StepOutcome, Variant};
//!
//! let mut session = GameSession::new(Variant::Checkers);
//! let step = session.step("c3", "d4");
//! assert!(matches!(step, StepOutcome::Moved { outcome, .. } if outcome.is_applied()));
//! assert_eq!(session.move_count(), 1);
//! ```
//!
//! Rendering the board and reading player input are left to the caller; the
//! engine only hands out glyph rows ([`Board::display`]) and consumes strings.

pub mod board;
pub mod constants;
pub mod coords;
pub mod error;
pub mod grid;
pub mod history;
pub mod piece;
pub mod rules;
pub mod session;
pub mod types;


pub use board::{create_initial_board, Board};
pub use coords::CoordinateMapper;
pub use error::{ParseError, ParseResult};
pub use grid::Grid;
pub use history::SnapshotHistory;
pub use piece::{Piece, PieceKind};
pub use rules::{LegalityPolicy, Verdict};
pub use session::{GameSession, StepOutcome};
pub use types::{Color, MoveOutcome, RejectReason, Square, Variant};
