//! Snapshot history backing undo
//!
//! Keeps a stack of full grid copies, one per applied move. Each entry is the
//! grid exactly as it stood *before* the move that followed it, so popping the
//! top entry restores the position prior to the most recent move.
//!
//! # Architecture
//!
//! Entries are whole [`Grid`] values rather than move records. Restoring is a
//! wholesale replacement; nothing is replayed or inverted, so captures and
//! promotions come back for free.

use crate::grid::Grid;

/// Stack of grid snapshots, most recent last
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    snapshots: Vec<Grid>,
}

impl SnapshotHistory {
    /// Record the grid as it stands before a move
    pub fn push(&mut self, snapshot: Grid) {
        self.snapshots.push(snapshot);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop()
    }

    /// The snapshot the next undo would restore
    pub fn last(&self) -> Option<&Grid> {
        self.snapshots.last()
    }

    /// Number of undoable moves
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
