//! Square storage grid shared by every topology
//!
//! A `Grid` is a plain value: cloning it produces a fully independent copy.

use std::ops::Index;

use crate::piece::Piece;
use crate::types::Square;

/// Fixed-size `size × size` grid of optional pieces, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Piece>>,
}

impl Grid {
    /// An empty grid
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `square` addresses a cell of this grid
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.row < self.size && square.col < self.size
    }

    #[inline]
    fn index_of(&self, square: Square) -> Option<usize> {
        self.contains(square).then(|| square.row * self.size + square.col)
    }

    /// Piece on `square`, `None` for empty or off-grid cells
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.index_of(square).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever stood there
    ///
    /// Off-grid writes are ignored and return `None`.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        match self.index_of(square) {
            Some(idx) => std::mem::replace(&mut self.cells[idx], piece),
            None => None,
        }
    }

    /// Remove and return the piece on `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Rows from row 0 downwards
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>]> {
        self.cells.chunks(self.size)
    }

    /// Every occupied cell with its piece, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|piece| (Square::new(idx / size, idx % size), piece))
        })
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Index<Square> for Grid {
    type Output = Option<Piece>;

    /// Panics on an off-grid square, like slice indexing
    fn index(&self, square: Square) -> &Self::Output {
        assert!(
            self.contains(square),
            "square {} is off a {}x{} grid",
            square,
            self.size,
            self.size
        );
        &self.cells[square.row * self.size + square.col]
    }
}
