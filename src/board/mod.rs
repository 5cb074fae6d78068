//! Board representation for Omok

pub mod board;
pub mod direction;


use std::fmt;

// Re-exports
pub use board::Board;
pub use direction::{project, Direction};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Longest run the detector is ever asked about. The margin must be at least
/// `MAX_RUN_LENGTH - 1` cells wide.
pub const MAX_RUN_LENGTH: usize = WIN_LENGTH;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Black,
    White,
    /// Permanent margin, or anything outside the allocated grid
    OutOfBounds,
}

impl From<Stone> for CellState {
    #[inline]
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => CellState::Black,
            Stone::White => CellState::White,
        }
    }
}

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

/// Position on the board.
///
/// Signed so that projected cells before row or column 0 are representable;
/// such cells read as [`CellState::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `distance` times by `(dr, dc)`
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32), distance: i32) -> Self {
        Self {
            row: self.row + dr * distance,
            col: self.col + dc * distance,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
