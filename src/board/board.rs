//! Padded grid of cell states

use super::{CellState, Pos, Stone, MAX_RUN_LENGTH};
use crate::config::GameConfig;
use crate::error::{BoardError, ConfigError};

/// Game board.
///
/// The interior is `rows x cols`. A margin of `padding` rows and columns on the
/// high-index side is allocated as well and stays [`CellState::OutOfBounds`]
/// forever, so run scans can step past the last row or column without bounds
/// checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    padding: usize,
    /// Row-major, `(rows + padding) * (cols + padding)` cells
    cells: Vec<CellState>,
}

impl Board {
    /// Empty board with the minimum margin
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::blank(rows, cols, MAX_RUN_LENGTH - 1)
    }

    /// Empty board sized by a validated config
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::blank(config.rows, config.cols, config.padding))
    }

    fn blank(rows: usize, cols: usize, padding: usize) -> Self {
        let mut board = Self {
            rows,
            cols,
            padding,
            cells: vec![CellState::OutOfBounds; (rows + padding) * (cols + padding)],
        };
        board.reset();
        board
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Centre cell, where the engine opens
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// Whether `pos` is an interior (playable) cell
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Index into `cells`, or `None` outside the padded allocation
    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        let stride = self.cols + self.padding;
        let height = self.rows + self.padding;
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (r, c) = (pos.row as usize, pos.col as usize);
        if r >= height || c >= stride {
            return None;
        }
        Some(r * stride + c)
    }

    /// Clear every interior cell. The margin is untouched.
    pub fn reset(&mut self) {
        let stride = self.cols + self.padding;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let (r, c) = (idx / stride, idx % stride);
            *cell = if r < self.rows && c < self.cols {
                CellState::Empty
            } else {
                CellState::OutOfBounds
            };
        }
    }

    /// Strict read: fails outside the padded allocation
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<CellState, BoardError> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::OutOfBoundsAccess {
                row: pos.row,
                col: pos.col,
            })
    }

    /// Lenient read used by scans: anything unallocated is `OutOfBounds`
    #[inline]
    pub fn cell(&self, pos: Pos) -> CellState {
        self.index(pos)
            .map_or(CellState::OutOfBounds, |idx| self.cells[idx])
    }

    /// Check if position is a free interior cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cell(pos) == CellState::Empty
    }

    /// Place a stone on an empty interior cell
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        let idx = self.index(pos).ok_or(BoardError::OutOfBoundsAccess {
            row: pos.row,
            col: pos.col,
        })?;
        if self.cells[idx] != CellState::Empty {
            return Err(BoardError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = stone.into();
        Ok(())
    }

    /// Every interior cell holding `stone`, in row-major order
    pub fn cells_of(&self, stone: Stone) -> Vec<Pos> {
        let target = CellState::from(stone);
        self.interior()
            .filter(|&pos| self.cell(pos) == target)
            .collect()
    }

    /// Number of stones of one color
    pub fn stone_count(&self, stone: Stone) -> usize {
        let target = CellState::from(stone);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// True once no interior cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&CellState::Empty)
    }

    /// Interior positions in row-major order
    pub fn interior(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows as i32)
            .flat_map(move |r| (0..self.cols as i32).map(move |c| Pos::new(r, c)))
    }
}
