//! The cell grid backing a board.
//!
//! An N×N matrix of [`CellState`] with bounds-checked access. The size is
//! fixed at construction; cells only ever change through `set`, so the board
//! layer above controls every transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Open water, never shot at.
    #[default]
    Empty,
    /// Occupied by a ship segment, never shot at.
    Ship,
    /// Shot that landed in open water.
    Miss,
    /// Shot that landed on a ship segment.
    Hit,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside [0..N).
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
        }
    }
}

/// A runtime-sized N×N grid of cell states, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid of `size`×`size` cells, all [`CellState::Empty`].
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (x, y) lies on the grid.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// State of the cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y * self.size + x])
    }

    /// Overwrite the cell at (x, y).
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.cells[y * self.size + x] = state;
        Ok(())
    }

    /// Reset every cell to [`CellState::Empty`].
    pub fn clear_all(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Iterate over all cells as `(x, y, state)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i % size, i / size, state))
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let glyph = match self.cells[y * self.size + x] {
                    CellState::Empty => '□',
                    CellState::Ship => '■',
                    CellState::Miss => '◌',
                    CellState::Hit => '✕',
                };
                write!(f, "{} ", glyph)?;
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
