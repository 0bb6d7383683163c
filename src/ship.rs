//! Ships and their footprint on the grid.

use serde::{Deserialize, Serialize};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of segment `i` relative to the anchor cell.
    #[inline]
    pub fn segment(self, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (i, 0),
            Orientation::Vertical => (0, i),
        }
    }
}

/// A placed ship: its cells in anchor order and the damage taken so far.
///
/// Ships never move once placed. The hit counter is the only mutable part
/// and saturates at the ship length, so `hits <= length` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    length: usize,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// Build a ship from the cells it occupies.
    pub(crate) fn new(cells: Vec<(usize, usize)>) -> Self {
        Ship {
            length: cells.len(),
            cells,
            hits: 0,
        }
    }

    /// Number of segments.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cells occupied by the ship, in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Whether the ship occupies (x, y).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.iter().any(|&c| c == (x, y))
    }

    /// Register one more hit.
    pub(crate) fn record_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// Whether every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }
}
