// Opponent move selection against the player's board.
//
// Two strategies: uniform-random over unshot cells, and a hunt/target
// heuristic that chases confirmed hits before falling back to a
// checkerboard sweep.

use crate::board::Board;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Opponent skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform choice among unshot cells.
    Random,
    /// Hunt/target: chase hits, sweep the checkerboard otherwise.
    Heuristic,
}

/// Cardinal directions in enqueue order: east, west, south, north.
/// The order is observable through move sequences and must stay fixed.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Targeting state for one match: a FIFO queue of cells to try next.
///
/// The queue is re-derived from the board's current hit cells whenever it
/// runs empty, rather than tracking a single anchor hit. Entries are not
/// re-validated when popped.
#[derive(Debug, Default)]
pub struct Opponent {
    targets: VecDeque<(usize, usize)>,
}

impl Opponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all pending targets; called on match reset.
    pub fn reset(&mut self) {
        self.targets.clear();
    }

    /// Pick the next cell to shoot on `board`.
    ///
    /// Never fails: with no unshot cell left anywhere the fixed fallback
    /// (0, 0) is returned, which the caller treats as a no-op move.
    pub fn get_move<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &Board,
        difficulty: Difficulty,
    ) -> (usize, usize) {
        if difficulty == Difficulty::Random {
            return match Self::random_unshot(rng, board, false) {
                Some(cell) => cell,
                None => (0, 0),
            };
        }

        if let Some(cell) = self.targets.pop_front() {
            return cell;
        }

        self.refill_targets(board);
        if let Some(cell) = self.targets.pop_front() {
            return cell;
        }

        // no open hits to chase: sweep even-parity cells, widening to every
        // unshot cell once the checkerboard is spent
        match Self::random_unshot(rng, board, true)
            .or_else(|| Self::random_unshot(rng, board, false))
        {
            Some(cell) => cell,
            None => (0, 0),
        }
    }

    /// Enqueue the in-bounds, unshot cardinal neighbors of every hit cell,
    /// scanning the board row by row.
    fn refill_targets(&mut self, board: &Board) {
        let n = board.size();
        for y in 0..n {
            for x in 0..n {
                if !board.is_hit_cell(x, y) {
                    continue;
                }
                for (dx, dy) in DIRECTIONS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if nx < n && ny < n && !board.is_shot_cell(nx, ny) {
                        self.targets.push_back((nx, ny));
                    }
                }
            }
        }
    }

    /// Uniform pick among unshot cells, optionally restricted to the
    /// `(x + y) % 2 == 0` checkerboard.
    fn random_unshot<R: Rng>(
        rng: &mut R,
        board: &Board,
        parity_only: bool,
    ) -> Option<(usize, usize)> {
        let n = board.size();
        let mut candidates = Vec::new();
        for y in 0..n {
            for x in 0..n {
                if board.is_shot_cell(x, y) {
                    continue;
                }
                if parity_only && (x + y) % 2 != 0 {
                    continue;
                }
                candidates.push((x, y));
            }
        }
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.random_range(0..candidates.len())])
        }
    }
}
