//! Board state: one grid, one fleet, and shot resolution.

use crate::common::{BoardError, ShotOutcome};
use crate::config::{Settings, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship};
use rand::Rng;

/// One side's board. Exclusive owner of its grid and ship list.
///
/// `reveal_ships` records whether the owning side may see unshot ship cells;
/// the engine itself never reads it, but renderers do.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    reveal_ships: bool,
}

impl Board {
    /// Create a board for the given settings. Revealed boards start empty
    /// (ships are placed manually afterwards); hidden boards place their
    /// fleet at random immediately.
    pub fn new<R: Rng>(
        reveal_ships: bool,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Board::empty(reveal_ships, settings.grid_size);
        if !reveal_ships {
            board.place_fleet_random(&settings.ship_set, rng)?;
        }
        Ok(board)
    }

    /// Create an empty board with no ships placed.
    pub fn empty(reveal_ships: bool, size: usize) -> Self {
        Board {
            grid: Grid::new(size),
            ships: Vec::new(),
            reveal_ships,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Whether unshot ship cells may be shown to the viewer.
    pub fn reveals_ships(&self) -> bool {
        self.reveal_ships
    }

    /// Read-only view of the fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the Moore neighborhood of (x, y), clipped at the edges,
    /// contains no ship cell. The cell itself counts as its own neighbor.
    fn area_free(&self, x: usize, y: usize) -> bool {
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !self.grid.in_bounds(nx, ny) {
                    continue;
                }
                if self.grid.get(nx, ny) == Ok(CellState::Ship) {
                    return false;
                }
            }
        }
        true
    }

    /// Validate a full placement run: every segment in bounds, empty, and
    /// clear of other ships by the no-touching rule.
    pub fn can_place(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        for i in 0..length {
            let (dx, dy) = orientation.segment(i);
            let (nx, ny) = (x + dx, y + dy);
            if !self.grid.in_bounds(nx, ny) {
                return false;
            }
            if self.grid.get(nx, ny) != Ok(CellState::Empty) {
                return false;
            }
            if !self.area_free(nx, ny) {
                return false;
            }
        }
        true
    }

    /// Commit a placement. Does NOT re-run [`Board::can_place`]: callers
    /// validate first. Only raw out-of-bounds coordinates are rejected.
    pub fn place(
        &mut self,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let (dx, dy) = orientation.segment(i);
            let (nx, ny) = (x + dx, y + dy);
            self.grid.get(nx, ny)?;
            cells.push((nx, ny));
        }
        for &(nx, ny) in &cells {
            self.grid.set(nx, ny, CellState::Ship)?;
        }
        self.ships.push(Ship::new(cells));
        Ok(())
    }

    /// Clear the board and place the whole fleet at random, in the order the
    /// ship set lists it. Each length gets up to [`MAX_PLACEMENT_ATTEMPTS`]
    /// uniformly random (orientation, anchor) draws; running dry reports
    /// [`BoardError::PlacementExhausted`] with the partial fleet left on the
    /// board for the caller to clear or retry.
    pub fn place_fleet_random<R: Rng>(
        &mut self,
        ship_set: &[usize],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.clear();
        let size = self.size();
        for &length in ship_set {
            let mut placed = false;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let x = rng.random_range(0..size);
                let y = rng.random_range(0..size);
                if self.can_place(x, y, length, orientation) {
                    self.place(x, y, length, orientation)?;
                    placed = true;
                    break;
                }
            }
            if !placed {
                log::warn!(
                    "random placement exhausted after {} attempts (length {}, {}x{} grid)",
                    MAX_PLACEMENT_ATTEMPTS,
                    length,
                    size,
                    size
                );
                return Err(BoardError::PlacementExhausted { length });
            }
        }
        Ok(())
    }

    /// Wipe the grid and drop the fleet.
    pub fn clear(&mut self) {
        self.grid.clear_all();
        self.ships.clear();
    }

    /// Adopt another board's ships and grid, keeping our reveal flag.
    pub fn clone_placement_from(&mut self, other: &Board) {
        self.grid = other.grid.clone();
        self.ships = other.ships.clone();
    }

    /// Resolve a shot at (x, y).
    ///
    /// Out-of-bounds coordinates degrade to a plain miss without touching
    /// any state. A cell that was already resolved reports
    /// [`ShotOutcome::Repeat`] and changes nothing; cells only ever move
    /// `Empty -> Miss` or `Ship -> Hit`.
    pub fn receive_shot(&mut self, x: usize, y: usize) -> ShotOutcome {
        let state = match self.grid.get(x, y) {
            Ok(state) => state,
            Err(_) => return ShotOutcome::Miss,
        };
        match state {
            CellState::Empty => {
                let _ = self.grid.set(x, y, CellState::Miss);
                ShotOutcome::Miss
            }
            CellState::Ship => {
                let _ = self.grid.set(x, y, CellState::Hit);
                for ship in &mut self.ships {
                    if ship.contains(x, y) {
                        ship.record_hit();
                        if ship.is_sunk() {
                            return ShotOutcome::Sunk(ship.length());
                        }
                        return ShotOutcome::Hit;
                    }
                }
                // ship cell with no recorded ship: unchecked manual commits
                // can produce this; the cell is still marked
                ShotOutcome::Hit
            }
            CellState::Miss | CellState::Hit => ShotOutcome::Repeat,
        }
    }

    /// Whether every ship in the fleet is sunk. Vacuously true for an empty
    /// fleet; the match controller only asks once the fleet is placed.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_sunk())
    }

    /// Whether (x, y) has been shot at (hit or miss).
    pub fn is_shot_cell(&self, x: usize, y: usize) -> bool {
        matches!(
            self.grid.get(x, y),
            Ok(CellState::Miss) | Ok(CellState::Hit)
        )
    }

    /// Whether (x, y) is a hit ship segment.
    pub fn is_hit_cell(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y) == Ok(CellState::Hit)
    }

    /// Whether (x, y) is a recorded miss.
    pub fn is_miss_cell(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y) == Ok(CellState::Miss)
    }

    /// Whether (x, y) is an unshot ship segment.
    pub fn is_ship_cell(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y) == Ok(CellState::Ship)
    }

    /// Whether (x, y) belongs to a ship that is fully sunk.
    pub fn is_sunk_cell(&self, x: usize, y: usize) -> bool {
        self.ships
            .iter()
            .any(|ship| ship.is_sunk() && ship.contains(x, y))
    }
}
