//! Shared shot outcomes and error types.

use crate::config::SettingsError;
use crate::game::Screen;
use crate::grid::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Shot landed in open water (or out of bounds).
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot finished off a ship; carries its length.
    Sunk(usize),
    /// The cell was already resolved; nothing changed.
    Repeat,
}

impl ShotOutcome {
    /// Whether the shot damaged a ship.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (out-of-bounds write during a commit).
    Grid(GridError),
    /// Random placement ran out of attempts for a ship of this length.
    PlacementExhausted { length: usize },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::PlacementExhausted { length } => {
                write!(f, "No valid placement found for a ship of length {}", length)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors returned by the match controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation is not valid on the current screen.
    Screen { current: Screen },
    /// Battle cannot start while ships remain unplaced.
    FleetIncomplete { remaining: usize },
    /// Rejected settings.
    Settings(SettingsError),
    /// Board-level failure (e.g. placement exhaustion).
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<SettingsError> for GameError {
    fn from(err: SettingsError) -> Self {
        GameError::Settings(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Screen { current } => {
                write!(f, "Operation not available on the {:?} screen", current)
            }
            GameError::FleetIncomplete { remaining } => {
                write!(f, "{} ship(s) still to place before battle", remaining)
            }
            GameError::Settings(e) => write!(f, "Settings error: {}", e),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
