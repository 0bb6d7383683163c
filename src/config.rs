//! Match configuration: difficulty, grid size, fleet composition.

use crate::ai::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest playable grid side.
pub const GRID_SIZE_MIN: usize = 6;
/// Largest playable grid side.
pub const GRID_SIZE_MAX: usize = 15;
/// Random placement gives up on a ship after this many attempts.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// The classic one-of-each fleet.
pub const CLASSIC_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Selectable fleet compositions, largest ships first.
pub const FLEET_PRESETS: [&[usize]; 3] = [
    &CLASSIC_FLEET,
    &[4, 3, 3, 2, 2, 2],
    &[3, 3, 2, 2, 2, 1, 1],
];

/// Errors produced by settings validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Grid side outside the supported range.
    GridSize { size: usize },
    /// The fleet has no ships at all.
    EmptyFleet,
    /// A ship length of zero.
    ShipLength,
    /// A ship longer than the grid side.
    ShipTooLong { length: usize, grid_size: usize },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::GridSize { size } => write!(
                f,
                "Grid size {} outside supported range {}..={}",
                size, GRID_SIZE_MIN, GRID_SIZE_MAX
            ),
            SettingsError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            SettingsError::ShipLength => write!(f, "Ship length must be at least 1"),
            SettingsError::ShipTooLong { length, grid_size } => write!(
                f,
                "Ship of length {} does not fit a {}x{} grid",
                length, grid_size, grid_size
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Immutable match configuration, passed by reference into each component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub grid_size: usize,
    pub ship_set: Vec<usize>,
}

impl Settings {
    /// Build validated settings.
    pub fn new(
        difficulty: Difficulty,
        grid_size: usize,
        ship_set: Vec<usize>,
    ) -> Result<Self, SettingsError> {
        let settings = Settings {
            difficulty,
            grid_size,
            ship_set,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the grid range and fleet composition.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size < GRID_SIZE_MIN || self.grid_size > GRID_SIZE_MAX {
            return Err(SettingsError::GridSize {
                size: self.grid_size,
            });
        }
        if self.ship_set.is_empty() {
            return Err(SettingsError::EmptyFleet);
        }
        for &length in &self.ship_set {
            if length == 0 {
                return Err(SettingsError::ShipLength);
            }
            if length > self.grid_size {
                return Err(SettingsError::ShipTooLong {
                    length,
                    grid_size: self.grid_size,
                });
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            difficulty: Difficulty::Random,
            grid_size: 10,
            ship_set: CLASSIC_FLEET.to_vec(),
        }
    }
}
