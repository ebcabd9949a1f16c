//! Common types: attack outcomes, game results and errors.

use crate::grid::{Coord, GridError};
use crate::ship::ShipId;

/// Result of resolving one attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackOutcome {
    /// No ship at the attacked cell.
    Miss,
    /// The attack damaged `ship`; `sunk` is set on the hit that sinks it.
    Hit { ship: ShipId, sunk: bool },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    pub fn sunk_ship(&self) -> Option<ShipId> {
        match *self {
            AttackOutcome::Hit { ship, sunk: true } => Some(ship),
            _ => None,
        }
    }
}

/// State of the game after an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameResult {
    InProgress,
    HumanWins,
    ComputerWins,
}

/// The side that won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Winner {
    Human,
    Computer,
}

impl GameResult {
    pub fn winner(self) -> Option<Winner> {
        match self {
            GameResult::InProgress => None,
            GameResult::HumanWins => Some(Winner::Human),
            GameResult::ComputerWins => Some(Winner::Computer),
        }
    }
}

/// Why a ship could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some occupied cell would fall off the board.
    OutOfBounds,
    /// Some occupied cell already holds a ship.
    Overlaps,
    /// No valid position for the ship exists on the board.
    NoRoom,
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship would be off-board or overlapping. Nothing was written.
    InvalidPlacement(PlacementError),
    /// Coordinate outside the board.
    OutOfBounds { col: i64, row: i64, size: usize },
    /// Cell was already attacked this game.
    RepeatedAttack(Coord),
    /// Every cell of the attack-weight grid is 0 while the game is in progress.
    DegenerateHeuristicState,
    /// Cell holds a ship reference that the board does not own.
    UnknownShip(ShipId),
    /// The game has ended; only a reset is accepted.
    GameIsOver,
    /// No ship placement is in progress.
    NotPlacing,
    /// Ships are still being placed.
    NotInBattle,
    /// Grids of different sizes were combined.
    GridMismatch,
    /// Rejected session configuration.
    InvalidConfig(&'static str),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { col, row, size } => GameError::OutOfBounds { col, row, size },
            GridError::SizeMismatch { .. } => GameError::GridMismatch,
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would extend off the board"),
            PlacementError::Overlaps => write!(f, "ship would overlap another ship"),
            PlacementError::NoRoom => write!(f, "no room left for the ship"),
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            GameError::OutOfBounds { col, row, size } => {
                write!(f, "Coordinate ({}, {}) is outside the {}x{} board", col, row, size, size)
            }
            GameError::RepeatedAttack(c) => write!(f, "Cell {} was already attacked", c),
            GameError::DegenerateHeuristicState => {
                write!(f, "Attack weights are exhausted while the game is in progress")
            }
            GameError::UnknownShip(id) => write!(f, "Board has no ship #{}", id.index()),
            GameError::GameIsOver => write!(f, "The game is over; start a new game"),
            GameError::NotPlacing => write!(f, "No ship is waiting to be placed"),
            GameError::NotInBattle => write!(f, "Ships are still being placed"),
            GameError::GridMismatch => write!(f, "Grid sizes do not match"),
            GameError::InvalidConfig(why) => write!(f, "Invalid configuration: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
