use alloc::vec::Vec;

use crate::common::GameError;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("aircraft carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 3),
    ShipType::new("patrol boat", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Board size and fleet used for every game of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<ShipType>,
}

impl GameConfig {
    /// The standard 10x10 game with the five canonical ships.
    pub fn standard() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
        }
    }

    /// A custom configuration. The fleet must be non-empty, every ship must fit
    /// the board, and the fleet's cells must not exceed the board's.
    pub fn new(board_size: usize, fleet: Vec<ShipType>) -> Result<Self, GameError> {
        if board_size == 0 {
            return Err(GameError::InvalidConfig("board size must be positive"));
        }
        if fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet must not be empty"));
        }
        if fleet.iter().any(|s| s.length() == 0 || s.length() > board_size) {
            return Err(GameError::InvalidConfig("every ship must fit on the board"));
        }
        let board_cells = board_size
            .checked_mul(board_size)
            .ok_or(GameError::InvalidConfig("board is too large"))?;
        let cells = fleet
            .iter()
            .try_fold(0usize, |acc, s| acc.checked_add(s.length()))
            .ok_or(GameError::InvalidConfig("fleet has more cells than the board"))?;
        if cells > board_cells {
            return Err(GameError::InvalidConfig("fleet has more cells than the board"));
        }
        Ok(Self { board_size, fleet })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

