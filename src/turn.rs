//! Turn resolution: hits, sinkings and game over.

use crate::board::{Board, Cell};
use crate::common::{AttackOutcome, GameError, GameResult};
use crate::grid::{Coord, Grid};

/// Resolve one attack on `board`.
///
/// A hit increments the referenced ship's hit counter. There is no guard
/// against attacking the same cell twice; [`Side::receive_attack`] provides it.
pub fn resolve_attack(board: &mut Board, coord: Coord) -> Result<AttackOutcome, GameError> {
    match board.cell(coord)? {
        Cell::Empty => Ok(AttackOutcome::Miss),
        Cell::Ship(id) => {
            let sunk = board.ship_mut(id)?.register_hit();
            Ok(AttackOutcome::Hit { ship: id, sunk })
        }
    }
}

/// Evaluate both remaining-ship counters after an attack.
pub fn check_game_over(human_remaining: usize, computer_remaining: usize) -> GameResult {
    if computer_remaining == 0 {
        GameResult::HumanWins
    } else if human_remaining == 0 {
        GameResult::ComputerWins
    } else {
        GameResult::InProgress
    }
}

/// One player's defences: their board, how many ships are still afloat, and
/// which cells the opponent has already attacked.
#[derive(Debug, Clone)]
pub struct Side {
    board: Board,
    remaining: usize,
    attacked: Grid<bool>,
}

impl Side {
    /// An empty board that will hold `fleet_size` ships.
    pub fn new(size: usize, fleet_size: usize) -> Self {
        Self {
            board: Board::new(size),
            remaining: fleet_size,
            attacked: Grid::new(size, false),
        }
    }

    /// Board holding this side's ships.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board, used while ships are being placed.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Ships not yet sunk. Decremented once per sinking.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether the opponent has already fired at `coord`.
    pub fn was_attacked(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(*self.attacked.get(coord)?)
    }

    /// Cells attacked so far this game.
    pub fn attacked(&self) -> &Grid<bool> {
        &self.attacked
    }

    /// Take an attack at `coord`. Repeats are rejected before any state changes.
    pub fn receive_attack(&mut self, coord: Coord) -> Result<AttackOutcome, GameError> {
        if self.was_attacked(coord)? {
            return Err(GameError::RepeatedAttack(coord));
        }
        let outcome = resolve_attack(&mut self.board, coord)?;
        self.attacked.set(coord, true)?;
        if outcome.sunk_ship().is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        Ok(outcome)
    }
}
