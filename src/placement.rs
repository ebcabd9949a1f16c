//! Two-selection ship placement for the human player.
//!
//! Pending ships wait in a queue and are placed one at a time. The first
//! selection fixes the anchor, the second fixes the orientation: vertical when
//! both selections share a column, horizontal otherwise. The ship's length
//! always comes from its type.

use alloc::collections::VecDeque;
use rand::Rng;

use crate::board::Board;
use crate::common::{GameError, PlacementError};
use crate::grid::Coord;
use crate::ship::{Orientation, Ship, ShipId, ShipType};

/// Where the placement state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Nothing left to place.
    Idle,
    /// Waiting for the first selection of the front ship.
    AwaitingAnchor,
    /// Anchor chosen; waiting for the selection that fixes orientation.
    AwaitingEnd { anchor: Coord },
}

/// What one selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStep {
    Anchored { ship_type: ShipType, anchor: Coord },
    Placed { id: ShipId, ship: Ship },
    /// The ship did not fit; the same ship waits for a new anchor.
    Rejected { ship_type: ShipType, reason: PlacementError },
}

#[derive(Debug, Clone)]
pub struct PlacementQueue {
    pending: VecDeque<ShipType>,
    state: PlacementState,
}

impl PlacementQueue {
    pub fn new(fleet: &[ShipType]) -> Self {
        let pending: VecDeque<ShipType> = fleet.iter().copied().collect();
        let state = if pending.is_empty() {
            PlacementState::Idle
        } else {
            PlacementState::AwaitingAnchor
        };
        Self { pending, state }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// Ship currently being placed.
    pub fn current(&self) -> Option<ShipType> {
        self.pending.front().copied()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    fn advance(&mut self) {
        self.pending.pop_front();
        self.state = if self.pending.is_empty() {
            PlacementState::Idle
        } else {
            PlacementState::AwaitingAnchor
        };
    }

    /// Feed one selection on `board`.
    pub fn select(&mut self, coord: Coord, board: &mut Board) -> Result<PlacementStep, GameError> {
        let ship_type = self.current().ok_or(GameError::NotPlacing)?;
        board.cell(coord)?;
        match self.state {
            PlacementState::Idle => Err(GameError::NotPlacing),
            PlacementState::AwaitingAnchor => {
                self.state = PlacementState::AwaitingEnd { anchor: coord };
                Ok(PlacementStep::Anchored {
                    ship_type,
                    anchor: coord,
                })
            }
            PlacementState::AwaitingEnd { anchor } => {
                let ship = Ship::new(ship_type, anchor, Orientation::between(anchor, coord));
                match board.place(ship) {
                    Ok(id) => {
                        self.advance();
                        Ok(PlacementStep::Placed { id, ship })
                    }
                    Err(GameError::InvalidPlacement(reason)) => {
                        self.state = PlacementState::AwaitingAnchor;
                        Ok(PlacementStep::Rejected { ship_type, reason })
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Place the front ship at a random valid position, dropping any pending anchor.
    pub fn place_current_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<PlacementStep, GameError> {
        let ship_type = self.current().ok_or(GameError::NotPlacing)?;
        let id = board.place_random(rng, ship_type)?;
        let ship = *board.ship(id)?;
        self.advance();
        Ok(PlacementStep::Placed { id, ship })
    }
}
