//! A player's placement board: which ship, if any, occupies each cell.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{GameError, PlacementError};
use crate::grid::{Coord, Grid};
use crate::ship::{Orientation, Ship, ShipId, ShipType};

/// Contents of one placement-board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship(ShipId),
}

/// Ship occupancy grid plus the ships it references.
#[derive(Clone)]
pub struct Board {
    grid: Grid<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// An empty `size × size` board.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size, Cell::Empty),
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        Ok(*self.grid.get(coord)?)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, GameError> {
        self.ships.get(id.0).ok_or(GameError::UnknownShip(id))
    }

    pub(crate) fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, GameError> {
        self.ships.get_mut(id.0).ok_or(GameError::UnknownShip(id))
    }

    /// Number of ships not yet sunk.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Why `ship` cannot be placed, if it cannot. Never mutates.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), PlacementError> {
        let anchor = ship.anchor();
        let size = self.size();
        // Bounds first, from the anchor and length alone.
        if anchor.col >= size || anchor.row >= size {
            return Err(PlacementError::OutOfBounds);
        }
        match ship.end_exclusive() {
            Some(end) if end <= size => {}
            _ => return Err(PlacementError::OutOfBounds),
        }
        for coord in ship.occupied_cells() {
            if self.grid.get(coord) != Ok(&Cell::Empty) {
                return Err(PlacementError::Overlaps);
            }
        }
        Ok(())
    }

    /// Whether `ship` fits on the board without overlapping another ship.
    pub fn can_place(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Commit `ship` to the board. A rejected ship leaves the board unchanged.
    pub fn place(&mut self, ship: Ship) -> Result<ShipId, GameError> {
        self.check_placement(&ship)?;
        let id = ShipId(self.ships.len());
        for coord in ship.occupied_cells() {
            self.grid.set(coord, Cell::Ship(id))?;
        }
        log::debug!("placed {:?} as #{}", ship, id.0);
        self.ships.push(ship);
        Ok(id)
    }

    /// Whether any anchor and orientation would accept a ship of `ship_type`.
    pub fn has_room_for(&self, ship_type: ShipType) -> bool {
        let size = self.size();
        (0..size).any(|row| {
            (0..size).any(|col| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .any(|o| self.can_place(&Ship::new(ship_type, Coord::new(col, row), o)))
            })
        })
    }

    /// Sample anchors and orientations uniformly until one is valid, then place it.
    ///
    /// Fails with [`PlacementError::NoRoom`] only when no valid placement exists.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<ShipId, GameError> {
        if !self.has_room_for(ship_type) {
            return Err(PlacementError::NoRoom.into());
        }
        let size = self.size();
        loop {
            let anchor = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random_bool(0.5) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let ship = Ship::new(ship_type, anchor, orientation);
            if self.can_place(&ship) {
                return self.place(ship);
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..self.size() {
            write!(f, "  ")?;
            for col in 0..self.size() {
                let ch = match self.grid.get(Coord::new(col, row)) {
                    Ok(Cell::Ship(id)) => (b'0' + (id.0 % 10) as u8) as char,
                    _ => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
