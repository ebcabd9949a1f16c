//! Ship definitions and their geometry on a board.

use alloc::vec::Vec;
use core::fmt;

use crate::grid::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightward from the anchor.
    Horizontal,
    /// Extends downward from the anchor.
    Vertical,
}

impl Orientation {
    /// Orientation implied by two selected cells: vertical iff they share a column.
    pub fn between(anchor: Coord, end: Coord) -> Self {
        if anchor.col == end.col {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship in its board's ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position in the board's ship list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship with an anchor, an orientation and a hit counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    anchor: Coord,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// An undamaged ship anchored at `anchor`. Geometry is not checked here; see
    /// [`Board::can_place`](crate::Board::can_place).
    pub fn new(ship_type: ShipType, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            ship_type,
            anchor,
            orientation,
            hits: 0,
        }
    }

    /// Type the ship was built from.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Length of the ship.
    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// First cell of the ship.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cell one past the far end along the ship's axis, or `None` on overflow.
    pub(crate) fn end_exclusive(&self) -> Option<usize> {
        match self.orientation {
            Orientation::Horizontal => self.anchor.col.checked_add(self.length()),
            Orientation::Vertical => self.anchor.row.checked_add(self.length()),
        }
    }

    /// Cells covered by the ship, ordered away from the anchor.
    pub fn occupied_cells(&self) -> Vec<Coord> {
        let Coord { col, row } = self.anchor;
        (0..self.length())
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coord::new(col + i, row),
                Orientation::Vertical => Coord::new(col, row + i),
            })
            .collect()
    }

    /// Whether every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length()
    }

    /// Count one hit. Returns `true` only when this hit sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        self.is_sunk()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", anchor: {}, orientation: {:?}, hits: {}/{} }}",
            self.name(),
            self.anchor,
            self.orientation,
            self.hits,
            self.length(),
        )
    }
}
