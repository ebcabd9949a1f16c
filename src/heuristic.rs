// Frequency-weighted targeting for the computer opponent.
//
// Every unattacked cell starts at weight 1 plus the number of times the human
// has put a ship there in earlier games. The computer fires at a heaviest
// cell, chosen uniformly among ties, and zeroes it.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::GameError;
use crate::grid::{Coord, Grid};
use crate::ship::Ship;

/// Base weight of every cell before histogram counts are added.
pub const BASE_WEIGHT: u32 = 1;

/// Cross-game per-cell occurrence counts. Only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Grid<u32>,
}

impl Histogram {
    /// All-zero counts for a `size × size` board.
    pub fn new(size: usize) -> Self {
        Self {
            counts: Grid::new(size, 0),
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.counts.size()
    }

    /// Count at `coord`.
    pub fn count(&self, coord: Coord) -> Result<u32, GameError> {
        Ok(*self.counts.get(coord)?)
    }

    /// The underlying count grid.
    pub fn counts(&self) -> &Grid<u32> {
        &self.counts
    }

    /// Add one to every cell `ship` occupies.
    pub fn record_placement(&mut self, ship: &Ship) -> Result<(), GameError> {
        for coord in ship.occupied_cells() {
            self.counts.increment(coord)?;
        }
        Ok(())
    }

    /// Add one to a single attacked cell.
    pub fn record_attack(&mut self, coord: Coord) -> Result<(), GameError> {
        Ok(self.counts.increment(coord)?)
    }

    /// Highest count and the cells holding it.
    pub fn peak(&self) -> (u32, Vec<Coord>) {
        self.counts.max_cells()
    }
}

/// Per-cell targeting priority. A weight of 0 means "already fired at".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightGrid {
    weights: Grid<u32>,
}

impl WeightGrid {
    /// Uniform weights of [`BASE_WEIGHT`].
    pub fn uniform(size: usize) -> Self {
        Self {
            weights: Grid::new(size, BASE_WEIGHT),
        }
    }

    /// Uniform weights raised by the placement histogram.
    pub fn seeded(histogram: &Histogram) -> Result<Self, GameError> {
        let mut grid = Self::uniform(histogram.size());
        grid.weights.add_grid(histogram.counts())?;
        Ok(grid)
    }

    /// Weight at `coord`.
    pub fn weight(&self, coord: Coord) -> Result<u32, GameError> {
        Ok(*self.weights.get(coord)?)
    }

    /// The underlying weight grid.
    pub fn weights(&self) -> &Grid<u32> {
        &self.weights
    }

    /// Mark `coord` as never to be selected again.
    pub fn exclude(&mut self, coord: Coord) -> Result<(), GameError> {
        Ok(self.weights.set(coord, 0)?)
    }

    /// Pick the next target and zero its weight.
    ///
    /// Returns [`GameError::DegenerateHeuristicState`] when every weight is 0.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let (max, candidates) = self.weights.max_cells();
        if max == 0 || candidates.is_empty() {
            log::warn!("maximum attack weight is 0; no cells left to target");
            return Err(GameError::DegenerateHeuristicState);
        }
        let target = candidates[rng.random_range(0..candidates.len())];
        self.exclude(target)?;
        log::debug!(
            "targeting {} (weight {}, {} tied)",
            target,
            max,
            candidates.len()
        );
        Ok(target)
    }
}
