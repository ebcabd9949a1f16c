//! A fixed-size square grid addressed by `(col, row)`.
//!
//! Cells are stored row-major in a flat `Vec`. Every access is bounds checked
//! and fails with [`GridError::OutOfBounds`] instead of clamping.

use alloc::vec::Vec;
use core::fmt;
use num_traits::PrimInt;

/// A board position. Both axes are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Build a coordinate from signed input, rejecting anything outside `[0, size)`.
    pub fn try_new(col: i64, row: i64, size: usize) -> Result<Self, GridError> {
        let in_range = |v: i64| v >= 0 && (v as u64) < size as u64;
        if in_range(col) && in_range(row) {
            Ok(Self::new(col as usize, row as usize))
        } else {
            Err(GridError::OutOfBounds { col, row, size })
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Errors returned by grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Column or row is outside `[0, size)`.
    OutOfBounds { col: i64, row: i64, size: usize },
    /// Two grids combined cell-wise have different sizes.
    SizeMismatch { left: usize, right: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { col, row, size } => {
                write!(f, "OutOfBounds: col={}, row={} on a {}x{} grid", col, row, size, size)
            }
            GridError::SizeMismatch { left, right } => {
                write!(f, "SizeMismatch: {}x{} vs {}x{}", left, left, right, right)
            }
        }
    }
}

/// A `size × size` container holding one `T` per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid where every cell holds `initial`.
    pub fn new(size: usize, initial: T) -> Self {
        Self {
            size,
            cells: alloc::vec![initial; size * size],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<T> Grid<T> {
    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.size && coord.row < self.size
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if self.contains(coord) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GridError::OutOfBounds {
                col: coord.col as i64,
                row: coord.row as i64,
                size: self.size,
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<&T, GridError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut T, GridError> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, coord: Coord, value: T) -> Result<(), GridError> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Iterator over `(coord, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i % size, i / size), cell))
    }
}

impl<T: PrimInt> Grid<T> {
    /// Add one to the cell at `coord`, saturating at `T::max_value()`.
    pub fn increment(&mut self, coord: Coord) -> Result<(), GridError> {
        let cell = self.get_mut(coord)?;
        *cell = cell.saturating_add(T::one());
        Ok(())
    }

    /// Cell-wise saturating add of `other` into `self`.
    pub fn add_grid(&mut self, other: &Grid<T>) -> Result<(), GridError> {
        if self.size != other.size {
            return Err(GridError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        for (cell, &add) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell = cell.saturating_add(add);
        }
        Ok(())
    }

    /// Maximum value and every coordinate attaining it, in row-major order.
    pub fn max_cells(&self) -> (T, Vec<Coord>) {
        let mut max = T::zero();
        let mut at = Vec::new();
        for (coord, &value) in self.cells() {
            if value > max {
                max = value;
                at.clear();
                at.push(coord);
            } else if value == max {
                at.push(coord);
            }
        }
        (max, at)
    }

    /// Sum of all cells, saturating.
    pub fn total(&self) -> T {
        self.cells
            .iter()
            .fold(T::zero(), |acc, &v| acc.saturating_add(v))
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size, self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
