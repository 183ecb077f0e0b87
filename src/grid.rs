//! Runtime-sized cell grid and the coordinate/status vocabulary.
//!
//! Boards are `width × height` grids stored row-major on the heap, so the
//! same types serve the classic 10×10 game and arbitrary rectangular
//! boards. Accessors are fallible: an out-of-bounds coordinate is an error
//! value, never a panic.

use core::fmt;

/// A cell position: column (x) and row (y), both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    #[inline]
    pub fn new(col: usize, row: usize) -> Self {
        Coordinate { col, row }
    }

    /// Returns `true` when both coordinates share a row or a column.
    #[inline]
    pub fn same_line(&self, other: &Coordinate) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Attacker-visible state of a single cell. Statuses only move forward:
/// `Open` to `Miss` or `Hit`, and `Hit` to `Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Never fired upon.
    #[default]
    Open,
    /// Fired upon, no ship.
    Miss,
    /// Fired upon, hit a ship that is still afloat.
    Hit,
    /// Part of a destroyed ship.
    Sunk,
}

impl CellStatus {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, CellStatus::Open)
    }

    /// Returns `true` when no ship segment may pass through this cell:
    /// misses by definition, sunk cells because their ship is accounted for.
    #[inline]
    pub fn blocks_segment(&self) -> bool {
        matches!(self, CellStatus::Miss | CellStatus::Sunk)
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid's `width × height` bounds.
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                col,
                row,
                width,
                height,
            } => {
                write!(
                    f,
                    "OutOfBounds: ({}, {}) on a {}x{} grid",
                    col, row, width, height
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `width × height` grid of `T`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Reference to the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<&T, GridError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coordinate, value: T) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Iterator over every coordinate of the grid, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coordinate::new(col, row)))
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Result<usize, GridError> {
        if self.in_bounds(coord) {
            Ok(coord.row * self.width + coord.col)
        } else {
            Err(GridError::OutOfBounds {
                col: coord.col,
                row: coord.row,
                width: self.width,
                height: self.height,
            })
        }
    }
}
