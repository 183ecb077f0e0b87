//! Ship definitions and per-ship placement records.

use crate::grid::Coordinate;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length. Multiple fleet entries may share a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type. Length must be at least 1; enforced when the
    /// ship is placed.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.length)
    }
}

/// A ship placed on the board, with the cells it occupies and a per-cell
/// hit flag. This is the defender-side record used to detect sinking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    ship_type: ShipType,
    cells: Vec<Coordinate>,
    hit: Vec<bool>,
}

impl PlacedShip {
    pub(crate) fn new(ship_type: ShipType, cells: Vec<Coordinate>) -> Self {
        let hit = vec![false; cells.len()];
        Self {
            ship_type,
            cells,
            hit,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Cells occupied by this ship.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Register a hit at `coord`. Returns `true` if the ship occupies the
    /// cell and the hit was recorded.
    pub(crate) fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.cells.iter().position(|&c| c == coord) {
            Some(idx) => {
                self.hit[idx] = true;
                true
            }
            None => false,
        }
    }

    /// True when every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hit.iter().all(|&h| h)
    }

    pub fn hits(&self) -> usize {
        self.hit.iter().filter(|&&h| h).count()
    }
}
