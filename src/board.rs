//! Board state: ship occupancy and shot outcomes.
//!
//! The board is the source of truth for cell statuses. Statuses only move
//! forward: `Open` to `Miss` or `Hit`, and `Hit` to `Sunk` when the
//! occupying ship is destroyed.

use crate::common::{GameError, ShotResult};
use crate::config::{GameConfig, PLACEMENT_RETRY_BUDGET};
use crate::grid::{CellStatus, Coordinate, Grid};
use crate::ship::{Orientation, PlacedShip, ShipType};
use rand::Rng;

pub struct Board {
    width: usize,
    height: usize,
    fleet: Vec<ShipType>,
    statuses: Grid<CellStatus>,
    /// Fleet index of the ship occupying each cell, if any.
    occupancy: Grid<Option<usize>>,
    ships: Vec<Option<PlacedShip>>,
}

impl Board {
    /// Create an empty board for the given configuration (no ships placed).
    pub fn new(config: &GameConfig) -> Self {
        Board {
            width: config.width,
            height: config.height,
            fleet: config.fleet.clone(),
            statuses: Grid::new(config.width, config.height, CellStatus::Open),
            occupancy: Grid::new(config.width, config.height, None),
            ships: vec![None; config.fleet.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The fleet definition this board was created with.
    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Attacker-visible view of every cell.
    pub fn statuses(&self) -> &Grid<CellStatus> {
        &self.statuses
    }

    /// Status of a single cell.
    pub fn status(&self, coord: Coordinate) -> Result<CellStatus, GameError> {
        Ok(*self.statuses.get(coord)?)
    }

    /// Placement record for a ship, if it has been placed.
    pub fn ship(&self, ship_index: usize) -> Result<Option<&PlacedShip>, GameError> {
        self.ships
            .get(ship_index)
            .map(|slot| slot.as_ref())
            .ok_or(GameError::InvalidShipIndex(ship_index))
    }

    /// Returns `true` when every ship has been placed and sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty()
            && self
                .ships
                .iter()
                .all(|slot| slot.as_ref().is_some_and(|s| s.is_sunk()))
    }

    /// Lengths of ships not yet sunk, one entry per fleet slot. Sunk ships
    /// contribute a zero entry, which the scoring matrices skip.
    pub fn remaining_ship_lengths(&self) -> Vec<usize> {
        self.fleet
            .iter()
            .enumerate()
            .map(|(i, def)| match &self.ships[i] {
                Some(ship) if ship.is_sunk() => 0,
                _ => def.length(),
            })
            .collect()
    }

    /// Place a ship on the given cells. The cells must match the ship's
    /// length, lie in bounds, be contiguous along a single row or column
    /// with strictly increasing index, and not overlap another ship.
    pub fn place_ship(&mut self, ship_index: usize, cells: &[Coordinate]) -> Result<(), GameError> {
        let def = *self
            .fleet
            .get(ship_index)
            .ok_or(GameError::InvalidShipIndex(ship_index))?;
        if self.ships[ship_index].is_some() {
            return Err(GameError::InvalidPlacement {
                ship: def,
                reason: "ship is already placed",
            });
        }
        if def.length() == 0 || cells.len() != def.length() {
            return Err(GameError::InvalidPlacement {
                ship: def,
                reason: "cell count does not match ship length",
            });
        }
        for &cell in cells {
            if !self.statuses.in_bounds(cell) {
                return Err(GameError::InvalidPlacement {
                    ship: def,
                    reason: "cell out of bounds",
                });
            }
        }
        if !is_contiguous_line(cells) {
            return Err(GameError::InvalidPlacement {
                ship: def,
                reason: "cells are not a contiguous axis-aligned line",
            });
        }
        for &cell in cells {
            if self.occupancy.get(cell)?.is_some() {
                return Err(GameError::InvalidPlacement {
                    ship: def,
                    reason: "cell is occupied by another ship",
                });
            }
        }
        for &cell in cells {
            self.occupancy.set(cell, Some(ship_index))?;
        }
        self.ships[ship_index] = Some(PlacedShip::new(def, cells.to_vec()));
        Ok(())
    }

    /// Place every unplaced ship at a random legal position, retrying each
    /// ship up to [`PLACEMENT_RETRY_BUDGET`] times before giving up.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for ship_index in 0..self.fleet.len() {
            if self.ships[ship_index].is_some() {
                continue;
            }
            let def = self.fleet[ship_index];
            let mut placed = false;
            for _ in 0..PLACEMENT_RETRY_BUDGET {
                let orient = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let Some(cells) = self.random_segment(rng, def.length(), orient) else {
                    continue;
                };
                if cells
                    .iter()
                    .any(|&c| self.occupancy.get(c).is_ok_and(|o| o.is_some()))
                {
                    continue;
                }
                self.place_ship(ship_index, &cells)?;
                placed = true;
                break;
            }
            if !placed {
                return Err(GameError::PlacementExhausted { ship: def });
            }
        }
        Ok(())
    }

    /// Random in-bounds segment of `len` cells with the given orientation,
    /// or `None` if the board is too small for that orientation.
    fn random_segment<R: Rng>(
        &self,
        rng: &mut R,
        len: usize,
        orient: Orientation,
    ) -> Option<Vec<Coordinate>> {
        let (span, cross) = match orient {
            Orientation::Horizontal => (self.width.checked_sub(len)?, self.height),
            Orientation::Vertical => (self.height.checked_sub(len)?, self.width),
        };
        if cross == 0 {
            return None;
        }
        let start = rng.random_range(0..=span);
        let other = rng.random_range(0..cross);
        let cells = (0..len)
            .map(|i| match orient {
                Orientation::Horizontal => Coordinate::new(start + i, other),
                Orientation::Vertical => Coordinate::new(other, start + i),
            })
            .collect();
        Some(cells)
    }

    /// Fire at a cell, marking it hit or miss and reporting the outcome.
    /// Sinking a ship marks all of its cells `Sunk`.
    pub fn fire_at(&mut self, coord: Coordinate) -> Result<ShotResult, GameError> {
        if !self.status(coord)?.is_open() {
            return Err(GameError::AlreadyFired(coord));
        }
        let Some(ship_index) = *self.occupancy.get(coord)? else {
            self.statuses.set(coord, CellStatus::Miss)?;
            return Ok(ShotResult::Miss);
        };
        self.statuses.set(coord, CellStatus::Hit)?;
        let ship = self.ships[ship_index]
            .as_mut()
            .ok_or(GameError::InvalidShipIndex(ship_index))?;
        ship.register_hit(coord);
        if ship.is_sunk() {
            let ship_type = ship.ship_type();
            let cells: Vec<Coordinate> = ship.cells().to_vec();
            for cell in cells {
                self.statuses.set(cell, CellStatus::Sunk)?;
            }
            Ok(ShotResult::Sunk(ship_type))
        } else {
            Ok(ShotResult::Hit)
        }
    }
}

/// Cells form a single row or column with strictly increasing index by 1.
fn is_contiguous_line(cells: &[Coordinate]) -> bool {
    match cells {
        [] => false,
        [_] => true,
        [first, rest @ ..] => {
            let horizontal = rest
                .iter()
                .enumerate()
                .all(|(i, c)| c.row == first.row && c.col == first.col + i + 1);
            let vertical = rest
                .iter()
                .enumerate()
                .all(|(i, c)| c.col == first.col && c.row == first.row + i + 1);
            horizontal || vertical
        }
    }
}
