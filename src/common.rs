//! Common types: the error taxonomy and shot outcomes.

use crate::grid::{Coordinate, GridError};
use crate::ship::ShipType;
use core::fmt;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// No ship occupies the cell.
    Miss,
    /// A ship occupies the cell and still has unhit segments elsewhere.
    Hit,
    /// The shot destroyed the last remaining segment of this ship.
    Sunk(ShipType),
}

impl ShotResult {
    pub fn was_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    /// The ship sunk by this shot, if any.
    pub fn ship_sunk(&self) -> Option<ShipType> {
        match self {
            ShotResult::Sunk(ship) => Some(*ship),
            _ => None,
        }
    }
}

/// Outcome of one full CPU turn, for the caller to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub coordinate: Coordinate,
    pub result: ShotResult,
}

/// Errors returned by game operations. All failures surface as values;
/// nothing is logged or retried internally beyond the bounded placement
/// retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid error (out-of-bounds coordinate).
    Grid(GridError),
    /// Ship placement violates contiguity, bounds, or overlap rules, or the
    /// cell count does not match the ship length. Recoverable: retry with
    /// different cells.
    InvalidPlacement { ship: ShipType, reason: &'static str },
    /// Target cell was already fired upon. Recoverable for external callers;
    /// an invariant violation when produced by the selector's own output.
    AlreadyFired(Coordinate),
    /// Selection was requested with no open cells left; the game should
    /// already have ended.
    NoCandidatesRemaining,
    /// Random fleet placement exhausted its retry budget. Fatal setup error:
    /// regenerate with a smaller fleet or a larger board.
    PlacementExhausted { ship: ShipType },
    /// Ship index outside the fleet definition.
    InvalidShipIndex(usize),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
            GameError::InvalidPlacement { ship, reason } => {
                write!(f, "Invalid placement for {}: {}", ship.name(), reason)
            }
            GameError::AlreadyFired(coord) => {
                write!(f, "Cell {} was already fired upon", coord)
            }
            GameError::NoCandidatesRemaining => {
                write!(f, "No open cells remain to target")
            }
            GameError::PlacementExhausted { ship } => {
                write!(
                    f,
                    "Could not find a legal random placement for {} within the retry budget",
                    ship.name()
                )
            }
            GameError::InvalidShipIndex(idx) => {
                write!(f, "Ship index {} is outside the fleet", idx)
            }
        }
    }
}

impl std::error::Error for GameError {}
