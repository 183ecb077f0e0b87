//! Board and fleet configuration.

use crate::ship::ShipType;

/// Classic rules: 10×10 board, five ships.
pub const CLASSIC_BOARD_WIDTH: usize = 10;
pub const CLASSIC_BOARD_HEIGHT: usize = 10;
pub const CLASSIC_FLEET: [ShipType; 5] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Attempts allowed per ship when placing a fleet randomly before the
/// placement is declared exhausted.
pub const PLACEMENT_RETRY_BUDGET: usize = 20;

/// Board dimensions and fleet definition for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fleet: Vec<ShipType>,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, fleet: Vec<ShipType>) -> Self {
        Self {
            width,
            height,
            fleet,
        }
    }

    /// The classic 10×10 five-ship game.
    pub fn classic() -> Self {
        Self::new(
            CLASSIC_BOARD_WIDTH,
            CLASSIC_BOARD_HEIGHT,
            CLASSIC_FLEET.to_vec(),
        )
    }

    /// Length of the longest ship in the fleet, or 0 for an empty fleet.
    pub fn longest_ship(&self) -> usize {
        self.fleet.iter().map(|s| s.length()).max().unwrap_or(0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
