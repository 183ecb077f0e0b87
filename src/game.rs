//! Aggregate root tying a defender board to an attacking controller.

use crate::ai::AiController;
use crate::board::Board;
use crate::common::{GameError, TurnReport};
use crate::config::GameConfig;
use crate::grid::Coordinate;
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every defending ship has been sunk.
    FleetDestroyed,
}

/// One CPU-versus-layout game: the defender's board (real ship positions)
/// and the CPU controller attacking it. Owns everything explicitly; callers
/// pace turns themselves by deciding when to call [`take_turn`].
///
/// [`take_turn`]: BattleshipGame::take_turn
pub struct BattleshipGame {
    board: Board,
    ai: AiController,
}

impl BattleshipGame {
    /// Create a game with an empty defender board. Ships must be placed
    /// before the first turn, either explicitly or randomly.
    pub fn new(config: &GameConfig, difficulty: f64) -> Self {
        let board = Board::new(config);
        let ai = AiController::new(&board, difficulty);
        BattleshipGame { board, ai }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ai(&self) -> &AiController {
        &self.ai
    }

    /// Place one defending ship on explicit cells.
    pub fn place_defender_ship(
        &mut self,
        ship_index: usize,
        cells: &[Coordinate],
    ) -> Result<(), GameError> {
        self.board.place_ship(ship_index, cells)
    }

    /// Randomly place every defending ship not yet on the board.
    pub fn place_defender_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.board.place_fleet_randomly(rng)
    }

    /// Play one CPU turn and report the shot for the caller to render.
    pub fn take_turn<R: Rng>(&mut self, rng: &mut R) -> Result<TurnReport, GameError> {
        self.ai.take_turn(&mut self.board, rng)
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::FleetDestroyed
        } else {
            GameStatus::InProgress
        }
    }

    /// Diagnostic export of the density scores with status sentinels.
    pub fn extract_score_grid(&self) -> Vec<Vec<i32>> {
        self.ai.extract_score_grid(&self.board)
    }
}
