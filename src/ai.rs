//! Turn orchestration for the CPU opponent.

use crate::board::Board;
use crate::common::{GameError, ShotResult, TurnReport};
use crate::matrix::{DensityMatrix, HuntMatrix};
use crate::selector::TargetSelector;
use rand::Rng;

/// Drives one side of the game: selects a target, fires at the opponent
/// board, and keeps the scoring matrices current.
pub struct AiController {
    density: DensityMatrix,
    hunt: HuntMatrix,
    selector: TargetSelector,
    difficulty: f64,
}

impl AiController {
    /// Create a controller targeting `board`, with `difficulty` in [0, 1]:
    /// 1.0 is pure greedy, 0.0 is pure random. Values outside the range are
    /// clamped.
    pub fn new(board: &Board, difficulty: f64) -> Self {
        let lengths = board.remaining_ship_lengths();
        AiController {
            density: DensityMatrix::new(board.statuses(), &lengths),
            hunt: HuntMatrix::new(board.statuses(), &lengths),
            selector: TargetSelector::new(board.statuses()),
            difficulty: difficulty.clamp(0.0, 1.0),
        }
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: f64) {
        self.difficulty = difficulty.clamp(0.0, 1.0);
    }

    pub fn density(&self) -> &DensityMatrix {
        &self.density
    }

    pub fn hunt(&self) -> &HuntMatrix {
        &self.hunt
    }

    pub fn selector(&self) -> &TargetSelector {
        &self.selector
    }

    /// Play one turn: select a target, fire, and fold the outcome back into
    /// the matrices and candidate sets. A sunk ship changes the fleet
    /// composition, which forces a full matrix recomputation; any other
    /// shot only needs the bounded window around it.
    pub fn take_turn<R: Rng>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        let coord = self
            .selector
            .select_target(&self.density, &self.hunt, self.difficulty, rng)?;
        let result = board.fire_at(coord)?;
        let lengths = board.remaining_ship_lengths();
        match result {
            ShotResult::Sunk(_) => {
                self.density.recalculate_all(board.statuses(), &lengths);
                self.hunt.recalculate_all(board.statuses(), &lengths);
            }
            _ => {
                self.density
                    .recalculate_around(board.statuses(), &lengths, coord);
                self.hunt
                    .recalculate_around(board.statuses(), &lengths, coord);
            }
        }
        self.selector.record_outcome(coord, result, &self.hunt);
        Ok(TurnReport {
            coordinate: coord,
            result,
        })
    }

    /// Diagnostic export of the density scores with status sentinels.
    pub fn extract_score_grid(&self, board: &Board) -> Vec<Vec<i32>> {
        self.density.extract_score_grid(board.statuses())
    }
}
