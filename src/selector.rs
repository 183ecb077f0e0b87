//! Target selection: candidate bookkeeping and the difficulty-weighted pick.

use crate::common::{GameError, ShotResult};
use crate::grid::{CellStatus, Coordinate, Grid};
use crate::matrix::{DensityMatrix, HuntMatrix};
use rand::seq::SliceRandom;
use rand::Rng;

/// A single row or column, used to restrict hunting after two hits land on
/// the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row(usize),
    Column(usize),
}

impl Line {
    fn contains(&self, coord: Coordinate) -> bool {
        match self {
            Line::Row(row) => coord.row == *row,
            Line::Column(col) => coord.col == *col,
        }
    }

    /// The line two coordinates share, preferring the row when both match.
    fn shared(a: Coordinate, b: Coordinate) -> Option<Line> {
        if a.row == b.row {
            Some(Line::Row(a.row))
        } else if a.col == b.col {
            Some(Line::Column(a.col))
        } else {
            None
        }
    }
}

/// Chooses the next cell to fire at.
///
/// Keeps the candidate set (exactly the open cells) and the hunt candidates
/// (open cells with a nonzero hunt score, optionally restricted to the line
/// shared by the two most recent hits). Selection shuffles the pool, stable
/// sorts it by score descending so ties keep the shuffled order, then picks
/// uniformly from the top slice whose size the difficulty controls.
pub struct TargetSelector {
    candidates: Vec<Coordinate>,
    hunt_candidates: Vec<Coordinate>,
    related_line: Option<Line>,
    last_hit: Option<Coordinate>,
    last_was_hit: bool,
}

impl TargetSelector {
    /// Build a selector whose candidates are the currently open cells.
    pub fn new(statuses: &Grid<CellStatus>) -> Self {
        let candidates = statuses
            .coords()
            .filter(|&c| statuses.get(c).is_ok_and(|s| s.is_open()))
            .collect();
        TargetSelector {
            candidates,
            hunt_candidates: Vec::new(),
            related_line: None,
            last_hit: None,
            last_was_hit: false,
        }
    }

    /// Open cells eligible for targeting.
    pub fn candidates(&self) -> &[Coordinate] {
        &self.candidates
    }

    /// Candidates currently prioritized by hunt scoring.
    pub fn hunt_candidates(&self) -> &[Coordinate] {
        &self.hunt_candidates
    }

    /// Pick the next target and remove it from the candidate sets.
    ///
    /// Difficulty 1.0 always picks the highest-scoring candidate; 0.0 picks
    /// uniformly over the whole pool; intermediate values narrow the
    /// eligible top slice.
    pub fn select_target<R: Rng>(
        &mut self,
        density: &DensityMatrix,
        hunt: &HuntMatrix,
        difficulty: f64,
        rng: &mut R,
    ) -> Result<Coordinate, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidatesRemaining);
        }
        let coord = if self.hunt_candidates.is_empty() {
            pick_weighted(&self.candidates, |c| density.score(c), difficulty, rng)
        } else {
            pick_weighted(&self.hunt_candidates, |c| hunt.score(c), difficulty, rng)
        };
        self.candidates.retain(|&c| c != coord);
        self.hunt_candidates.retain(|&c| c != coord);
        Ok(coord)
    }

    /// Update hunting state from a shot outcome. Must be called after the
    /// matrices have been recalculated for that shot.
    pub fn record_outcome(
        &mut self,
        coord: Coordinate,
        result: ShotResult,
        hunt: &HuntMatrix,
    ) {
        match result {
            ShotResult::Sunk(_) => {
                // Fleet changed; drop the related-shot context. Residual hit
                // clusters from other ships survive in the hunt matrix.
                self.related_line = None;
                self.last_hit = None;
                self.last_was_hit = false;
                self.rebuild_hunt_candidates(hunt, None);
            }
            ShotResult::Hit => {
                let line = self
                    .last_hit
                    .filter(|_| self.last_was_hit)
                    .and_then(|prev| Line::shared(prev, coord));
                match line {
                    Some(line) => {
                        self.related_line = Some(line);
                        self.rebuild_hunt_candidates(hunt, Some(line));
                        if self.hunt_candidates.is_empty() {
                            self.related_line = None;
                            self.rebuild_hunt_candidates(hunt, None);
                        }
                    }
                    None => self.rebuild_hunt_candidates(hunt, None),
                }
                self.last_hit = Some(coord);
                self.last_was_hit = true;
            }
            ShotResult::Miss => {
                // The ship may extend past the other end of a hit pair, so
                // search the shared line once more before giving it up.
                match self.related_line.take() {
                    Some(line) => {
                        self.rebuild_hunt_candidates(hunt, Some(line));
                        if self.hunt_candidates.is_empty() {
                            self.rebuild_hunt_candidates(hunt, None);
                        }
                    }
                    None => self.rebuild_hunt_candidates(hunt, None),
                }
                self.last_was_hit = false;
            }
        }
    }

    fn rebuild_hunt_candidates(&mut self, hunt: &HuntMatrix, line: Option<Line>) {
        self.hunt_candidates = self
            .candidates
            .iter()
            .copied()
            .filter(|&c| hunt.score(c) > 0)
            .filter(|&c| line.is_none_or(|l| l.contains(c)))
            .collect();
    }
}

/// Shuffle, stable-sort descending by score, then pick uniformly from the
/// top `ceil(count × (1 − difficulty))` entries (at least one).
fn pick_weighted<R: Rng>(
    pool: &[Coordinate],
    score: impl Fn(Coordinate) -> u32,
    difficulty: f64,
    rng: &mut R,
) -> Coordinate {
    let mut pool: Vec<Coordinate> = pool.to_vec();
    pool.shuffle(rng);
    pool.sort_by(|a, b| score(*b).cmp(&score(*a)));
    let difficulty = difficulty.clamp(0.0, 1.0);
    let slice = ((pool.len() as f64) * (1.0 - difficulty)).ceil() as usize;
    let slice = slice.clamp(1, pool.len());
    pool[rng.random_range(0..slice)]
}
