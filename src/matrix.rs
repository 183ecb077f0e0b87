//! Ship-placement scoring matrices.
//!
//! For every open cell the density matrix counts how many (ship,
//! orientation, offset) triples among the remaining fleet put a legal
//! segment through that cell, where a segment is legal when it lies in
//! bounds and crosses no miss or sunk cell. The hunt matrix uses the same
//! enumeration but only counts segments that also pass through at least one
//! known hit, so its scores concentrate around partially-hit ships.
//!
//! After a shot only cells sharing the shot's row or column within
//! `longest ship - 1` can change score, so per-shot recalculation is
//! bounded to that window. A full recalculation is needed only when the
//! fleet composition changes, i.e. when a ship sinks.

use crate::grid::{CellStatus, Coordinate, Grid};
use crate::ship::Orientation;

/// Sentinel values used by [`DensityMatrix::extract_score_grid`].
pub const SCORE_HIT: i32 = -1;
pub const SCORE_MISS: i32 = -2;
pub const SCORE_SUNK: i32 = -3;

/// Scan a segment of `len` cells starting at `start`. Legal when every cell
/// is in bounds and none is a miss or sunk cell; with `require_hit` the
/// segment must additionally cover at least one hit.
fn segment_is_legal(
    statuses: &Grid<CellStatus>,
    start: Coordinate,
    len: usize,
    orient: Orientation,
    require_hit: bool,
) -> bool {
    let mut saw_hit = false;
    for k in 0..len {
        let cell = match orient {
            Orientation::Horizontal => Coordinate::new(start.col + k, start.row),
            Orientation::Vertical => Coordinate::new(start.col, start.row + k),
        };
        match statuses.get(cell) {
            Ok(status) if !status.blocks_segment() => {
                if *status == CellStatus::Hit {
                    saw_hit = true;
                }
            }
            _ => return false,
        }
    }
    !require_hit || saw_hit
}

/// Count legal segments of `len` covering `cell`, one per (orientation,
/// offset). A ship of length L can cover a fixed cell at L offsets per
/// orientation.
fn count_segments(
    statuses: &Grid<CellStatus>,
    cell: Coordinate,
    len: usize,
    require_hit: bool,
) -> u32 {
    let mut count = 0;
    for offset in 0..len {
        if cell.col >= offset {
            let start = Coordinate::new(cell.col - offset, cell.row);
            if segment_is_legal(statuses, start, len, Orientation::Horizontal, require_hit) {
                count += 1;
            }
        }
        if cell.row >= offset {
            let start = Coordinate::new(cell.col, cell.row - offset);
            if segment_is_legal(statuses, start, len, Orientation::Vertical, require_hit) {
                count += 1;
            }
        }
    }
    count
}

/// Shared score storage and recalculation for both matrix flavors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreMatrix {
    scores: Grid<u32>,
    require_hit: bool,
}

impl ScoreMatrix {
    fn new(
        statuses: &Grid<CellStatus>,
        remaining_lengths: &[usize],
        require_hit: bool,
    ) -> Self {
        let mut matrix = ScoreMatrix {
            scores: Grid::new(statuses.width(), statuses.height(), 0),
            require_hit,
        };
        matrix.recalculate_all(statuses, remaining_lengths);
        matrix
    }

    fn score(&self, coord: Coordinate) -> u32 {
        *self.scores.get(coord).unwrap_or(&0)
    }

    fn recalculate_cell(
        &mut self,
        statuses: &Grid<CellStatus>,
        remaining_lengths: &[usize],
        cell: Coordinate,
    ) {
        // Non-open cells carry no score; status dominates.
        let score = match statuses.get(cell) {
            Ok(status) if status.is_open() => remaining_lengths
                .iter()
                .filter(|&&len| len > 0)
                .map(|&len| count_segments(statuses, cell, len, self.require_hit))
                .sum(),
            _ => 0,
        };
        let _ = self.scores.set(cell, score);
    }

    fn recalculate_all(&mut self, statuses: &Grid<CellStatus>, remaining_lengths: &[usize]) {
        for cell in statuses.coords() {
            self.recalculate_cell(statuses, remaining_lengths, cell);
        }
    }

    /// Recalculate the row and column of `shot` within the reach of the
    /// longest remaining ship. Matches a full recalculation exactly for any
    /// shot that does not change the fleet composition.
    fn recalculate_around(
        &mut self,
        statuses: &Grid<CellStatus>,
        remaining_lengths: &[usize],
        shot: Coordinate,
    ) {
        let longest = remaining_lengths.iter().copied().max().unwrap_or(0);
        let reach = longest.saturating_sub(1);
        if statuses.width() == 0 || statuses.height() == 0 {
            return;
        }
        let min_col = shot.col.saturating_sub(reach);
        let max_col = (shot.col + reach).min(statuses.width() - 1);
        for col in min_col..=max_col {
            self.recalculate_cell(statuses, remaining_lengths, Coordinate::new(col, shot.row));
        }
        let min_row = shot.row.saturating_sub(reach);
        let max_row = (shot.row + reach).min(statuses.height() - 1);
        for row in min_row..=max_row {
            if row != shot.row {
                self.recalculate_cell(statuses, remaining_lengths, Coordinate::new(shot.col, row));
            }
        }
    }
}

/// Per-cell count of legal remaining-fleet segments, ignoring hit
/// information. Drives targeting when no hits are outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityMatrix {
    inner: ScoreMatrix,
}

impl DensityMatrix {
    /// Build and fully compute the matrix for the current board view.
    pub fn new(statuses: &Grid<CellStatus>, remaining_lengths: &[usize]) -> Self {
        DensityMatrix {
            inner: ScoreMatrix::new(statuses, remaining_lengths, false),
        }
    }

    /// Score of a cell. Zero for any non-open cell.
    pub fn score(&self, coord: Coordinate) -> u32 {
        self.inner.score(coord)
    }

    /// Full recomputation. Needed at game start and whenever a ship sinks.
    pub fn recalculate_all(&mut self, statuses: &Grid<CellStatus>, remaining_lengths: &[usize]) {
        self.inner.recalculate_all(statuses, remaining_lengths);
    }

    /// Bounded incremental recomputation after a shot at `shot`.
    pub fn recalculate_around(
        &mut self,
        statuses: &Grid<CellStatus>,
        remaining_lengths: &[usize],
        shot: Coordinate,
    ) {
        self.inner.recalculate_around(statuses, remaining_lengths, shot);
    }

    /// Diagnostic export: density scores for open cells, sentinels for the
    /// rest (−1 hit, −2 miss, −3 sunk). Rows indexed first.
    pub fn extract_score_grid(&self, statuses: &Grid<CellStatus>) -> Vec<Vec<i32>> {
        (0..statuses.height())
            .map(|row| {
                (0..statuses.width())
                    .map(|col| {
                        let cell = Coordinate::new(col, row);
                        match statuses.get(cell) {
                            Ok(CellStatus::Hit) => SCORE_HIT,
                            Ok(CellStatus::Miss) => SCORE_MISS,
                            Ok(CellStatus::Sunk) => SCORE_SUNK,
                            _ => self.score(cell) as i32,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Density variant restricted to segments consistent with at least one
/// known hit. Nonzero only near unresolved hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntMatrix {
    inner: ScoreMatrix,
}

impl HuntMatrix {
    /// Build and fully compute the matrix for the current board view.
    pub fn new(statuses: &Grid<CellStatus>, remaining_lengths: &[usize]) -> Self {
        HuntMatrix {
            inner: ScoreMatrix::new(statuses, remaining_lengths, true),
        }
    }

    /// Score of a cell. Zero for any non-open cell.
    pub fn score(&self, coord: Coordinate) -> u32 {
        self.inner.score(coord)
    }

    /// Full recomputation. Needed whenever a ship sinks.
    pub fn recalculate_all(&mut self, statuses: &Grid<CellStatus>, remaining_lengths: &[usize]) {
        self.inner.recalculate_all(statuses, remaining_lengths);
    }

    /// Bounded incremental recomputation after a shot at `shot`.
    pub fn recalculate_around(
        &mut self,
        statuses: &Grid<CellStatus>,
        remaining_lengths: &[usize],
        shot: Coordinate,
    ) {
        self.inner.recalculate_around(statuses, remaining_lengths, shot);
    }
}
