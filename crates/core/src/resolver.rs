//! Resolver module - one cascade round
//!
//! A round is: clear every matched cell, compact each column downward
//! (gravity), refill the holes from the top with fresh draws, then
//! re-detect. Columns are processed independently, so left-to-right
//! order can never affect the outcome. Refill draws are deliberately
//! unconstrained - new matches from refill are what makes cascades.

use gem_crush_types::Position;

use crate::grid::Grid;
use crate::matcher::{self, MatchRun};
use crate::rng::GemRng;

/// Outcome of one cascade round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Distinct cells cleared this round
    pub cleared: usize,
    /// Cells that sat on both a row run and a column run
    pub crossings: usize,
    /// Matches created by the refill; input to the next round
    pub next_matches: Vec<MatchRun>,
    /// True when the refill produced new matches and the caller loops
    pub cascaded: bool,
}

/// Run one full cascade round over `matches`
///
/// The grid is left settled and hole-free; whether it is match-free is
/// exactly `!report.cascaded`.
pub fn resolve_round(
    grid: &mut Grid,
    matches: &[MatchRun],
    kind_count: u8,
    rng: &mut GemRng,
) -> RoundReport {
    let (cleared, crossings) = clear_matches(grid, matches);
    apply_gravity(grid);
    refill(grid, kind_count, rng);
    let next_matches = matcher::detect(grid);
    let cascaded = !next_matches.is_empty();
    RoundReport {
        cleared,
        crossings,
        next_matches,
        cascaded,
    }
}

/// Mark every matched cell empty
///
/// Returns (distinct cells cleared, multiply-counted cells) for scoring.
pub fn clear_matches(grid: &mut Grid, matches: &[MatchRun]) -> (usize, usize) {
    let (cells, crossings) = matcher::clear_set(matches);
    for pos in &cells {
        grid.set(*pos, None);
    }
    (cells.len(), crossings)
}

/// Compact each column downward, preserving relative vertical order
///
/// Two-pointer pass per column, bottom to top: filled cells slide to the
/// lowest open row, everything above the write pointer becomes empty.
pub fn apply_gravity(grid: &mut Grid) {
    for col in 0..grid.width() {
        let mut write_row = grid.height();
        for read_row in (0..grid.height()).rev() {
            let cell = grid.get(Position::new(col, read_row)).flatten();
            if let Some(kind) = cell {
                write_row -= 1;
                if write_row != read_row {
                    grid.set(Position::new(col, write_row), Some(kind));
                }
            }
        }
        for row in 0..write_row {
            grid.set(Position::new(col, row), None);
        }
    }
}

/// Fill every remaining hole from the top with fresh uniform draws
///
/// Draw order is fixed (column-major, top to bottom) so refills replay
/// from the seed. A fully cleared column refills through this same path.
pub fn refill(grid: &mut Grid, kind_count: u8, rng: &mut GemRng) {
    for col in 0..grid.width() {
        for row in 0..grid.height() {
            let pos = Position::new(col, row);
            if grid.get(pos) == Some(None) {
                grid.set(pos, Some(rng.draw_kind(kind_count)));
            }
        }
    }
}
