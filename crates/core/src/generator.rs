//! Generator module - match-free initial boards
//!
//! Fills the board row-major from a seeded shuffled candidate pool,
//! never completing a run of 3 against the two left or two up neighbors,
//! then verifies at least one adjacent swap would create a match. If the
//! board happens to have no legal move, a single cell is rewritten to
//! create one without breaking the no-match invariant.
//!
//! Whole-grid generation retries up to [`GENERATION_RETRY_LIMIT`] times;
//! after that the kind pool is widened by one kind and the budget is spent
//! once more. Running out entirely is a defect signal, never an infinite
//! loop.

use arrayvec::ArrayVec;
use gem_crush_types::{
    Position, TileKind, GENERATION_RETRY_LIMIT, MAX_BOARD_DIM, MAX_TILE_KINDS, MIN_BOARD_DIM,
    MIN_TILE_KINDS,
};
use thiserror::Error;

use crate::grid::Grid;
use crate::matcher;
use crate::rng::GemRng;

/// Board generation failures - fatal for the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("board dimensions {width}x{height} outside supported range")]
    BadDimensions { width: u8, height: u8 },
    #[error("kind pool of {kind_count} outside supported range")]
    BadKindPool { kind_count: u8 },
    #[error("no valid board found within the retry budget, even after widening the pool")]
    Exhausted,
}

/// Generate a board satisfying the stable invariant with at least one
/// legal move
///
/// Deterministic for a given (dimensions, pool, RNG state).
pub fn generate(
    width: u8,
    height: u8,
    kind_count: u8,
    rng: &mut GemRng,
) -> Result<Grid, GenerateError> {
    if width < MIN_BOARD_DIM
        || width > MAX_BOARD_DIM
        || height < MIN_BOARD_DIM
        || height > MAX_BOARD_DIM
    {
        return Err(GenerateError::BadDimensions { width, height });
    }
    if !(MIN_TILE_KINDS..=MAX_TILE_KINDS).contains(&kind_count) {
        return Err(GenerateError::BadKindPool { kind_count });
    }

    // Second pass runs with a pool widened by one kind (capped at 7).
    let pools = [kind_count, (kind_count + 1).min(MAX_TILE_KINDS)];
    for pool in pools {
        for _ in 0..GENERATION_RETRY_LIMIT {
            let Some(mut grid) = try_fill(width, height, pool, rng) else {
                continue;
            };
            if find_legal_move(&grid).is_none() && !force_legal_move(&mut grid, pool) {
                continue;
            }
            debug_assert!(matcher::is_stable(&grid) && grid.is_settled());
            return Ok(grid);
        }
    }
    Err(GenerateError::Exhausted)
}

/// One constrained fill attempt; `None` when some cell has no candidate
///
/// With a pool of >= 3 kinds a candidate always exists (each cell is
/// constrained by at most two kinds), so `None` only guards smaller
/// pools reached through future constraint changes.
fn try_fill(width: u8, height: u8, kind_count: u8, rng: &mut GemRng) -> Option<Grid> {
    let mut grid = Grid::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let pos = Position::new(col, row);
            let mut candidates: ArrayVec<TileKind, { MAX_TILE_KINDS as usize }> =
                TileKind::ALL[..kind_count as usize]
                    .iter()
                    .copied()
                    .filter(|&k| !completes_run(&grid, pos, k))
                    .collect();
            if candidates.is_empty() {
                return None;
            }
            rng.shuffle(&mut candidates);
            grid.set(pos, Some(candidates[0]));
        }
    }
    Some(grid)
}

/// Would placing `kind` at `pos` complete a run of 3 with the two cells
/// to its left or the two cells above it? Only those neighbors are
/// populated during row-major fill.
fn completes_run(grid: &Grid, pos: Position, kind: TileKind) -> bool {
    let left = |n: u8| {
        pos.col
            .checked_sub(n)
            .and_then(|c| grid.kind_at(Position::new(c, pos.row)))
    };
    let up = |n: u8| {
        pos.row
            .checked_sub(n)
            .and_then(|r| grid.kind_at(Position::new(pos.col, r)))
    };
    (left(1) == Some(kind) && left(2) == Some(kind))
        || (up(1) == Some(kind) && up(2) == Some(kind))
}

/// Find one adjacent swap that would create a match, if any exists
///
/// Tries each cell's right and down neighbor (every unordered adjacent
/// pair exactly once), testing on a scratch copy.
pub fn find_legal_move(grid: &Grid) -> Option<(Position, Position)> {
    let mut scratch = grid.clone();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let a = Position::new(col, row);
            for b in [Position::new(col + 1, row), Position::new(col, row + 1)] {
                if !grid.in_bounds(b) {
                    continue;
                }
                scratch.swap(a, b);
                let found = matcher::has_match(&scratch);
                scratch.swap(a, b);
                if found {
                    return Some((a, b));
                }
            }
        }
    }
    None
}

/// Rewrite one cell so a legal move exists, keeping the grid match-free
///
/// Takes the first (cell, kind) whose placement preserves the stable
/// invariant and yields a legal move. Returns false when no single-cell
/// edit works (the caller regenerates).
fn force_legal_move(grid: &mut Grid, kind_count: u8) -> bool {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pos = Position::new(col, row);
            let original = grid.get(pos).flatten();
            for &kind in &TileKind::ALL[..kind_count as usize] {
                if Some(kind) == original {
                    continue;
                }
                grid.set(pos, Some(kind));
                if matcher::is_stable(grid) && find_legal_move(grid).is_some() {
                    return true;
                }
            }
            grid.set(pos, original);
        }
    }
    false
}
