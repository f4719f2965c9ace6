//! Matcher module - full-span run detection
//!
//! Scans every row left-to-right and every column top-to-bottom,
//! accumulating equal-kind run lengths. A run of length >= 3 is emitted
//! once, covering its whole contiguous span: four in a row is one run of
//! length 4, never two overlapping runs of 3. A cell sitting on both a
//! qualifying row run and a qualifying column run belongs to two distinct
//! runs; [`clear_set`] reports such multiply-counted cells so scoring can
//! grant the intersection bonus.
//!
//! Output order is canonical (all row runs top-to-bottom, then all column
//! runs left-to-right), so two grids with equal contents always produce
//! equal match sets.

use arrayvec::ArrayVec;
use gem_crush_types::{Position, TileKind, MAX_BOARD_DIM, MIN_MATCH_RUN};

use crate::grid::Grid;

/// Scan direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// One matched run: >= 3 colinear, contiguous cells of one kind
///
/// Cells are ordered by increasing col (row runs) or increasing row
/// (column runs). A run never exceeds one board dimension, hence the
/// bounded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRun {
    pub kind: TileKind,
    pub axis: Axis,
    pub cells: ArrayVec<Position, { MAX_BOARD_DIM as usize }>,
}

impl MatchRun {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Detect every matched run in the grid
///
/// Empty cells break runs. Determinism: output depends only on grid
/// contents, never on caller iteration order.
pub fn detect(grid: &Grid) -> Vec<MatchRun> {
    let mut runs = Vec::new();

    for row in 0..grid.height() {
        scan_line(grid, &mut runs, Axis::Row, grid.width(), |i| {
            Position::new(i, row)
        });
    }
    for col in 0..grid.width() {
        scan_line(grid, &mut runs, Axis::Column, grid.height(), |i| {
            Position::new(col, i)
        });
    }

    runs
}

/// True when the grid holds no matched run (half of the stable invariant;
/// the other half is [`Grid::is_settled`])
pub fn is_stable(grid: &Grid) -> bool {
    !has_match(grid)
}

/// Cheap early-out variant of [`detect`] for yes/no questions
pub fn has_match(grid: &Grid) -> bool {
    for row in 0..grid.height() {
        if line_has_run(grid, grid.width(), |i| Position::new(i, row)) {
            return true;
        }
    }
    for col in 0..grid.width() {
        if line_has_run(grid, grid.height(), |i| Position::new(col, i)) {
            return true;
        }
    }
    false
}

/// Union of all matched cells, sorted and deduplicated, plus the number
/// of cells claimed by more than one run
///
/// A cell can appear in at most two runs (one per axis), so the second
/// count is exactly the number of T/L/cross intersection cells.
pub fn clear_set(runs: &[MatchRun]) -> (Vec<Position>, usize) {
    let mut all: Vec<Position> = runs.iter().flat_map(|r| r.cells.iter().copied()).collect();
    all.sort_unstable();

    let mut unique = Vec::with_capacity(all.len());
    let mut crossings = 0;
    for pos in all {
        if unique.last() == Some(&pos) {
            crossings += 1;
        } else {
            unique.push(pos);
        }
    }
    (unique, crossings)
}

fn scan_line(
    grid: &Grid,
    runs: &mut Vec<MatchRun>,
    axis: Axis,
    len: u8,
    pos_at: impl Fn(u8) -> Position,
) {
    let mut run_start = 0u8;
    let mut run_kind: Option<TileKind> = None;

    for i in 0..=len {
        let kind = if i < len { grid.kind_at(pos_at(i)) } else { None };
        if kind == run_kind && i < len {
            continue;
        }
        // Run ended at i (exclusive); emit if it qualifies
        if let Some(k) = run_kind {
            let span = (i - run_start) as usize;
            if span >= MIN_MATCH_RUN {
                let cells = (run_start..i).map(&pos_at).collect();
                runs.push(MatchRun {
                    kind: k,
                    axis,
                    cells,
                });
            }
        }
        run_start = i;
        run_kind = kind;
    }
}

fn line_has_run(grid: &Grid, len: u8, pos_at: impl Fn(u8) -> Position) -> bool {
    let mut run_len = 0usize;
    let mut run_kind: Option<TileKind> = None;
    for i in 0..len {
        let kind = grid.kind_at(pos_at(i));
        if kind.is_some() && kind == run_kind {
            run_len += 1;
            if run_len >= MIN_MATCH_RUN {
                return true;
            }
        } else {
            run_kind = kind;
            run_len = usize::from(kind.is_some());
        }
    }
    false
}
