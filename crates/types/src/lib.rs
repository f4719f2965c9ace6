//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, host rendering, tests).
//!
//! # Board Dimensions
//!
//! Board width and height are chosen per game session (the classic layout
//! is 8x8) but are bounded:
//!
//! - **Minimum**: 4x4 (smallest board where a swap can complete a run)
//! - **Maximum**: 16x16
//!
//! # Scoring Constants
//!
//! Base points per matched run, by run length:
//!
//! | Length | Points |
//! |--------|--------|
//! | 3 | 30 |
//! | 4 | 60 |
//! | 5 | 150 |
//! | 5+n | 150 + 150n |
//!
//! A cell claimed by both a horizontal and a vertical run (a T/L/cross
//! intersection) adds `INTERSECTION_BONUS` once per cell, not once per run.
//! Each chained cascade round doubles the round's points:
//! round N is worth `CASCADE_CHAIN_MULTIPLIER^(N-1)` times its base value.
//!
//! # Examples
//!
//! ```
//! use gem_crush_types::{Position, TileKind, SwapRejection};
//!
//! let kind = TileKind::Ruby;
//! assert_eq!(TileKind::from_glyph('R'), Some(kind));
//! assert_eq!(kind.glyph(), 'R');
//!
//! let a = Position::new(2, 3);
//! let b = Position::new(2, 4);
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(Position::new(3, 4)));
//!
//! assert_eq!(SwapRejection::NoMatch.as_str(), "noMatch");
//! ```

/// Smallest supported board dimension (width or height)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest supported board dimension (width or height)
pub const MAX_BOARD_DIM: u8 = 16;

/// Classic board width (8 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 8;

/// Classic board height (8 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 8;

/// Smallest kind pool that keeps constrained generation and legal-move
/// forcing satisfiable on every supported board size
pub const MIN_TILE_KINDS: u8 = 4;

/// Largest kind pool (one of each `TileKind`)
pub const MAX_TILE_KINDS: u8 = 7;

/// Minimum run length that counts as a match
pub const MIN_MATCH_RUN: usize = 3;

/// Base points per matched run for lengths 3, 4, 5
pub const RUN_SCORES: [u32; 3] = [30, 60, 150];

/// Additional points per tile beyond a run of 5
///
/// Keeps `run_score` total over every length >= 3.
pub const RUN_SCORE_STEP: u32 = 150;

/// Bonus per cell claimed by more than one run in the same round
pub const INTERSECTION_BONUS: u32 = 20;

/// Per-round chain multiplier base
///
/// Round N of a cascade (1-based) multiplies its points by
/// `CASCADE_CHAIN_MULTIPLIER^(N-1)`: the first clearing round is 1x,
/// each chained round doubles.
pub const CASCADE_CHAIN_MULTIPLIER: u32 = 2;

/// Whole-grid generation attempts before the kind pool is widened once
pub const GENERATION_RETRY_LIMIT: u32 = 32;

/// Hard ceiling on cascade rounds within one turn
///
/// Cascades terminate naturally; hitting this bound is a defect signal,
/// not expected behavior.
pub const CASCADE_ROUND_LIMIT: u32 = 1024;

/// The seven gem kinds
///
/// A game session plays with the first `tile_kinds` entries of
/// [`TileKind::ALL`] (between `MIN_TILE_KINDS` and `MAX_TILE_KINDS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ruby,
    Amber,
    Emerald,
    Sapphire,
    Amethyst,
    Topaz,
    Quartz,
}

impl TileKind {
    /// All kinds, in pool order
    pub const ALL: [TileKind; 7] = [
        TileKind::Ruby,
        TileKind::Amber,
        TileKind::Emerald,
        TileKind::Sapphire,
        TileKind::Amethyst,
        TileKind::Topaz,
        TileKind::Quartz,
    ];

    /// Index into [`TileKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            TileKind::Ruby => 0,
            TileKind::Amber => 1,
            TileKind::Emerald => 2,
            TileKind::Sapphire => 3,
            TileKind::Amethyst => 4,
            TileKind::Topaz => 5,
            TileKind::Quartz => 6,
        }
    }

    /// Kind at the given pool index, `None` if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-character board notation used by fixtures and debug dumps
    pub fn glyph(&self) -> char {
        match self {
            TileKind::Ruby => 'R',
            TileKind::Amber => 'A',
            TileKind::Emerald => 'E',
            TileKind::Sapphire => 'S',
            TileKind::Amethyst => 'M',
            TileKind::Topaz => 'T',
            TileKind::Quartz => 'Q',
        }
    }

    /// Parse board notation (case-sensitive, `.` is an empty cell)
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            'R' => Some(TileKind::Ruby),
            'A' => Some(TileKind::Amber),
            'E' => Some(TileKind::Emerald),
            'S' => Some(TileKind::Sapphire),
            'M' => Some(TileKind::Amethyst),
            'T' => Some(TileKind::Topaz),
            'Q' => Some(TileKind::Quartz),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Ruby => "ruby",
            TileKind::Amber => "amber",
            TileKind::Emerald => "emerald",
            TileKind::Sapphire => "sapphire",
            TileKind::Amethyst => "amethyst",
            TileKind::Topaz => "topaz",
            TileKind::Quartz => "quartz",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty cell (only during cascade resolution)
/// - `Some(TileKind)`: cell filled with a gem
pub type Cell = Option<TileKind>;

/// A board coordinate: column then row, both zero-based from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// True when `other` is exactly one cell away horizontally or
    /// vertically (Manhattan distance 1) - the only swappable pairs
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc + dr == 1
    }
}

/// Phases of the turn state machine
///
/// `ValidatingSwap` and `TurnComplete` are transient: the engine passes
/// through them synchronously and a host only ever observes
/// `AwaitingInput`, `ResolvingCascade`, or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    AwaitingInput,
    ValidatingSwap,
    ResolvingCascade,
    TurnComplete,
    GameOver,
}

impl EnginePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::AwaitingInput => "awaitingInput",
            EnginePhase::ValidatingSwap => "validatingSwap",
            EnginePhase::ResolvingCascade => "resolvingCascade",
            EnginePhase::TurnComplete => "turnComplete",
            EnginePhase::GameOver => "gameOver",
        }
    }
}

/// Why a swap proposal was turned down
///
/// Rejections are ordinary results, not errors: the proposal leaves the
/// engine untouched and the caller decides what to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    /// A position lies outside the board
    OutOfBounds,
    /// The positions are not Manhattan-distance-1 neighbors
    NotAdjacent,
    /// The engine is resolving a cascade or the game is over
    NotAwaitingInput,
    /// The swap would not create any match; it was reverted
    NoMatch,
}

impl SwapRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapRejection::OutOfBounds => "outOfBounds",
            SwapRejection::NotAdjacent => "notAdjacent",
            SwapRejection::NotAwaitingInput => "notAwaitingInput",
            SwapRejection::NoMatch => "noMatch",
        }
    }
}
