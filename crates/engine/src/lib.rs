//! Turn engine - the state machine sequencing swap, cascade, and score
//!
//! A [`GameEngine`] owns the only mutable board and score for one game
//! session; independent sessions are independent engines. It advances
//! only in response to host calls:
//!
//! - [`GameEngine::propose_swap`] validates and (maybe) commits a swap,
//!   synchronously;
//! - [`GameEngine::next_cascade_snapshot`] runs exactly one cascade round
//!   per call, so the host can animate between rounds - a pull-based
//!   iterator rather than callbacks, with no event-loop dependency.
//!
//! No proposal is accepted while a cascade is resolving; late proposals
//! are rejected, never queued. When the last round settles, the engine
//! re-verifies the stable invariant (no matches, gravity settled) before
//! re-entering `AwaitingInput` - that postcondition is the contract the
//! renderer relies on.

mod error;
mod snapshot;

pub use error::EngineError;
pub use snapshot::{CascadeSnapshot, EngineView};

use gem_crush_core::{generator, matcher, resolver, scoring, GemRng, Grid, MatchRun};
use gem_crush_types::{
    EnginePhase, Position, SwapRejection, CASCADE_ROUND_LIMIT, DEFAULT_BOARD_HEIGHT,
    DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM, MAX_TILE_KINDS, MIN_BOARD_DIM, MIN_TILE_KINDS,
};

/// Parameters for a new game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Active kind pool size: the first `tile_kinds` entries of
    /// `TileKind::ALL`
    pub tile_kinds: u8,
    pub seed: u32,
}

impl GameConfig {
    /// Classic 8x8 board with five gem kinds
    pub fn classic(seed: u32) -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            tile_kinds: 5,
            seed,
        }
    }
}

/// Result of a swap proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Swap committed; pull snapshots until `is_final`
    Accepted,
    /// Proposal declined with no observable state change
    Rejected(SwapRejection),
}

impl SwapOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapOutcome::Accepted)
    }
}

/// One game session: board, score, and the turn state machine
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    rng: GemRng,
    kind_count: u8,
    phase: EnginePhase,
    total_score: u32,
    /// Matches awaiting the next cascade round
    pending: Vec<MatchRun>,
    /// 1-based round counter within the current turn
    round_index: u32,
    /// Monotonic count of accepted swaps this session
    turn_id: u32,
}

impl GameEngine {
    /// Start a new game from a seeded, generated board
    ///
    /// The board satisfies the stable invariant and has at least one
    /// legal move. Same config, same board.
    pub fn new_game(config: GameConfig) -> Result<Self, EngineError> {
        let mut rng = GemRng::new(config.seed);
        let grid = generator::generate(config.width, config.height, config.tile_kinds, &mut rng)?;
        Ok(Self {
            grid,
            rng,
            kind_count: config.tile_kinds,
            phase: EnginePhase::AwaitingInput,
            total_score: 0,
            pending: Vec::new(),
            round_index: 0,
            turn_id: 0,
        })
    }

    /// Start a session from an explicit board (hosts and tests)
    ///
    /// The grid must be hole-free, settled, match-free, within supported
    /// dimensions, and drawn from the first `tile_kinds` kinds. A legal
    /// move is not required - move exhaustion is the host's policy.
    pub fn from_grid(grid: Grid, tile_kinds: u8, seed: u32) -> Result<Self, EngineError> {
        if grid.width() < MIN_BOARD_DIM
            || grid.width() > MAX_BOARD_DIM
            || grid.height() < MIN_BOARD_DIM
            || grid.height() > MAX_BOARD_DIM
        {
            return Err(EngineError::UnstableGrid {
                reason: "dimensions outside supported range",
            });
        }
        if !(MIN_TILE_KINDS..=MAX_TILE_KINDS).contains(&tile_kinds) {
            return Err(EngineError::UnstableGrid {
                reason: "kind pool outside supported range",
            });
        }
        if grid.empty_count() > 0 {
            return Err(EngineError::UnstableGrid {
                reason: "grid has empty cells",
            });
        }
        if grid
            .cells()
            .iter()
            .flatten()
            .any(|kind| kind.index() >= tile_kinds as usize)
        {
            return Err(EngineError::UnstableGrid {
                reason: "grid holds kinds outside the pool",
            });
        }
        if !matcher::is_stable(&grid) {
            return Err(EngineError::UnstableGrid {
                reason: "grid holds pre-existing matches",
            });
        }
        if !grid.is_settled() {
            return Err(EngineError::UnstableGrid {
                reason: "gravity not settled",
            });
        }
        Ok(Self {
            grid,
            rng: GemRng::new(seed),
            kind_count: tile_kinds,
            phase: EnginePhase::AwaitingInput,
            total_score: 0,
            pending: Vec::new(),
            round_index: 0,
            turn_id: 0,
        })
    }

    /// Propose swapping two adjacent cells; synchronous
    ///
    /// On `Accepted` the swap is committed and the engine is resolving:
    /// pull [`Self::next_cascade_snapshot`] until the final round. Every
    /// rejection leaves the board and score byte-for-byte untouched.
    pub fn propose_swap(&mut self, a: Position, b: Position) -> SwapOutcome {
        if self.phase != EnginePhase::AwaitingInput {
            return SwapOutcome::Rejected(SwapRejection::NotAwaitingInput);
        }
        if !self.grid.in_bounds(a) || !self.grid.in_bounds(b) {
            return SwapOutcome::Rejected(SwapRejection::OutOfBounds);
        }
        if !a.is_adjacent(b) {
            return SwapOutcome::Rejected(SwapRejection::NotAdjacent);
        }

        self.phase = EnginePhase::ValidatingSwap;
        self.grid.swap(a, b);
        let matches = matcher::detect(&self.grid);
        if matches.is_empty() {
            self.grid.swap(a, b);
            self.phase = EnginePhase::AwaitingInput;
            return SwapOutcome::Rejected(SwapRejection::NoMatch);
        }

        self.turn_id += 1;
        self.round_index = 0;
        self.pending = matches;
        self.phase = EnginePhase::ResolvingCascade;
        SwapOutcome::Accepted
    }

    /// Run one cascade round and return its snapshot
    ///
    /// `Ok(None)` whenever no turn is resolving (including after the
    /// final snapshot has been pulled). Round N's output grid is round
    /// N+1's input; rounds are strictly sequential. An
    /// `InvariantViolation` is a defect, not expected behavior, and ends
    /// the session.
    pub fn next_cascade_snapshot(&mut self) -> Result<Option<CascadeSnapshot>, EngineError> {
        if self.phase != EnginePhase::ResolvingCascade {
            return Ok(None);
        }

        self.round_index += 1;
        if self.round_index > CASCADE_ROUND_LIMIT {
            self.phase = EnginePhase::GameOver;
            return Err(EngineError::InvariantViolation {
                detail: "cascade exceeded the round limit",
            });
        }

        let matches = std::mem::take(&mut self.pending);
        let report =
            resolver::resolve_round(&mut self.grid, &matches, self.kind_count, &mut self.rng);
        let score = scoring::score_round(&matches, report.crossings, self.round_index);
        self.total_score = self.total_score.saturating_add(score.total);

        let is_final = !report.cascaded;
        self.pending = report.next_matches;
        if is_final {
            self.finish_turn()?;
        }

        Ok(Some(CascadeSnapshot {
            round_index: self.round_index,
            grid: self.grid.clone(),
            round_score: score.total,
            is_final,
        }))
    }

    /// Drain every remaining snapshot for the current turn
    pub fn resolve_turn(&mut self) -> Result<Vec<CascadeSnapshot>, EngineError> {
        let mut rounds = Vec::new();
        while let Some(snapshot) = self.next_cascade_snapshot()? {
            rounds.push(snapshot);
        }
        Ok(rounds)
    }

    /// Re-assert the stable invariant and hand control back to the host
    fn finish_turn(&mut self) -> Result<(), EngineError> {
        self.phase = EnginePhase::TurnComplete;
        if !matcher::is_stable(&self.grid) {
            self.phase = EnginePhase::GameOver;
            return Err(EngineError::InvariantViolation {
                detail: "board still holds matches after the cascade settled",
            });
        }
        if !self.grid.is_settled() {
            self.phase = EnginePhase::GameOver;
            return Err(EngineError::InvariantViolation {
                detail: "gravity not settled after the cascade",
            });
        }
        self.phase = EnginePhase::AwaitingInput;
        Ok(())
    }

    /// Read-only view for rendering
    pub fn current_state(&self) -> EngineView<'_> {
        EngineView {
            phase: self.phase,
            grid: &self.grid,
            total_score: self.total_score,
        }
    }

    /// External transition to terminal `GameOver` (move or time
    /// exhaustion is the host's policy); every later proposal is rejected
    pub fn force_end_game(&mut self) {
        self.phase = EnginePhase::GameOver;
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Count of accepted swaps this session
    pub fn turn_id(&self) -> u32 {
        self.turn_id
    }

    pub fn kind_count(&self) -> u8 {
        self.kind_count
    }
}
