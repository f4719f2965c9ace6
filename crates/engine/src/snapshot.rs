//! Host-facing snapshot structs
//!
//! One [`CascadeSnapshot`] per cascade round lets the host animate each
//! round before pulling the next, instead of jumping from the pre-swap
//! board straight to the fully resolved one.

use gem_crush_core::Grid;
use gem_crush_types::EnginePhase;

/// The board as it stands after one cascade round, plus that round's score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeSnapshot {
    /// 1-based round index within the current turn
    pub round_index: u32,
    /// Board state after clear, gravity, and refill for this round
    pub grid: Grid,
    /// Points this round contributed to the total
    pub round_score: u32,
    /// True on the last round of the turn; the engine is back in
    /// `AwaitingInput` once this snapshot is returned
    pub is_final: bool,
}

/// Read-only view of the engine for rendering
#[derive(Debug, Clone, Copy)]
pub struct EngineView<'a> {
    pub phase: EnginePhase,
    pub grid: &'a Grid,
    pub total_score: u32,
}
