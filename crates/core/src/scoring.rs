//! Scoring module - run scores, intersection bonus, chain multiplier
//!
//! All constants live in `gem-crush-types` and are pinned by tests there
//! and here. The contract:
//!
//! - a run of length L >= 3 is worth `RUN_SCORES[L - 3]` up to length 5,
//!   then `RUN_SCORES[2] + RUN_SCORE_STEP * (L - 5)` - total over every
//!   legal length, strictly increasing;
//! - each cell counted by two runs in the same round adds
//!   `INTERSECTION_BONUS` once (per cell, not per run);
//! - cascade round N (1-based) multiplies the whole round's points,
//!   bonus included, by `CASCADE_CHAIN_MULTIPLIER^(N-1)`.

use gem_crush_types::{
    CASCADE_CHAIN_MULTIPLIER, INTERSECTION_BONUS, MIN_MATCH_RUN, RUN_SCORES, RUN_SCORE_STEP,
};

use crate::matcher::MatchRun;

/// Score breakdown for one cascade round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundScore {
    /// Sum of run scores before bonus and multiplier
    pub base: u32,
    /// Intersection bonus before the multiplier
    pub intersection_bonus: u32,
    /// Chain multiplier applied to this round
    pub multiplier: u32,
    /// `(base + intersection_bonus) * multiplier`
    pub total: u32,
}

/// Base points for one run of the given length
///
/// Total over every length >= 3; shorter lengths never reach scoring and
/// return 0.
pub fn run_score(len: usize) -> u32 {
    if len < MIN_MATCH_RUN {
        return 0;
    }
    match len - MIN_MATCH_RUN {
        i @ 0..=2 => RUN_SCORES[i],
        _ => RUN_SCORES[2].saturating_add(RUN_SCORE_STEP * (len as u32 - 5)),
    }
}

/// Chain multiplier for a 1-based cascade round index
///
/// Round 1 is 1x; each chained round multiplies by
/// `CASCADE_CHAIN_MULTIPLIER` again. Saturates rather than wrapping on
/// absurdly deep chains.
pub fn cascade_multiplier(round_index: u32) -> u32 {
    let depth = round_index.saturating_sub(1);
    CASCADE_CHAIN_MULTIPLIER.saturating_pow(depth)
}

/// Score one resolved round
///
/// `crossings` is the multiply-counted cell count reported by the
/// resolver for the same set of runs.
pub fn score_round(matches: &[MatchRun], crossings: usize, round_index: u32) -> RoundScore {
    let base = matches
        .iter()
        .fold(0u32, |acc, run| acc.saturating_add(run_score(run.len())));
    let intersection_bonus = INTERSECTION_BONUS.saturating_mul(crossings as u32);
    let multiplier = cascade_multiplier(round_index);
    let total = base
        .saturating_add(intersection_bonus)
        .saturating_mul(multiplier);
    RoundScore {
        base,
        intersection_bonus,
        multiplier,
        total,
    }
}
