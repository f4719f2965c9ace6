//! Turn engine tests - the full swap/cascade/score state machine
//!
//! Documented 4x4 fixtures:
//!
//! - `NO_MATCH_BOARD` (checkerboard): swapping (0,0) with (1,0) creates
//!   no run anywhere, so the proposal must be rejected and reverted.
//! - `ONE_MOVE_BOARD`: swapping (2,2) with (3,2) turns row 2 into
//!   `A A A R`, a single Amber run of 3 worth exactly 30 points in
//!   round 1.

use gem_crush::core::{detect, Grid};
use gem_crush::engine::{EngineError, GameConfig, GameEngine, SwapOutcome};
use gem_crush::types::{EnginePhase, Position, SwapRejection};

const NO_MATCH_BOARD: [&str; 4] = ["RARA", "ARAR", "RARA", "ARAR"];
const ONE_MOVE_BOARD: [&str; 4] = ["SESE", "ESES", "AARA", "AREE"];

fn engine_from(rows: &[&str], seed: u32) -> GameEngine {
    GameEngine::from_grid(Grid::from_glyphs(rows), 4, seed).unwrap()
}

#[test]
fn test_new_game_starts_awaiting_input_and_stable() {
    let engine = GameEngine::new_game(GameConfig::classic(2024)).unwrap();
    let view = engine.current_state();
    assert_eq!(view.phase, EnginePhase::AwaitingInput);
    assert_eq!(view.total_score, 0);
    assert!(detect(view.grid).is_empty());
    assert!(view.grid.is_settled());
}

#[test]
fn test_new_game_is_reproducible() {
    let a = GameEngine::new_game(GameConfig::classic(7)).unwrap();
    let b = GameEngine::new_game(GameConfig::classic(7)).unwrap();
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_from_grid_rejects_bad_boards() {
    // Pre-existing match
    let matched = Grid::from_glyphs(&["RRRA", "ARAR", "RARA", "ARAR"]);
    assert!(matches!(
        GameEngine::from_grid(matched, 4, 1),
        Err(EngineError::UnstableGrid { .. })
    ));

    // Hole in the board
    let holed = Grid::from_glyphs(&["RAR.", "ARAR", "RARA", "ARAR"]);
    assert!(matches!(
        GameEngine::from_grid(holed, 4, 1),
        Err(EngineError::UnstableGrid { .. })
    ));

    // Kind outside the declared pool (Amethyst with a 4-kind pool)
    let foreign = Grid::from_glyphs(&["RAMA", "ARAR", "RARA", "ARAR"]);
    assert!(matches!(
        GameEngine::from_grid(foreign, 4, 1),
        Err(EngineError::UnstableGrid { .. })
    ));
}

#[test]
fn test_invalid_proposals_rejected_without_state_change() {
    let mut engine = engine_from(&NO_MATCH_BOARD, 1);
    let before = engine.grid().clone();

    // Out of bounds
    assert_eq!(
        engine.propose_swap(Position::new(0, 0), Position::new(0, 4)),
        SwapOutcome::Rejected(SwapRejection::OutOfBounds)
    );
    // Diagonal
    assert_eq!(
        engine.propose_swap(Position::new(0, 0), Position::new(1, 1)),
        SwapOutcome::Rejected(SwapRejection::NotAdjacent)
    );
    // Same cell
    assert_eq!(
        engine.propose_swap(Position::new(2, 2), Position::new(2, 2)),
        SwapOutcome::Rejected(SwapRejection::NotAdjacent)
    );

    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.total_score(), 0);
    assert_eq!(engine.phase(), EnginePhase::AwaitingInput);
    assert_eq!(engine.turn_id(), 0);
}

#[test]
fn test_no_match_swap_reverts_byte_for_byte() {
    // Property 2: a matchless swap leaves grid and score untouched
    let mut engine = engine_from(&NO_MATCH_BOARD, 1);
    let before = engine.grid().clone();

    let outcome = engine.propose_swap(Position::new(0, 0), Position::new(1, 0));
    assert_eq!(outcome, SwapOutcome::Rejected(SwapRejection::NoMatch));
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.total_score(), 0);
    assert_eq!(engine.phase(), EnginePhase::AwaitingInput);

    // And no snapshots exist for a rejected proposal
    assert_eq!(engine.next_cascade_snapshot().unwrap(), None);
}

#[test]
fn test_accepted_swap_scores_and_returns_to_awaiting_input() {
    let mut engine = engine_from(&ONE_MOVE_BOARD, 99);

    let outcome = engine.propose_swap(Position::new(2, 2), Position::new(3, 2));
    assert!(outcome.is_accepted());
    assert_eq!(engine.phase(), EnginePhase::ResolvingCascade);
    assert_eq!(engine.turn_id(), 1);

    // Round 1 clears the single Amber 3-run: exactly 30 points
    let first = engine.next_cascade_snapshot().unwrap().unwrap();
    assert_eq!(first.round_index, 1);
    assert_eq!(first.round_score, 30);
    assert_eq!(first.grid.empty_count(), 0);
    assert!(first.grid.is_settled());

    // Drain any refill cascades; each later round doubles its points
    let mut last = first.clone();
    while !last.is_final {
        last = engine.next_cascade_snapshot().unwrap().unwrap();
        assert!(last.round_score > 0);
    }

    assert_eq!(engine.phase(), EnginePhase::AwaitingInput);
    assert!(detect(engine.grid()).is_empty());
    assert!(engine.grid().is_settled());
    assert!(engine.total_score() >= 30);
    assert_eq!(engine.next_cascade_snapshot().unwrap(), None);
}

#[test]
fn test_proposals_during_cascade_are_rejected_not_queued() {
    let mut engine = engine_from(&ONE_MOVE_BOARD, 5);
    assert!(engine
        .propose_swap(Position::new(2, 2), Position::new(3, 2))
        .is_accepted());

    // Mid-cascade: engine holds ResolvingCascade until drained
    assert_eq!(
        engine.propose_swap(Position::new(0, 0), Position::new(1, 0)),
        SwapOutcome::Rejected(SwapRejection::NotAwaitingInput)
    );
    assert_eq!(engine.turn_id(), 1);

    engine.resolve_turn().unwrap();
    assert_eq!(engine.phase(), EnginePhase::AwaitingInput);
}

#[test]
fn test_snapshot_sequence_is_seed_deterministic() {
    let mut a = engine_from(&ONE_MOVE_BOARD, 1234);
    let mut b = engine_from(&ONE_MOVE_BOARD, 1234);
    assert!(a
        .propose_swap(Position::new(2, 2), Position::new(3, 2))
        .is_accepted());
    assert!(b
        .propose_swap(Position::new(2, 2), Position::new(3, 2))
        .is_accepted());
    assert_eq!(a.resolve_turn().unwrap(), b.resolve_turn().unwrap());
    assert_eq!(a.total_score(), b.total_score());
}

#[test]
fn test_score_monotonicity_over_many_turns() {
    // Property 4: total score never decreases, across whole sessions
    for seed in 1..=20u32 {
        let mut engine = GameEngine::new_game(GameConfig::classic(seed)).unwrap();
        let mut previous = 0u32;
        let mut turns_played = 0;

        'session: for _ in 0..200 {
            // Scan for any accepted move; stop when the board is dead
            let grid = engine.grid().clone();
            let mut accepted = false;
            'scan: for row in 0..grid.height() {
                for col in 0..grid.width() {
                    let a = Position::new(col, row);
                    for b in [Position::new(col + 1, row), Position::new(col, row + 1)] {
                        if !grid.in_bounds(b) {
                            continue;
                        }
                        if engine.propose_swap(a, b).is_accepted() {
                            accepted = true;
                            break 'scan;
                        }
                    }
                }
            }
            if !accepted {
                break 'session;
            }

            let rounds = engine.resolve_turn().unwrap();
            assert!(!rounds.is_empty());
            assert!(rounds.last().unwrap().is_final);
            assert!(
                engine.total_score() >= previous,
                "seed {seed}: score decreased"
            );
            assert!(engine.total_score() > previous, "accepted turn scored 0");
            previous = engine.total_score();
            turns_played += 1;

            // Property 1: AwaitingInput grids are stable and settled
            assert_eq!(engine.phase(), EnginePhase::AwaitingInput);
            assert!(detect(engine.grid()).is_empty(), "seed {seed}: unstable");
            assert!(engine.grid().is_settled(), "seed {seed}: unsettled");
        }
        assert!(turns_played > 0, "seed {seed}: no playable turn found");
    }
}

#[test]
fn test_force_end_game_is_terminal() {
    let mut engine = engine_from(&ONE_MOVE_BOARD, 3);
    engine.force_end_game();
    assert_eq!(engine.phase(), EnginePhase::GameOver);

    assert_eq!(
        engine.propose_swap(Position::new(2, 2), Position::new(3, 2)),
        SwapOutcome::Rejected(SwapRejection::NotAwaitingInput)
    );
    assert_eq!(engine.next_cascade_snapshot().unwrap(), None);
}

#[test]
fn test_force_end_game_during_cascade_stops_the_turn() {
    let mut engine = engine_from(&ONE_MOVE_BOARD, 11);
    assert!(engine
        .propose_swap(Position::new(2, 2), Position::new(3, 2))
        .is_accepted());
    engine.force_end_game();
    assert_eq!(engine.next_cascade_snapshot().unwrap(), None);
    assert_eq!(engine.phase(), EnginePhase::GameOver);
}
