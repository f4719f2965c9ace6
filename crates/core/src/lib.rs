//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board model and every rule of the match-3
//! engine. It has zero dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical boards and refills
//! - **Testable**: every rule is a pure function over [`Grid`]
//! - **Portable**: runs headless in any host
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked board storage with glyph fixtures
//! - [`rng`]: seeded LCG driving generation and refill draws
//! - [`matcher`]: full-span run detection over rows and columns
//! - [`generator`]: match-free initial boards with a guaranteed legal move
//! - [`resolver`]: one cascade round - clear, gravity, refill, re-detect
//! - [`scoring`]: run scores, intersection bonus, chain multiplier

pub mod generator;
pub mod grid;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;

pub use generator::{generate, GenerateError};
pub use grid::Grid;
pub use matcher::{detect, is_stable, Axis, MatchRun};
pub use resolver::{resolve_round, RoundReport};
pub use rng::GemRng;
pub use scoring::{score_round, RoundScore};
