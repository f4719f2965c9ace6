//! Gem Crush (workspace facade crate).
//!
//! This package keeps a stable `gem_crush::{core, engine, types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use gem_crush_core as core;
pub use gem_crush_engine as engine;
pub use gem_crush_types as types;
