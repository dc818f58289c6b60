//! # trigo
//!
//! Field management and match detection for Set-style card games.
//!
//! ## Games
//!
//! Every card has `num_attrs` attributes taking values in `0..num_attr_vals`.
//! A match is a group of `num_attr_vals` cards in which each attribute is
//! either the same on every card or different on every card. With 4
//! attributes of 3 values this is the classic 81-card game; other dimensions
//! give the generalized variants.
//!
//! ## Design Principles
//!
//! 1. **One parameterized engine**: Variants differ only in `MatchConfig`.
//!
//! 2. **Total operations**: Bad slot indices and malformed candidates give
//!    `false`, blank cards, or no-ops. Only restoring saved state can fail.
//!
//! 3. **Always a move**: After `deal`, the field holds a match unless the
//!    deck is empty.
//!
//! 4. **Deterministic**: Seeded shuffles, with the RNG position saved along
//!    with the rest of the state.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors
//! - `cards`: Cards and the card universe
//! - `engine`: The match engine, match rule, combinations, snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod cards;
pub mod core;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameRngState, MatchConfig};

pub use crate::cards::{Card, CardAttrs, Universe};

pub use crate::engine::{Candidate, Combinations, EngineState, MatchEngine};
