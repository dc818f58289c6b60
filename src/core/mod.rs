//! Core engine types: configuration, RNG, errors.
//!
//! These are shared by every game variant. Variants differ only in the
//! `MatchConfig` they are built from.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{MatchConfig, MAX_ATTR_VALS, MAX_UNIVERSE_SIZE};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
