//! The match engine and its building blocks.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Deck, field, dealing, and match detection for one game
//! - `Combinations`: Lazy k-of-n slot combination generator
//! - `EngineState`: Serializable snapshot for save/restore
//!
//! The match rule itself lives in `rules::is_match` and works on any group of
//! cards, independent of the field.

mod combinations;
mod match_engine;
pub mod rules;
mod state;

pub use combinations::{Candidate, Combinations};
pub use match_engine::MatchEngine;
pub use state::EngineState;
