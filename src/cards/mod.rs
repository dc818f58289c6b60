//! Card system: cards and the universe they are drawn from.
//!
//! ## Key Types
//!
//! - `Card`: Attribute tuple, or a blank for an empty field slot
//! - `Universe`: Every attribute combination for a configuration, generated
//!   once and never mutated

pub mod card;
pub mod universe;

pub use card::{Card, CardAttrs};
pub use universe::Universe;
