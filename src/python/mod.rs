//! Python bindings for the trigo match engine.
//!
//! These let presentation layers written in Python drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import trigo
//!
//! game = trigo.MatchEngine.standard(seed=42)
//! game.deal()
//!
//! found = game.find_match()
//! if game.is_match(found):
//!     game.remove(found)
//!     game.deal()
//!
//! saved = game.state()
//! restored = trigo.MatchEngine.from_state(saved)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_engine;

pub use py_cards::*;
pub use py_engine::*;

/// trigo: field management and match detection for Set-style card games.
#[pymodule]
fn trigo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMatchEngine>()?;

    Ok(())
}
