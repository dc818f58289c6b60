//! Match engine bindings for Python.

use std::borrow::Cow;

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineError, MatchConfig};
use crate::engine::MatchEngine;

use super::py_cards::PyCard;

fn value_error(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for MatchEngine.
#[pyclass(name = "MatchEngine")]
#[derive(Clone, Debug)]
pub struct PyMatchEngine(pub MatchEngine);

#[pymethods]
impl PyMatchEngine {
    /// Create a shuffled game.
    ///
    /// # Arguments
    /// - num_attrs: Attributes per card
    /// - num_attr_vals: Values per attribute (and cards per match)
    /// - field_size: Nominal number of field slots
    /// - field_expand: Slots added when the field holds no match
    /// - seed: RNG seed, or None for a random game
    #[new]
    #[pyo3(signature = (
        num_attrs = 4,
        num_attr_vals = 3,
        field_size = 12,
        field_expand = 3,
        seed = None
    ))]
    fn new(
        num_attrs: u32,
        num_attr_vals: u32,
        field_size: u32,
        field_expand: u32,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = MatchConfig::new(num_attrs, num_attr_vals, field_size, field_expand);
        config.validate().map_err(value_error)?;
        let engine = match seed {
            Some(seed) => MatchEngine::with_seed(config, seed),
            None => MatchEngine::new(config),
        };
        Ok(Self(engine))
    }

    /// The classic 81-card game.
    #[staticmethod]
    #[pyo3(signature = (seed = None))]
    fn standard(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(MatchEngine::standard_with_seed(seed)),
            None => Self(MatchEngine::standard()),
        }
    }

    /// Rebuild a game from bytes produced by `state()`.
    ///
    /// Raises ValueError on malformed input.
    #[staticmethod]
    fn from_state(state: &[u8]) -> PyResult<Self> {
        MatchEngine::from_state(state).map(Self).map_err(value_error)
    }

    /// Serialize the game to bytes.
    fn state(&self) -> PyResult<Cow<'static, [u8]>> {
        self.0.state().map(Cow::Owned).map_err(value_error)
    }

    fn shuffle(&mut self) {
        self.0.shuffle();
    }

    fn deal(&mut self) {
        self.0.deal();
    }

    /// Empty the given slots. Returns False (and does nothing) unless exactly
    /// `num_attr_vals` slots are given.
    fn remove(&mut self, slots: Vec<usize>) -> bool {
        self.0.remove(&slots)
    }

    fn is_match(&self, candidate: Vec<usize>) -> bool {
        self.0.is_match(&candidate)
    }

    fn num_matches(&self) -> usize {
        self.0.num_matches()
    }

    /// All matching slot combinations.
    fn matches(&self) -> Vec<Vec<usize>> {
        self.0.matches().into_iter().map(|m| m.to_vec()).collect()
    }

    /// The first matching slot combination, or None.
    fn find_match(&self) -> Option<Vec<usize>> {
        self.0.find_match().map(|m| m.to_vec())
    }

    /// Field cards; None for empty slots.
    fn field(&self) -> Vec<Option<PyCard>> {
        self.0
            .field()
            .into_iter()
            .map(|card| (!card.is_blank()).then(|| PyCard(card)))
            .collect()
    }

    /// Card in slot `slot` (blank if out of range or empty).
    fn field_card(&self, slot: usize) -> PyCard {
        PyCard(self.0.field_card(slot))
    }

    /// Field as an int64 array of shape (field_len, num_attrs); -1 marks
    /// empty slots.
    fn field_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i64>>> {
        let rows = self.0.field_len();
        let cols = self.0.config().num_attrs as usize;
        let mut flat: Vec<i64> = Vec::with_capacity(rows * cols);
        for card in self.0.field() {
            if card.is_blank() {
                flat.extend(std::iter::repeat(-1).take(cols));
            } else {
                flat.extend(card.attrs().iter().map(|&v| i64::from(v)));
            }
        }
        PyArray1::from_vec_bound(py, flat)
            .reshape([rows, cols])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    #[getter]
    fn deck_size(&self) -> usize {
        self.0.deck_size()
    }

    #[getter]
    fn field_len(&self) -> usize {
        self.0.field_len()
    }

    #[getter]
    fn matches_found(&self) -> u32 {
        self.0.matches_found()
    }

    #[getter]
    fn is_exhausted(&self) -> bool {
        self.0.is_exhausted()
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "MatchEngine(attrs={}, values={}, field={}, deck={})",
            config.num_attrs,
            config.num_attr_vals,
            self.0.field_len(),
            self.0.deck_size()
        )
    }
}
