//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card from its attribute values.
    #[new]
    fn new(attrs: Vec<u8>) -> Self {
        Self(Card::new(&attrs))
    }

    /// Create a blank placeholder.
    #[staticmethod]
    fn blank() -> Self {
        Self(Card::blank())
    }

    /// Attribute values (empty for blanks).
    #[getter]
    fn attrs(&self) -> Vec<u8> {
        self.0.attrs().to_vec()
    }

    #[getter]
    fn is_blank(&self) -> bool {
        self.0.is_blank()
    }

    fn __len__(&self) -> usize {
        self.0.attrs().len()
    }

    fn __repr__(&self) -> String {
        if self.0.is_blank() {
            "Card.blank()".to_string()
        } else {
            format!("Card({:?})", self.0.attrs())
        }
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
