//! Card identifier bindings for Python.

use pyo3::prelude::*;

use crate::cards::CardIdentifier;

use super::to_py_err;

/// Python wrapper for CardIdentifier.
#[pyclass(name = "CardIdentifier")]
#[derive(Clone, Debug)]
pub struct PyCardIdentifier(pub CardIdentifier);

#[pymethods]
impl PyCardIdentifier {
    /// Parse and validate an identifier.
    #[new]
    fn new(raw: &str) -> PyResult<Self> {
        CardIdentifier::parse(raw).map(Self).map_err(to_py_err)
    }

    /// Expansion token (`A`-`Z`, `ex` or `prm`).
    #[getter]
    fn expansion(&self) -> String {
        self.0.parts().expansion.to_string()
    }

    /// Kind letter.
    #[getter]
    fn kind(&self) -> char {
        self.0.parts().kind.as_char()
    }

    #[getter]
    fn number(&self) -> u64 {
        self.0.parts().number
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("CardIdentifier({:?})", self.0.as_str())
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

/// Check whether a string satisfies the card identifier grammar.
#[pyfunction]
pub fn is_card_identifier(raw: &str) -> bool {
    CardIdentifier::is_valid(raw)
}
