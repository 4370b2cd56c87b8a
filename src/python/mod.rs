//! Python bindings for the deck-code codecs.
//!
//! # Quick Start
//!
//! ```python
//! import kcg_deckcode as kcg
//!
//! codec = kcg.DeckCodec()
//!
//! code = codec.encode_compact(["AA-1", "AA-1", "exM-3"])
//! cards = codec.decode_compact(code)
//!
//! # Delimited codes drop malformed tokens instead of failing
//! cards = codec.decode_delimited_ids("AA-1/oops/BS-2")
//! ```

use pyo3::prelude::*;

use crate::core::DeckCodeError;

mod py_cards;
mod py_codec;

pub use py_cards::*;
pub use py_codec::*;

/// Every codec failure surfaces as `ValueError` carrying the message.
pub(crate) fn to_py_err(err: DeckCodeError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{} error: {}", err.kind(), err))
}

/// kcg_deckcode: deck codes for the deck builder.
#[pymodule]
fn kcg_deckcode(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardIdentifier>()?;
    m.add_class::<PyDeckCodec>()?;
    m.add_function(wrap_pyfunction!(is_card_identifier, m)?)?;
    Ok(())
}
