//! Codec bindings for Python.

use pyo3::prelude::*;

use crate::cards::CardIdentifier;
use crate::codec::{CompactCodec, DeckCodeFormat, DelimitedCodec};
use crate::core::{CodecConfig, DEFAULT_COMPACT_PREFIX, DEFAULT_MAX_CODE_LENGTH};

use super::to_py_err;

fn parse_all(identifiers: Vec<String>) -> PyResult<Vec<CardIdentifier>> {
    identifiers
        .iter()
        .map(|raw| CardIdentifier::parse(raw).map_err(to_py_err))
        .collect()
}

fn into_strings(ids: Vec<CardIdentifier>) -> Vec<String> {
    ids.into_iter().map(CardIdentifier::into_string).collect()
}

/// Both deck-code codecs sharing one configuration.
#[pyclass(name = "DeckCodec")]
#[derive(Clone, Debug)]
pub struct PyDeckCodec {
    config: CodecConfig,
    delimited: DelimitedCodec,
    compact: CompactCodec,
}

#[pymethods]
impl PyDeckCodec {
    #[new]
    #[pyo3(signature = (max_code_length=DEFAULT_MAX_CODE_LENGTH, compact_prefix=DEFAULT_COMPACT_PREFIX.to_string()))]
    fn new(max_code_length: usize, compact_prefix: String) -> Self {
        let config = CodecConfig::new()
            .with_max_code_length(max_code_length)
            .with_compact_prefix(compact_prefix);
        Self {
            delimited: DelimitedCodec::new(&config),
            compact: CompactCodec::new(&config),
            config,
        }
    }

    /// Join identifiers with `/`.
    fn encode_delimited(&self, identifiers: Vec<String>) -> PyResult<String> {
        Ok(self.delimited.encode(&parse_all(identifiers)?))
    }

    /// Decode a delimited code into one identifier per copy.
    fn decode_delimited_ids(&self, code: &str) -> PyResult<Vec<String>> {
        self.delimited
            .decode_ids(code)
            .map(into_strings)
            .map_err(to_py_err)
    }

    /// Encode identifiers as a compact code.
    fn encode_compact(&self, identifiers: Vec<String>) -> PyResult<String> {
        self.compact
            .encode(&parse_all(identifiers)?)
            .map_err(to_py_err)
    }

    /// Decode a compact code into one identifier per copy.
    fn decode_compact(&self, code: &str) -> PyResult<Vec<String>> {
        self.compact.decode(code).map(into_strings).map_err(to_py_err)
    }

    /// `"compact"` or `"delimited"`.
    fn detect_format(&self, code: &str) -> &'static str {
        match DeckCodeFormat::detect(code, &self.config) {
            DeckCodeFormat::Compact => "compact",
            DeckCodeFormat::Delimited => "delimited",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "DeckCodec(max_code_length={}, compact_prefix={:?})",
            self.config.max_code_length, self.config.compact_prefix
        )
    }
}
