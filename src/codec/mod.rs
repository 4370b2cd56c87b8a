//! Deck-code codecs.
//!
//! Two formats share the card identifier grammar:
//!
//! - **Delimited** (`AA-1/AA-1/exM-3`): readable, unbounded apart from a
//!   configured length ceiling.
//! - **Compact** (`KCG-...`): dense bit packing through a 64-symbol
//!   alphabet, limited to 1-4 copies of cards numbered 1-50.
//!
//! The free functions use the default [`CodecConfig`].

pub mod compact;
pub mod delimited;

pub use compact::CompactCodec;
pub use delimited::DelimitedCodec;

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardIdentifier};
use crate::core::{CodecConfig, Result};
use crate::deck::{to_counted_entries, Resolution};

/// The two deck-code formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckCodeFormat {
    Delimited,
    Compact,
}

impl DeckCodeFormat {
    /// Guess the format of a code from its prefix.
    #[must_use]
    pub fn detect(code: &str, config: &CodecConfig) -> Self {
        if code.trim().starts_with(config.compact_prefix.as_str()) {
            DeckCodeFormat::Compact
        } else {
            DeckCodeFormat::Delimited
        }
    }
}

/// Common surface of both codecs.
pub trait DeckCodec {
    /// Format this codec reads and writes.
    fn format(&self) -> DeckCodeFormat;

    /// Encode one identifier per copy.
    fn encode(&self, identifiers: &[CardIdentifier]) -> Result<String>;

    /// Decode into one identifier per copy.
    fn decode_ids(&self, code: &str) -> Result<Vec<CardIdentifier>>;

    /// Decode and resolve against a catalog.
    fn decode_resolved(&self, code: &str, catalog: &CardCatalog) -> Result<Resolution> {
        let ids = self.decode_ids(code)?;
        Ok(to_counted_entries(ids.iter().map(CardIdentifier::as_str), catalog))
    }
}

impl DeckCodec for DelimitedCodec {
    fn format(&self) -> DeckCodeFormat {
        DeckCodeFormat::Delimited
    }

    fn encode(&self, identifiers: &[CardIdentifier]) -> Result<String> {
        Ok(DelimitedCodec::encode(self, identifiers))
    }

    fn decode_ids(&self, code: &str) -> Result<Vec<CardIdentifier>> {
        DelimitedCodec::decode_ids(self, code)
    }
}

impl DeckCodec for CompactCodec {
    fn format(&self) -> DeckCodeFormat {
        DeckCodeFormat::Compact
    }

    fn encode(&self, identifiers: &[CardIdentifier]) -> Result<String> {
        CompactCodec::encode(self, identifiers)
    }

    fn decode_ids(&self, code: &str) -> Result<Vec<CardIdentifier>> {
        CompactCodec::decode(self, code)
    }
}

/// Build the codec for a format.
#[must_use]
pub fn codec_for(format: DeckCodeFormat, config: &CodecConfig) -> Box<dyn DeckCodec> {
    match format {
        DeckCodeFormat::Delimited => Box::new(DelimitedCodec::new(config)),
        DeckCodeFormat::Compact => Box::new(CompactCodec::new(config)),
    }
}

/// Decode a code in either format and resolve it against `catalog`.
pub fn decode_any(code: &str, catalog: &CardCatalog, config: &CodecConfig) -> Result<Resolution> {
    let format = DeckCodeFormat::detect(code, config);
    tracing::debug!(?format, "detected deck code format");
    codec_for(format, config).decode_resolved(code, catalog)
}

/// Join identifiers with `/`.
#[must_use]
pub fn encode_delimited(identifiers: &[CardIdentifier]) -> String {
    DelimitedCodec::default().encode(identifiers)
}

/// Decode a delimited code and resolve it against `catalog`.
pub fn decode_delimited(code: &str, catalog: &CardCatalog) -> Result<Resolution> {
    DelimitedCodec::default().decode(code, catalog)
}

/// Encode identifiers as a compact `KCG-` code.
pub fn encode_compact(identifiers: &[CardIdentifier]) -> Result<String> {
    CompactCodec::default().encode(identifiers)
}

/// Decode a compact `KCG-` code into one identifier per copy.
pub fn decode_compact(code: &str) -> Result<Vec<CardIdentifier>> {
    CompactCodec::default().decode(code)
}
