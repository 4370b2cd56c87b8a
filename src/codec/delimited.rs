//! Delimited deck codes (`AA-1/AA-1/exM-3`).
//!
//! The human-readable format: one identifier per copy, joined with `/`.
//! Decoding rejects structural delimiter problems outright but drops
//! individual malformed tokens so a single typo does not lose the deck.

use tracing::{debug, trace};

use crate::cards::{CardCatalog, CardIdentifier};
use crate::core::{CodecConfig, DeckCodeError, Result};
use crate::deck::{to_counted_entries, Resolution};

/// Separator between identifiers.
pub const DELIMITER: char = '/';

/// Encoder/decoder for delimited deck codes.
///
/// ```
/// use kcg_deckcode::cards::{CardCatalog, CardIdentifier, CatalogEntry};
/// use kcg_deckcode::codec::DelimitedCodec;
///
/// let codec = DelimitedCodec::default();
/// let id = CardIdentifier::parse("AA-1").unwrap();
///
/// let code = codec.encode(&[id.clone(), id.clone()]);
/// assert_eq!(code, "AA-1/AA-1");
///
/// let catalog: CardCatalog = [CatalogEntry::new(id, "First Light")].into_iter().collect();
/// let result = codec.decode(&code, &catalog).unwrap();
/// assert_eq!(result.resolved[0].count, 2);
/// ```
#[derive(Clone, Debug)]
pub struct DelimitedCodec {
    max_code_length: usize,
}

impl Default for DelimitedCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

impl DelimitedCodec {
    /// Create a codec from configuration.
    #[must_use]
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            max_code_length: config.max_code_length,
        }
    }

    /// Longest code `decode` accepts.
    #[must_use]
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Join identifiers in the given order, repeats included.
    #[must_use]
    pub fn encode(&self, identifiers: &[CardIdentifier]) -> String {
        let code = identifiers
            .iter()
            .map(CardIdentifier::as_str)
            .collect::<Vec<_>>()
            .join("/");
        debug!(copies = identifiers.len(), len = code.len(), "encoded delimited deck code");
        code
    }

    /// Join `(identifier, copies)` pairs, repeating each identifier.
    #[must_use]
    pub fn encode_counted(&self, entries: &[(CardIdentifier, u32)]) -> String {
        let expanded: Vec<CardIdentifier> = entries
            .iter()
            .flat_map(|(id, copies)| std::iter::repeat(id.clone()).take(*copies as usize))
            .collect();
        self.encode(&expanded)
    }

    /// Split a code into its raw tokens after the structural checks.
    pub fn split<'a>(&self, code: &'a str) -> Result<Vec<&'a str>> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DeckCodeError::Empty);
        }
        let len = code.chars().count();
        if len > self.max_code_length {
            return Err(DeckCodeError::TooLong {
                len,
                max: self.max_code_length,
            });
        }
        if code.starts_with(DELIMITER) {
            return Err(DeckCodeError::LeadingDelimiter);
        }
        if code.ends_with(DELIMITER) {
            return Err(DeckCodeError::TrailingDelimiter);
        }
        if code.contains("//") {
            return Err(DeckCodeError::DoubleDelimiter);
        }

        let tokens: Vec<&str> = code.split(DELIMITER).collect();
        trace!(tokens = tokens.len(), "split delimited deck code");
        Ok(tokens)
    }

    /// Decode into one identifier per copy, dropping malformed tokens.
    pub fn decode_ids(&self, code: &str) -> Result<Vec<CardIdentifier>> {
        let mut ids = Vec::new();
        for token in self.split(code)? {
            match CardIdentifier::parse(token) {
                Ok(id) => ids.push(id),
                Err(err) => debug!(token, %err, "dropping malformed token"),
            }
        }
        Ok(ids)
    }

    /// Decode and resolve against `catalog`.
    pub fn decode(&self, code: &str, catalog: &CardCatalog) -> Result<Resolution> {
        let tokens = self.split(code)?;
        Ok(to_counted_entries(tokens, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CardIdentifier {
        CardIdentifier::parse(s).unwrap()
    }

    #[test]
    fn test_encode_keeps_order_and_repeats() {
        let codec = DelimitedCodec::default();
        let code = codec.encode(&[id("BS-2"), id("AA-1"), id("BS-2")]);
        assert_eq!(code, "BS-2/AA-1/BS-2");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(DelimitedCodec::default().encode(&[]), "");
    }

    #[test]
    fn test_encode_counted() {
        let codec = DelimitedCodec::default();
        let code = codec.encode_counted(&[(id("AA-1"), 2), (id("exM-3"), 1)]);
        assert_eq!(code, "AA-1/AA-1/exM-3");
    }

    #[test]
    fn test_structural_errors() {
        let codec = DelimitedCodec::default();
        assert_eq!(codec.split("  "), Err(DeckCodeError::Empty));
        assert_eq!(codec.split("/AA-1"), Err(DeckCodeError::LeadingDelimiter));
        assert_eq!(codec.split("AA-1/"), Err(DeckCodeError::TrailingDelimiter));
        assert_eq!(codec.split("AA-1//BS-2"), Err(DeckCodeError::DoubleDelimiter));
    }

    #[test]
    fn test_too_long() {
        let codec = DelimitedCodec::new(&CodecConfig::new().with_max_code_length(9));
        assert!(codec.split("AA-1/BS-2").is_ok());
        assert_eq!(
            codec.split("AA-1/BS-22"),
            Err(DeckCodeError::TooLong { len: 10, max: 9 })
        );
    }

    #[test]
    fn test_decode_ids_drops_malformed() {
        let codec = DelimitedCodec::default();
        let ids = codec.decode_ids(" AA-1/ZZZ-9/ AA-1 ").unwrap();
        assert_eq!(ids, vec![id("AA-1"), id("AA-1")]);
    }
}
