//! Deck-code error types.
//!
//! Every failure carries a kind from a small taxonomy so callers can decide
//! whether to abort an import or report a partial result:
//!
//! - `Validation`: malformed input detected before interpretation
//! - `Generation`: valid input that the target format cannot represent
//! - `Decode`: internal inconsistency surfaced during binary decoding

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category of a [`DeckCodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input (bad delimiters, missing prefix, foreign characters).
    Validation,
    /// Input that cannot be represented (copy count, unmapped expansion).
    Generation,
    /// Last-resort failure inside the binary decoder.
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Generation => "generation",
            ErrorKind::Decode => "decode",
        };
        f.write_str(name)
    }
}

/// Error returned by the deck-code codecs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckCodeError {
    /// Code or identifier is empty after trimming.
    #[error("input is empty")]
    Empty,

    /// Delimited code exceeds the configured ceiling.
    #[error("deck code is too long: {len} characters (maximum {max})")]
    TooLong {
        /// Length of the rejected code.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Delimited code starts with the delimiter.
    #[error("deck code must not start with '/'")]
    LeadingDelimiter,

    /// Delimited code ends with the delimiter.
    #[error("deck code must not end with '/'")]
    TrailingDelimiter,

    /// Delimited code contains an empty token.
    #[error("deck code must not contain '//'")]
    DoubleDelimiter,

    /// Identifier does not match the card identifier grammar.
    #[error("malformed card identifier: {0:?}")]
    MalformedIdentifier(String),

    /// Compact code lacks its prefix.
    #[error("deck code must start with {prefix:?}")]
    MissingPrefix {
        /// Expected prefix.
        prefix: String,
    },

    /// Compact code has nothing after the prefix.
    #[error("deck code has no payload after the prefix")]
    EmptyPayload,

    /// Compact payload contains a character outside the symbol alphabet.
    #[error("invalid character in deck code: {0:?}")]
    InvalidSymbol(char),

    /// Expansion has no slot in the compact expansion tables.
    #[error("expansion of {0:?} cannot be encoded")]
    UnmappedExpansion(String),

    /// Copy count outside the 1-4 range the compact format supports.
    #[error("{id} has {count} copies (must be 1-4)")]
    CopyCountOutOfRange {
        /// Identifier whose count is out of range.
        id: String,
        /// Offending count.
        count: u32,
    },

    /// Card number outside the 1-50 range the compact format supports.
    #[error("card number of {0:?} cannot be encoded (must be 1-50)")]
    NumberOutOfRange(String),

    /// Symbol alphabet failed its integrity check.
    #[error("symbol alphabet is invalid: {0}")]
    Alphabet(String),
}

impl DeckCodeError {
    /// Taxonomy category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckCodeError::Empty
            | DeckCodeError::TooLong { .. }
            | DeckCodeError::LeadingDelimiter
            | DeckCodeError::TrailingDelimiter
            | DeckCodeError::DoubleDelimiter
            | DeckCodeError::MalformedIdentifier(_)
            | DeckCodeError::MissingPrefix { .. }
            | DeckCodeError::EmptyPayload
            | DeckCodeError::InvalidSymbol(_) => ErrorKind::Validation,
            DeckCodeError::UnmappedExpansion(_)
            | DeckCodeError::CopyCountOutOfRange { .. }
            | DeckCodeError::NumberOutOfRange(_) => ErrorKind::Generation,
            DeckCodeError::Alphabet(_) => ErrorKind::Decode,
        }
    }

    /// The token or character that caused the failure, if there is one.
    #[must_use]
    pub fn offending_value(&self) -> Option<String> {
        match self {
            DeckCodeError::MalformedIdentifier(v)
            | DeckCodeError::UnmappedExpansion(v)
            | DeckCodeError::NumberOutOfRange(v) => Some(v.clone()),
            DeckCodeError::CopyCountOutOfRange { id, .. } => Some(id.clone()),
            DeckCodeError::InvalidSymbol(c) => Some(c.to_string()),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckCodeError>;
