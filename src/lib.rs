//! # kcg-deckcode
//!
//! Deck codes for a trading-card deck builder: turn a deck into a short,
//! shareable string and back.
//!
//! ## Formats
//!
//! 1. **Delimited**: `AA-1/AA-1/exM-3`. One identifier per copy, joined
//!    with `/`. Easy to read and edit by hand.
//!
//! 2. **Compact**: `KCG-tYZekgTL93WdU`. Each card becomes a five-digit
//!    tuple, the digits are packed into 10-bit values, and the bits are
//!    written through a 64-symbol alphabet behind a header symbol.
//!
//! ## Design Principles
//!
//! - **Pure**: every operation is a deterministic function of its input.
//!   The only shared state is the immutable lookup tables.
//! - **Strict edges, lenient middle**: structural problems fail the whole
//!   decode; individual malformed tokens or tuples are skipped.
//! - **Catalog-agnostic codecs**: codecs work on identifiers; resolving
//!   them against known cards is a separate step (`deck::resolve`).
//!
//! ## Modules
//!
//! - `core`: Errors and configuration
//! - `cards`: Card identifiers and the catalog
//! - `deck`: Counted deck lists and catalog resolution
//! - `codec`: The delimited and compact codecs

pub mod core;
pub mod cards;
pub mod deck;
pub mod codec;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CodecConfig, DeckCodeError, ErrorKind, Result};

pub use crate::cards::{CardCatalog, CardIdentifier, CardKind, CardParts, CatalogEntry, Expansion};

pub use crate::deck::{to_counted_entries, CountedEntry, DeckList, Resolution};

pub use crate::codec::{
    decode_any, decode_compact, decode_delimited, encode_compact, encode_delimited,
    CompactCodec, DeckCodec, DeckCodeFormat, DelimitedCodec,
};
