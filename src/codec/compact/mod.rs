//! Compact deck codes (`KCG-...`).
//!
//! ## Layout
//!
//! 1. Every distinct card becomes a five-digit tuple (see [`tuple`]).
//! 2. The concatenated digits are cut into three-digit runs, each stored
//!    as a 10-bit value (see [`digits`]).
//! 3. The bits are zero-padded to a multiple of six and written one
//!    alphabet symbol per six bits (see [`alphabet`]).
//! 4. A header symbol is prepended: row `7 - padding`, column
//!    `7 - (zero triples mod 8)`.
//!
//! ## Strict edges, lenient middle
//!
//! A bad prefix, an empty payload or a foreign character fails the whole
//! decode. Tuples that turn out malformed after unpacking are skipped so
//! codes from newer deck builders still import what they can.
//!
//! ```
//! use kcg_deckcode::cards::CardIdentifier;
//! use kcg_deckcode::codec::CompactCodec;
//!
//! let codec = CompactCodec::default();
//! let deck = [CardIdentifier::parse("AA-1").unwrap()];
//!
//! let code = codec.encode(&deck).unwrap();
//! assert_eq!(code, "KCG-dYZ6Q");
//! assert_eq!(codec.decode(&code).unwrap(), deck);
//! ```

pub mod alphabet;
pub mod bits;
pub mod digits;
pub mod tables;
pub mod tuple;

use tracing::{debug, trace};

use crate::cards::CardIdentifier;
use crate::core::{CodecConfig, DeckCodeError, Result};
use crate::deck::DeckList;

use self::alphabet::{SymbolAlphabet, MATRIX_SIZE};
use self::bits::BitBuf;

/// Bits carried by one symbol.
pub const SYMBOL_BITS: usize = 6;

/// Width of the groups counted for the header column.
const HEADER_GROUP_BITS: usize = 3;

/// Encoder/decoder for compact deck codes.
#[derive(Clone, Debug)]
pub struct CompactCodec {
    prefix: String,
    alphabet: &'static SymbolAlphabet,
}

impl Default for CompactCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

impl CompactCodec {
    /// Create a codec using the standard alphabet.
    #[must_use]
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            prefix: config.compact_prefix.clone(),
            alphabet: SymbolAlphabet::standard(),
        }
    }

    /// Create a codec with a different alphabet.
    #[must_use]
    pub fn with_alphabet(config: &CodecConfig, alphabet: &'static SymbolAlphabet) -> Self {
        Self {
            prefix: config.compact_prefix.clone(),
            alphabet,
        }
    }

    /// Prefix every code starts with.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Encode one identifier per copy.
    ///
    /// Copies of the same card are counted together; tuples follow the
    /// order in which each card first appears.
    pub fn encode(&self, identifiers: &[CardIdentifier]) -> Result<String> {
        let deck: DeckList = identifiers.iter().cloned().collect();
        self.encode_deck(&deck)
    }

    /// Encode `(identifier, copies)` pairs.
    pub fn encode_counted(&self, entries: &[(CardIdentifier, u32)]) -> Result<String> {
        let deck: DeckList = entries.iter().cloned().collect();
        self.encode_deck(&deck)
    }

    /// Encode an aggregated deck.
    ///
    /// Spellings of one card (`AA-1`, `AA-01`) share a tuple, so their
    /// copies are summed before the bound is checked. Fails if any card has
    /// 0 or more than 4 copies, an expansion outside the two tables, or a
    /// number outside 1-50.
    pub fn encode_deck(&self, deck: &DeckList) -> Result<String> {
        let deck: DeckList = deck.iter().map(|(id, copies)| (id.canonical(), copies)).collect();

        let mut digit_stream = Vec::with_capacity(deck.distinct_len() * tuple::TUPLE_WIDTH);
        for (id, copies) in deck.iter() {
            digit_stream.extend_from_slice(&tuple::encode_tuple(id, copies)?);
        }
        trace!(digits = digit_stream.len(), "built tuple digit stream");

        let mut bits = BitBuf::new();
        digits::pack(&digit_stream, &mut bits);
        let padding = bits.pad_to_multiple(SYMBOL_BITS);
        let zero_groups = bits.count_zero_groups(HEADER_GROUP_BITS);

        let mut code = String::with_capacity(self.prefix.len() + 1 + bits.len() / SYMBOL_BITS);
        code.push_str(&self.prefix);
        code.push(self.header_symbol(padding, zero_groups));
        code.extend(bits.chunks(SYMBOL_BITS).map(|v| self.alphabet.symbol(v as u8)));

        debug!(
            cards = deck.distinct_len(),
            copies = deck.total_copies(),
            len = code.len(),
            "encoded compact deck code"
        );
        Ok(code)
    }

    /// Decode a code into one identifier per copy, in tuple order.
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn decode(&self, code: &str) -> Result<Vec<CardIdentifier>> {
        let payload = code
            .trim()
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| DeckCodeError::MissingPrefix {
                prefix: self.prefix.clone(),
            })?;

        let mut values = Vec::with_capacity(payload.len());
        for symbol in payload.chars() {
            let value = self
                .alphabet
                .index_of(symbol)
                .ok_or(DeckCodeError::InvalidSymbol(symbol))?;
            values.push(value);
        }
        let Some((&header, body)) = values.split_first() else {
            return Err(DeckCodeError::EmptyPayload);
        };

        let mut bits = BitBuf::new();
        for &value in body {
            bits.push(u16::from(value), SYMBOL_BITS as u32);
        }
        bits.truncate_end(trailing_bits_to_remove(header));

        let cells = digits::realign(digits::unpack(&bits));
        trace!(cells = cells.len(), "unpacked digit stream");

        let mut cards = Vec::new();
        for group in digits::tuples(&cells) {
            if let Some((id, copies)) = tuple::decode_tuple(group) {
                cards.extend(std::iter::repeat(id).take(copies as usize));
            }
        }

        debug!(copies = cards.len(), len = code.len(), "decoded compact deck code");
        Ok(cards)
    }

    fn header_symbol(&self, padding: usize, zero_groups: usize) -> char {
        let last = MATRIX_SIZE - 1;
        let row = last - padding;
        let col = last - zero_groups % MATRIX_SIZE;
        self.alphabet.symbol_at(row as u8, col as u8)
    }
}

/// Bits to strip from the end of the body, as read from the header.
fn trailing_bits_to_remove(header: u8) -> usize {
    let position = i32::from(header) + 1;
    let size = MATRIX_SIZE as i32;
    if position % size == 0 {
        return 0;
    }
    let quotient = position / size + 1;
    usize::try_from(size - quotient).unwrap_or(0)
}
