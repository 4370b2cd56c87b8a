//! Per-card digit tuples.
//!
//! Each distinct card becomes five decimal digits `c1 c2 c3 c4 c5`:
//!
//! | digit | meaning |
//! |---|---|
//! | `c1` | slot in the expansion table |
//! | `c2` | kind (1=A, 2=S, 3=M, 4=D) |
//! | `c3c4` | card number, 01-50 |
//! | `c5` | copies (1-4), plus 5 when the expansion is in the high table |

use tracing::debug;

use crate::cards::{CardIdentifier, CardParts};
use crate::core::{DeckCodeError, Result};

use super::tables::{
    expansion_at, expansion_slot, kind_at, kind_digit, ExpansionTable, HIGH_TABLE_OFFSET,
};

/// Digits per tuple.
pub const TUPLE_WIDTH: usize = 5;

/// Copy counts the format can carry.
pub const MIN_COPIES: u32 = 1;
pub const MAX_COPIES: u32 = 4;

/// Card numbers the format can carry.
pub const MIN_NUMBER: u64 = 1;
pub const MAX_NUMBER: u64 = 50;

/// Encode one card and its copy count.
pub fn encode_tuple(id: &CardIdentifier, copies: u32) -> Result<[u8; TUPLE_WIDTH]> {
    if !(MIN_COPIES..=MAX_COPIES).contains(&copies) {
        return Err(DeckCodeError::CopyCountOutOfRange {
            id: id.to_string(),
            count: copies,
        });
    }

    let parts = id.parts();
    let (table, slot) = expansion_slot(parts.expansion)
        .ok_or_else(|| DeckCodeError::UnmappedExpansion(id.to_string()))?;
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&parts.number) {
        return Err(DeckCodeError::NumberOutOfRange(id.to_string()));
    }

    let copies = copies as u8;
    let count_digit = match table {
        ExpansionTable::Low => copies,
        ExpansionTable::High => copies + HIGH_TABLE_OFFSET,
    };
    let number = parts.number as u8;

    Ok([
        slot,
        kind_digit(parts.kind),
        number / 10,
        number % 10,
        count_digit,
    ])
}

/// Decode one tuple into a card and its copy count.
///
/// Returns `None` for tuples no card maps to.
#[must_use]
pub fn decode_tuple(digits: [u8; TUPLE_WIDTH]) -> Option<(CardIdentifier, u32)> {
    let [slot, kind, tens, ones, count_digit] = digits;

    let (table, copies) = match count_digit {
        1..=4 => (ExpansionTable::Low, count_digit),
        6..=9 => (ExpansionTable::High, count_digit - HIGH_TABLE_OFFSET),
        _ => {
            debug!(?digits, "skipping tuple with unknown copy digit");
            return None;
        }
    };

    let Some(expansion) = expansion_at(table, slot) else {
        debug!(?digits, "skipping tuple with unknown expansion slot");
        return None;
    };
    let Some(kind) = kind_at(kind) else {
        debug!(?digits, "skipping tuple with unknown kind digit");
        return None;
    };
    let number = u64::from(tens) * 10 + u64::from(ones);
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        debug!(?digits, "skipping tuple with out-of-range number");
        return None;
    }

    let id = CardIdentifier::from_parts(CardParts { expansion, kind, number });
    Some((id, u32::from(copies)))
}
