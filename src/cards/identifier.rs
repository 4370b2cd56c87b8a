//! Card identifiers - the textual ID grammar shared by every codec.
//!
//! An identifier has the shape `<expansion><kind>-<number>`:
//!
//! - expansion: a single uppercase letter `A`-`Z`, or `ex` / `prm`
//! - kind: one of `A`, `S`, `M`, `D`
//! - number: one or more decimal digits
//!
//! ```
//! use kcg_deckcode::cards::{CardIdentifier, CardKind, Expansion};
//!
//! let id = CardIdentifier::parse("  exM-12 ").unwrap();
//! assert_eq!(id.as_str(), "exM-12");
//!
//! let parts = id.parts();
//! assert_eq!(parts.expansion, Expansion::Ex);
//! assert_eq!(parts.kind, CardKind::M);
//! assert_eq!(parts.number, 12);
//! ```
//!
//! `CardIdentifier` is a validated string. It never checks that the card
//! exists; that is the catalog's job.

use serde::{Deserialize, Serialize};

use crate::core::{DeckCodeError, Result};

/// Expansion part of a card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// Regular expansion letter `A`-`Z`.
    Letter(char),
    /// The `ex` meta-expansion.
    Ex,
    /// The `prm` (promo) meta-expansion.
    Prm,
}

impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expansion::Letter(c) => write!(f, "{c}"),
            Expansion::Ex => f.write_str("ex"),
            Expansion::Prm => f.write_str("prm"),
        }
    }
}

/// Card kind letter of an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    A,
    S,
    M,
    D,
}

impl CardKind {
    /// All kinds in their canonical order.
    pub const ALL: [CardKind; 4] = [CardKind::A, CardKind::S, CardKind::M, CardKind::D];

    /// Parse a kind letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(CardKind::A),
            'S' => Some(CardKind::S),
            'M' => Some(CardKind::M),
            'D' => Some(CardKind::D),
            _ => None,
        }
    }

    /// The kind letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CardKind::A => 'A',
            CardKind::S => 'S',
            CardKind::M => 'M',
            CardKind::D => 'D',
        }
    }
}

/// Parsed view of a card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardParts {
    pub expansion: Expansion,
    pub kind: CardKind,
    /// Card number. Saturates at `u64::MAX` for absurdly long digit runs.
    pub number: u64,
}

/// A card identifier that satisfies the identifier grammar.
///
/// Equality, ordering and hashing only look at the text, so identifiers
/// produced by different codecs compare equal whenever their text does.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardIdentifier {
    text: String,
    parts: CardParts,
}

impl CardIdentifier {
    /// Validate `raw` against the identifier grammar.
    ///
    /// Surrounding whitespace is trimmed; nothing else is normalized.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DeckCodeError::Empty);
        }
        match split_parts(trimmed) {
            Some(parts) => Ok(Self { text: trimmed.to_string(), parts }),
            None => Err(DeckCodeError::MalformedIdentifier(trimmed.to_string())),
        }
    }

    /// Build an identifier from its parts, rendering the number without
    /// leading zeros.
    #[must_use]
    pub fn from_parts(parts: CardParts) -> Self {
        Self {
            text: format!("{}{}-{}", parts.expansion, parts.kind.as_char(), parts.number),
            parts,
        }
    }

    /// Same card with the number written without leading zeros.
    ///
    /// `AA-01` and `AA-001` both become `AA-1`.
    #[must_use]
    pub fn canonical(&self) -> Self {
        Self::from_parts(self.parts)
    }

    /// Check whether `raw` would parse.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        !trimmed.is_empty() && split_parts(trimmed).is_some()
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Split into expansion, kind and number.
    #[must_use]
    pub fn parts(&self) -> CardParts {
        self.parts
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for CardIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for CardIdentifier {}

impl std::hash::Hash for CardIdentifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for CardIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CardIdentifier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl std::fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for CardIdentifier {
    type Err = DeckCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardIdentifier {
    type Error = DeckCodeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CardIdentifier {
    type Error = DeckCodeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<CardIdentifier> for String {
    fn from(id: CardIdentifier) -> Self {
        id.text
    }
}

impl AsRef<str> for CardIdentifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::borrow::Borrow<str> for CardIdentifier {
    fn borrow(&self) -> &str {
        &self.text
    }
}

/// Match `^([A-Z]|ex|prm)(A|S|M|D)-\d+$` and pull out the pieces.
fn split_parts(s: &str) -> Option<CardParts> {
    let (expansion, rest) = if let Some(rest) = s.strip_prefix("prm") {
        (Expansion::Prm, rest)
    } else if let Some(rest) = s.strip_prefix("ex") {
        (Expansion::Ex, rest)
    } else {
        let first = s.chars().next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        (Expansion::Letter(first), &s[1..])
    };

    let mut chars = rest.chars();
    let kind = CardKind::from_char(chars.next()?)?;
    if chars.next()? != '-' {
        return None;
    }

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number = digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });

    Some(CardParts { expansion, kind, number })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for raw in ["AA-1", "ZD-50", "exA-1", "prmS-7", "BM-007", "QD-123456"] {
            assert!(CardIdentifier::parse(raw).is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn test_trims_whitespace() {
        let id = CardIdentifier::parse("\t AS-3 \n").unwrap();
        assert_eq!(id.as_str(), "AS-3");
    }

    #[test]
    fn test_expansion_display() {
        assert_eq!(Expansion::Letter('Q').to_string(), "Q");
        assert_eq!(Expansion::Ex.to_string(), "ex");
        assert_eq!(Expansion::Prm.to_string(), "prm");
    }

    #[test]
    fn test_canonical_strips_leading_zeros() {
        for raw in ["AA-1", "AA-01", "AA-001"] {
            assert_eq!(CardIdentifier::parse(raw).unwrap().canonical().as_str(), "AA-1");
        }
        let id = CardIdentifier::parse("prmD-050").unwrap().canonical();
        assert_eq!(id.as_str(), "prmD-50");
        assert_eq!(id.parts().number, 50);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(CardIdentifier::parse("   "), Err(DeckCodeError::Empty));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["A-1", "aA-1", "AX-1", "AA1", "AA-", "AA-1a", "EXA-1", "pmA-1", "AA--1", "AA-+1"] {
            let err = CardIdentifier::parse(raw).unwrap_err();
            assert_eq!(err, DeckCodeError::MalformedIdentifier(raw.to_string()), "{raw}");
        }
    }

    #[test]
    fn test_parts() {
        let parts = CardIdentifier::parse("prmD-08").unwrap().parts();
        assert_eq!(parts.expansion, Expansion::Prm);
        assert_eq!(parts.kind, CardKind::D);
        assert_eq!(parts.number, 8);

        let parts = CardIdentifier::parse("RA-50").unwrap().parts();
        assert_eq!(parts.expansion, Expansion::Letter('R'));
    }

    #[test]
    fn test_from_parts_drops_leading_zeros() {
        let id = CardIdentifier::from_parts(CardParts {
            expansion: Expansion::Ex,
            kind: CardKind::S,
            number: 5,
        });
        assert_eq!(id.as_str(), "exS-5");
    }

    #[test]
    fn test_number_saturates() {
        let id = CardIdentifier::parse("AA-99999999999999999999999").unwrap();
        assert_eq!(id.parts().number, u64::MAX);
    }

    #[test]
    fn test_serde() {
        let id = CardIdentifier::parse("JS-7").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"JS-7\"");

        let back: CardIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<CardIdentifier>("\"nope\"").is_err());
    }
}
