//! Delimited (`/`-joined) deck code tests.

use kcg_deckcode::cards::{CardCatalog, CardIdentifier, CatalogEntry};
use kcg_deckcode::codec::{decode_delimited, encode_delimited, DelimitedCodec};
use kcg_deckcode::{CodecConfig, DeckCodeError, ErrorKind};

fn id(s: &str) -> CardIdentifier {
    CardIdentifier::parse(s).unwrap()
}

fn catalog(ids: &[&str]) -> CardCatalog {
    ids.iter()
        .map(|s| CatalogEntry::new(id(s), format!("Card {s}")))
        .collect()
}

// =============================================================================
// Structural Validation
// =============================================================================

/// Test that delimiter problems are validation failures.
#[test]
fn test_delimiter_violations() {
    let catalog = catalog(&["AA-1", "BS-2"]);

    for (code, expected) in [
        ("/AA-1", DeckCodeError::LeadingDelimiter),
        ("AA-1//BS-2", DeckCodeError::DoubleDelimiter),
        ("AA-1/", DeckCodeError::TrailingDelimiter),
        ("   ", DeckCodeError::Empty),
    ] {
        let err = decode_delimited(code, &catalog).unwrap_err();
        assert_eq!(err, expected, "{code}");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

/// Test that the configured ceiling applies after trimming.
#[test]
fn test_length_ceiling() {
    let codec = DelimitedCodec::new(&CodecConfig::new().with_max_code_length(14));
    let catalog = catalog(&["AA-1", "BS-2"]);

    assert!(codec.decode("  AA-1/BS-2/AA-1  ", &catalog).is_ok());

    let err = codec.decode("AA-1/BS-2/AA-1/BS-2", &catalog).unwrap_err();
    assert_eq!(err, DeckCodeError::TooLong { len: 19, max: 14 });
}

// =============================================================================
// Partial Recovery
// =============================================================================

/// Test that a grammatically invalid token is dropped silently.
#[test]
fn test_invalid_token_dropped() {
    let catalog = catalog(&["AA-1"]);
    let result = decode_delimited("AA-1/ZZZ-9/AA-1", &catalog).unwrap();

    assert_eq!(result.resolved.len(), 1);
    assert_eq!(result.resolved[0].card.id, id("AA-1"));
    assert_eq!(result.resolved[0].count, 2);
    assert!(result.unresolved_ids.is_empty());
}

/// Test that unknown but valid identifiers are reported once.
#[test]
fn test_unresolved_deduplicated() {
    let catalog = catalog(&["exA-1"]);
    let result = decode_delimited("exA-1/BS-2/BS-2", &catalog).unwrap();

    assert_eq!(result.resolved.len(), 1);
    assert_eq!(result.resolved[0].card.id, id("exA-1"));
    assert_eq!(result.resolved[0].count, 1);
    assert_eq!(result.unresolved_ids, vec![id("BS-2")]);
}

/// Test that a deck of only unknown cards is not an error.
#[test]
fn test_nothing_importable() {
    let result = decode_delimited("BS-2/CM-3", &CardCatalog::new()).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.unresolved_ids, vec![id("BS-2"), id("CM-3")]);
}

/// Test that copies beyond four are fine in this format.
#[test]
fn test_no_copy_limit() {
    let catalog = catalog(&["AA-1"]);
    let code = encode_delimited(&vec![id("AA-1"); 9]);
    let result = decode_delimited(&code, &catalog).unwrap();

    assert_eq!(result.resolved[0].count, 9);
}

// =============================================================================
// Round Trips
// =============================================================================

/// Test that counts survive encode then decode.
#[test]
fn test_round_trip_counts() {
    let catalog = catalog(&["AA-1", "BS-2", "prmD-40"]);
    let codec = DelimitedCodec::default();

    let code = codec.encode_counted(&[(id("BS-2"), 3), (id("prmD-40"), 1), (id("AA-1"), 2)]);
    assert_eq!(code, "BS-2/BS-2/BS-2/prmD-40/AA-1/AA-1");

    let result = codec.decode(&code, &catalog).unwrap();
    let counts: Vec<_> = result
        .resolved
        .iter()
        .map(|e| (e.card.id.as_str(), e.count))
        .collect();
    assert_eq!(counts, [("BS-2", 3), ("prmD-40", 1), ("AA-1", 2)]);
}

/// Test that whitespace around tokens is tolerated.
#[test]
fn test_whitespace_tokens() {
    let catalog = catalog(&["AA-1", "BS-2"]);
    let result = decode_delimited(" AA-1 / BS-2 ", &catalog).unwrap();

    assert_eq!(result.resolved.len(), 2);
    assert!(result.is_complete());
}
