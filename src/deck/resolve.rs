//! Deck resolution against a card catalog.
//!
//! Both codecs decode to a list of identifier strings. `to_counted_entries`
//! turns such a list into counted catalog entries, keeping the identifiers
//! the catalog does not know about separately so the caller can report them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardCatalog, CardIdentifier, CatalogEntry};

use super::list::DeckList;

/// A catalog card together with its copy count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedEntry {
    pub card: CatalogEntry,
    pub count: u32,
}

/// Outcome of resolving a decoded deck.
///
/// An empty `resolved` with non-empty `unresolved_ids` means nothing was
/// importable; it is not a structural error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Known cards, in first-seen order.
    pub resolved: Vec<CountedEntry>,

    /// Grammatically valid identifiers missing from the catalog,
    /// deduplicated, in first-seen order.
    pub unresolved_ids: Vec<CardIdentifier>,
}

impl Resolution {
    /// Check if every identifier was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved_ids.is_empty()
    }

    /// Check if nothing could be imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Total copies across resolved entries.
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.resolved.iter().map(|e| u64::from(e.count)).sum()
    }
}

/// Aggregate raw identifier strings and resolve them against `catalog`.
///
/// Each string is trimmed; blanks and strings that fail the identifier
/// grammar are dropped without error.
pub fn to_counted_entries<I, S>(identifiers: I, catalog: &CardCatalog) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut deck = DeckList::new();
    for raw in identifiers {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }
        match CardIdentifier::parse(raw) {
            Ok(id) => deck.push(id),
            Err(err) => debug!(token = raw, %err, "dropping invalid card identifier"),
        }
    }
    resolve(&deck, catalog)
}

/// Resolve an already-counted deck against `catalog`.
pub fn resolve(deck: &DeckList, catalog: &CardCatalog) -> Resolution {
    let mut resolution = Resolution::default();
    for (id, count) in deck.iter() {
        match catalog.get(id.as_str()) {
            Some(card) => resolution.resolved.push(CountedEntry {
                card: card.clone(),
                count,
            }),
            None => resolution.unresolved_ids.push(id.clone()),
        }
    }

    debug!(
        resolved = resolution.resolved.len(),
        unresolved = resolution.unresolved_ids.len(),
        "resolved deck against catalog"
    );
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(ids: &[&str]) -> CardCatalog {
        ids.iter()
            .map(|s| CatalogEntry::new(CardIdentifier::parse(s).unwrap(), format!("Card {s}")))
            .collect()
    }

    #[test]
    fn test_counts_known_cards() {
        let catalog = catalog(&["AA-1", "BS-2"]);
        let result = to_counted_entries(["AA-1", "BS-2", "AA-1"], &catalog);

        assert_eq!(result.resolved.len(), 2);
        assert_eq!(result.resolved[0].card.id.as_str(), "AA-1");
        assert_eq!(result.resolved[0].count, 2);
        assert_eq!(result.resolved[1].count, 1);
        assert!(result.is_complete());
        assert_eq!(result.total_copies(), 3);
    }

    #[test]
    fn test_drops_blank_and_invalid() {
        let catalog = catalog(&["AA-1"]);
        let result = to_counted_entries(["  ", " AA-1 ", "ZZZ-9", ""], &catalog);

        assert_eq!(result.resolved.len(), 1);
        assert_eq!(result.resolved[0].count, 1);
        assert!(result.unresolved_ids.is_empty());
    }

    #[test]
    fn test_unresolved_deduplicated() {
        let catalog = catalog(&["exA-1"]);
        let result = to_counted_entries(["exA-1", "BS-2", "CM-3", "BS-2"], &catalog);

        assert_eq!(result.resolved.len(), 1);
        let unresolved: Vec<_> = result.unresolved_ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(unresolved, ["BS-2", "CM-3"]);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_nothing_importable() {
        let result = to_counted_entries(["BS-2"], &CardCatalog::new());
        assert!(result.is_empty());
        assert_eq!(result.unresolved_ids.len(), 1);
    }
}
