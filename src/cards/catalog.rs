//! Card catalog for identifier lookup.
//!
//! The `CardCatalog` holds every card the deck builder knows about, keyed
//! by `CardIdentifier`. Loading it (CSV ingestion) happens elsewhere; the
//! codecs only need lookups when resolving a decoded deck.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::identifier::CardIdentifier;

/// One card known to the deck builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier the codecs refer to this card by.
    pub id: CardIdentifier,

    /// Card name (for display).
    pub name: String,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(id: CardIdentifier, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Catalog of known cards.
///
/// ## Example
///
/// ```
/// use kcg_deckcode::cards::{CardCatalog, CardIdentifier, CatalogEntry};
///
/// let mut catalog = CardCatalog::new();
/// let id = CardIdentifier::parse("AA-1").unwrap();
/// catalog.insert(CatalogEntry::new(id.clone(), "First Light"));
///
/// assert_eq!(catalog.get("AA-1").unwrap().name, "First Light");
/// assert!(catalog.contains(&id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardIdentifier, CatalogEntry>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.cards.insert(entry.id.clone(), entry)
    }

    /// Look up an entry by identifier text.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.cards.get(id)
    }

    /// Check if an identifier is known.
    #[must_use]
    pub fn contains(&self, id: &CardIdentifier) -> bool {
        self.cards.contains_key(id.as_str())
    }

    /// Number of known cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.cards.values()
    }
}

impl FromIterator<CatalogEntry> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl Extend<CatalogEntry> for CardCatalog {
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
