//! Counted deck lists.
//!
//! A `DeckList` maps card identifiers to copy counts while remembering the
//! order in which each identifier was first seen. That order is what the
//! compact codec walks when it lays out tuples, so feeding the same
//! occurrences in the same order always yields the same code.

use rustc_hash::FxHashMap;

use crate::cards::CardIdentifier;

/// Insertion-ordered identifier -> copy count aggregation.
///
/// ## Usage
///
/// ```
/// use kcg_deckcode::cards::CardIdentifier;
/// use kcg_deckcode::deck::DeckList;
///
/// let ids = ["BS-2", "AA-1", "BS-2"].map(|s| CardIdentifier::parse(s).unwrap());
/// let deck: DeckList = ids.into_iter().collect();
///
/// assert_eq!(deck.distinct_len(), 2);
/// assert_eq!(deck.total_copies(), 3);
/// assert_eq!(deck.count("BS-2"), 2);
///
/// // First-seen order is kept.
/// let order: Vec<_> = deck.iter().map(|(id, _)| id.as_str()).collect();
/// assert_eq!(order, ["BS-2", "AA-1"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckList {
    /// Entries in first-seen order.
    entries: Vec<(CardIdentifier, u32)>,

    /// Identifier -> index into `entries`.
    index: FxHashMap<CardIdentifier, usize>,
}

impl DeckList {
    /// Create an empty deck list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of a card.
    pub fn push(&mut self, id: CardIdentifier) {
        self.add(id, 1);
    }

    /// Add `copies` copies of a card.
    ///
    /// Adding zero copies of an unseen card still records its position.
    pub fn add(&mut self, id: CardIdentifier, copies: u32) {
        match self.index.get(&id) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count = count.saturating_add(copies);
            }
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, copies));
            }
        }
    }

    /// Copies of a card (0 if absent).
    #[must_use]
    pub fn count(&self, id: &str) -> u32 {
        self.index.get(id).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Total copies across all identifiers.
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Check if the list has no identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(identifier, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardIdentifier, u32)> {
        self.entries.iter().map(|(id, n)| (id, *n))
    }

    /// Expand back into one identifier per copy, grouped in first-seen order.
    #[must_use]
    pub fn expand(&self) -> Vec<CardIdentifier> {
        self.entries
            .iter()
            .flat_map(|(id, n)| std::iter::repeat(id.clone()).take(*n as usize))
            .collect()
    }
}

impl FromIterator<CardIdentifier> for DeckList {
    fn from_iter<I: IntoIterator<Item = CardIdentifier>>(iter: I) -> Self {
        let mut deck = Self::new();
        deck.extend(iter);
        deck
    }
}

impl FromIterator<(CardIdentifier, u32)> for DeckList {
    fn from_iter<I: IntoIterator<Item = (CardIdentifier, u32)>>(iter: I) -> Self {
        let mut deck = Self::new();
        for (id, copies) in iter {
            deck.add(id, copies);
        }
        deck
    }
}

impl Extend<CardIdentifier> for DeckList {
    fn extend<I: IntoIterator<Item = CardIdentifier>>(&mut self, iter: I) {
        for id in iter {
            self.push(id);
        }
    }
}
