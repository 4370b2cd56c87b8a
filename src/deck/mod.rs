//! Deck aggregation: counting occurrences and resolving them against a
//! catalog.

pub mod list;
pub mod resolve;

pub use list::DeckList;
pub use resolve::{resolve, to_counted_entries, CountedEntry, Resolution};
