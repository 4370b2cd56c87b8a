//! Card system: identifiers and the catalog.
//!
//! ## Key Types
//!
//! - `CardIdentifier`: Validated textual card ID (`AA-1`, `exM-12`, `prmD-3`)
//! - `CardParts`: Parsed view (expansion, kind, number)
//! - `CatalogEntry`: A card known to the deck builder
//! - `CardCatalog`: Identifier lookup

pub mod catalog;
pub mod identifier;

pub use catalog::{CardCatalog, CatalogEntry};
pub use identifier::{CardIdentifier, CardKind, CardParts, Expansion};
