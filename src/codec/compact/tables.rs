//! Fixed lookup tables of the compact format.
//!
//! Expansions are split across two ten-slot tables. The low table holds
//! `ex` and `A`-`I`; the high table holds `prm` and `J`-`R`. A tuple
//! signals which table its expansion digit indexes by shifting its copy
//! count digit up by 5 for the high table.

use crate::cards::{CardKind, Expansion};

/// Expansion table selected by copy digits 1-4.
pub const LOW_EXPANSIONS: [Expansion; 10] = [
    Expansion::Ex,
    Expansion::Letter('A'),
    Expansion::Letter('B'),
    Expansion::Letter('C'),
    Expansion::Letter('D'),
    Expansion::Letter('E'),
    Expansion::Letter('F'),
    Expansion::Letter('G'),
    Expansion::Letter('H'),
    Expansion::Letter('I'),
];

/// Expansion table selected by copy digits 6-9.
pub const HIGH_EXPANSIONS: [Expansion; 10] = [
    Expansion::Prm,
    Expansion::Letter('J'),
    Expansion::Letter('K'),
    Expansion::Letter('L'),
    Expansion::Letter('M'),
    Expansion::Letter('N'),
    Expansion::Letter('O'),
    Expansion::Letter('P'),
    Expansion::Letter('Q'),
    Expansion::Letter('R'),
];

/// Kind digits 1-4, in order.
pub const KIND_CODES: [CardKind; 4] = [CardKind::A, CardKind::S, CardKind::M, CardKind::D];

/// Offset added to the copy digit when the expansion lives in the high table.
pub const HIGH_TABLE_OFFSET: u8 = 5;

/// Which of the two expansion tables a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionTable {
    Low,
    High,
}

impl ExpansionTable {
    fn entries(self) -> &'static [Expansion; 10] {
        match self {
            ExpansionTable::Low => &LOW_EXPANSIONS,
            ExpansionTable::High => &HIGH_EXPANSIONS,
        }
    }
}

/// Find the table and digit for an expansion.
#[must_use]
pub fn expansion_slot(expansion: Expansion) -> Option<(ExpansionTable, u8)> {
    [ExpansionTable::Low, ExpansionTable::High]
        .into_iter()
        .find_map(|table| {
            table
                .entries()
                .iter()
                .position(|&e| e == expansion)
                .map(|i| (table, i as u8))
        })
}

/// Expansion stored at `digit` of `table`.
#[must_use]
pub fn expansion_at(table: ExpansionTable, digit: u8) -> Option<Expansion> {
    table.entries().get(usize::from(digit)).copied()
}

/// Kind digit (1-4) for a card kind.
#[must_use]
pub fn kind_digit(kind: CardKind) -> u8 {
    // KIND_CODES covers every CardKind variant.
    KIND_CODES.iter().position(|&k| k == kind).map_or(0, |i| i as u8 + 1)
}

/// Card kind for a kind digit.
#[must_use]
pub fn kind_at(digit: u8) -> Option<CardKind> {
    let index = usize::from(digit).checked_sub(1)?;
    KIND_CODES.get(index).copied()
}
