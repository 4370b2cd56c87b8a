//! The 64-symbol alphabet of compact codes.
//!
//! Symbols are laid out as an 8x8 matrix: the high three bits of a 6-bit
//! value pick the row, the low three bits pick the column.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::core::{DeckCodeError, Result};

/// Number of symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 64;

/// Rows and columns of the symbol matrix.
pub const MATRIX_SIZE: usize = 8;

/// The deployed symbol matrix.
pub const SYMBOL_MATRIX: [[char; MATRIX_SIZE]; MATRIX_SIZE] = [
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'],
    ['I', 'J', 'K', 'L', 'M', 'N', 'O', 'P'],
    ['Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X'],
    ['Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f'],
    ['g', 'h', 'i', 'j', 'k', 'l', 'm', 'n'],
    ['o', 'p', 'q', 'r', 's', 't', 'u', 'v'],
    ['w', 'x', 'y', 'z', '0', '1', '2', '3'],
    ['4', '5', '6', '7', '8', '9', '-', '_'],
];

/// Bijection between 6-bit values and symbols.
#[derive(Clone, Debug)]
pub struct SymbolAlphabet {
    symbols: [char; SYMBOL_COUNT],
    indices: FxHashMap<char, u8>,
}

impl SymbolAlphabet {
    /// Build an alphabet from a symbol matrix.
    ///
    /// Fails if any symbol appears twice.
    pub fn from_matrix(matrix: &[[char; MATRIX_SIZE]; MATRIX_SIZE]) -> Result<Self> {
        let mut symbols = ['\0'; SYMBOL_COUNT];
        let mut indices = FxHashMap::default();

        for (row, line) in matrix.iter().enumerate() {
            for (col, &symbol) in line.iter().enumerate() {
                let value = row * MATRIX_SIZE + col;
                if indices.insert(symbol, value as u8).is_some() {
                    return Err(DeckCodeError::Alphabet(format!(
                        "duplicate symbol {symbol:?} at row {row}, column {col}"
                    )));
                }
                symbols[value] = symbol;
            }
        }

        Ok(Self { symbols, indices })
    }

    /// The deployed alphabet, checked once per process.
    ///
    /// Panics if [`SYMBOL_MATRIX`] is not a bijection.
    pub fn standard() -> &'static SymbolAlphabet {
        static STANDARD: OnceLock<SymbolAlphabet> = OnceLock::new();
        STANDARD.get_or_init(|| match Self::from_matrix(&SYMBOL_MATRIX) {
            Ok(alphabet) => alphabet,
            Err(err) => panic!("{err}"),
        })
    }

    /// Symbol for a 6-bit value.
    ///
    /// Panics if `value` is 64 or more.
    #[must_use]
    pub fn symbol(&self, value: u8) -> char {
        self.symbols[usize::from(value)]
    }

    /// Symbol at a matrix position.
    ///
    /// Panics if `row` or `col` is outside the matrix.
    #[must_use]
    pub fn symbol_at(&self, row: u8, col: u8) -> char {
        assert!(
            usize::from(row) < MATRIX_SIZE && usize::from(col) < MATRIX_SIZE,
            "matrix position ({row}, {col}) out of range"
        );
        self.symbol((row << 3) | col)
    }

    /// 6-bit value of a symbol.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        self.indices.get(&symbol).copied()
    }

    /// Check whether a character belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.indices.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the alphabet has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate symbols in value order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}
