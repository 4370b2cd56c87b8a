//! Packing the decimal digit stream into 10-bit values and back.
//!
//! The digit stream is cut into runs of three digits regardless of tuple
//! boundaries. Each run `e` is stored as `500 - e` in 10-bit two's
//! complement. Decoding cannot tell `007` from `7`, so leading zeros come
//! back as placeholders that are resolved once the stream is re-aligned to
//! whole tuples.

use smallvec::SmallVec;

use super::bits::BitBuf;
use super::tuple::TUPLE_WIDTH;

/// Digits per packed run.
pub const RUN_WIDTH: usize = 3;

/// Bits per packed run.
pub const CHUNK_BITS: u32 = 10;

const OFFSET: i32 = 500;
const MODULUS: i32 = 1 << CHUNK_BITS;

/// One position of the unpacked digit stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A decoded digit.
    Digit(u8),
    /// A leading zero the packing did not preserve.
    Placeholder,
    /// Output of a chunk no encoder produces.
    Invalid,
}

/// Pack a digit stream into 10-bit chunks.
pub fn pack(digits: &[u8], bits: &mut BitBuf) {
    for run in digits.chunks(RUN_WIDTH) {
        let value = run.iter().fold(0i32, |acc, &d| acc * 10 + i32::from(d));
        bits.push(to_chunk(OFFSET - value), CHUNK_BITS);
    }
}

/// Unpack 10-bit chunks into cells, three or more per chunk.
#[must_use]
pub fn unpack(bits: &BitBuf) -> Vec<Cell> {
    let mut cells = Vec::new();
    for chunk in bits.chunks(CHUNK_BITS as usize) {
        cells.extend(render_run(OFFSET - from_chunk(chunk)));
    }
    cells
}

/// Trim the cell stream to whole tuples and resolve placeholders.
///
/// Excess cells are taken from placeholders in the final run first; real
/// digits at the end are only dropped when no placeholders are left there.
#[must_use]
pub fn realign(mut cells: Vec<Cell>) -> Vec<Cell> {
    let mut excess = cells.len() % TUPLE_WIDTH;

    let window_start = cells.len().saturating_sub(RUN_WIDTH);
    let mut i = cells.len();
    while excess > 0 && i > window_start {
        i -= 1;
        if cells[i] == Cell::Placeholder {
            cells.remove(i);
            excess -= 1;
        }
    }
    cells.truncate(cells.len() - excess);

    for cell in &mut cells {
        if *cell == Cell::Placeholder {
            *cell = Cell::Digit(0);
        }
    }
    cells
}

/// Group aligned cells into tuples, skipping groups with invalid cells.
pub fn tuples(cells: &[Cell]) -> impl Iterator<Item = [u8; TUPLE_WIDTH]> + '_ {
    cells.chunks_exact(TUPLE_WIDTH).filter_map(|group| {
        let mut digits = [0u8; TUPLE_WIDTH];
        for (slot, cell) in digits.iter_mut().zip(group) {
            match cell {
                Cell::Digit(d) => *slot = *d,
                _ => return None,
            }
        }
        Some(digits)
    })
}

fn to_chunk(value: i32) -> u16 {
    value.rem_euclid(MODULUS) as u16
}

fn from_chunk(chunk: u16) -> i32 {
    let value = i32::from(chunk);
    if value >= MODULUS / 2 {
        value - MODULUS
    } else {
        value
    }
}

fn render_run(n: i32) -> SmallVec<[Cell; 4]> {
    if n < 0 {
        return SmallVec::from_elem(Cell::Invalid, RUN_WIDTH);
    }

    let mut cells: SmallVec<[Cell; 4]> = n
        .to_string()
        .bytes()
        .map(|b| Cell::Digit(b - b'0'))
        .collect();
    while cells.len() < RUN_WIDTH {
        cells.insert(0, Cell::Placeholder);
    }
    cells
}
