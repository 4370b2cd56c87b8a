//! Bit buffer used between the digit stream and the symbol stream.
//!
//! Values are appended most-significant bit first and read back in
//! fixed-width chunks from the front.

/// Growable MSB-first bit sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuf {
    bits: Vec<bool>,
}

impl BitBuf {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, high bit first.
    pub fn push(&mut self, value: u16, width: u32) {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if there are no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append zero bits until the length is a multiple of `width`.
    ///
    /// Returns the number of bits added.
    pub fn pad_to_multiple(&mut self, width: usize) -> usize {
        let pad = (width - self.bits.len() % width) % width;
        self.bits.resize(self.bits.len() + pad, false);
        pad
    }

    /// Drop `count` bits from the end; clears the buffer if it is shorter.
    pub fn truncate_end(&mut self, count: usize) {
        let keep = self.bits.len().saturating_sub(count);
        self.bits.truncate(keep);
    }

    /// Count `width`-bit groups that are all zero.
    ///
    /// A trailing partial group is not counted.
    #[must_use]
    pub fn count_zero_groups(&self, width: usize) -> usize {
        self.bits
            .chunks_exact(width)
            .filter(|group| group.iter().all(|&b| !b))
            .count()
    }

    /// Read consecutive `width`-bit values; a trailing partial group is
    /// discarded.
    pub fn chunks(&self, width: usize) -> impl Iterator<Item = u16> + '_ {
        self.bits
            .chunks_exact(width)
            .map(|group| group.iter().fold(0u16, |acc, &b| (acc << 1) | u16::from(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(buf: &BitBuf) -> String {
        buf.chunks(1).map(|b| if b == 1 { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_push_msb_first() {
        let mut buf = BitBuf::new();
        buf.push(489, 10);
        assert_eq!(render(&buf), "0111101001");

        buf.push(0b101, 3);
        assert_eq!(buf.len(), 13);
        assert!(render(&buf).ends_with("101"));
    }

    #[test]
    fn test_pad_to_multiple() {
        let mut buf = BitBuf::new();
        buf.push(0, 10);
        assert_eq!(buf.pad_to_multiple(6), 2);
        assert_eq!(buf.len(), 12);
        assert_eq!(buf.pad_to_multiple(6), 0);

        let mut empty = BitBuf::new();
        assert_eq!(empty.pad_to_multiple(6), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_truncate_end() {
        let mut buf = BitBuf::new();
        buf.push(0b1111, 4);
        buf.truncate_end(3);
        assert_eq!(render(&buf), "1");

        buf.truncate_end(5);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_count_zero_groups() {
        let mut buf = BitBuf::new();
        buf.push(0b000_101_000_000, 12);
        buf.push(0b00, 2);
        assert_eq!(buf.count_zero_groups(3), 3);
    }

    #[test]
    fn test_chunks_discard_tail() {
        let mut buf = BitBuf::new();
        buf.push(0b110011, 6);
        buf.push(0b0101, 4);

        let values: Vec<_> = buf.chunks(6).collect();
        assert_eq!(values, [0b110011]);
    }
}
