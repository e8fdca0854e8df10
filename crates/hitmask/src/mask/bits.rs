/// Packed bit buffer, one bit per pixel, row-major.
///
/// Backed by exactly `ceil(len / 8)` bytes. Bits are addressed LSB-first
/// within each byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    len: usize,
    bytes: Box<[u8]>,
}

impl BitGrid {
    /// Creates a grid of `len` cleared bits.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            bytes: vec![0u8; len.div_ceil(8)].into_boxed_slice(),
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of backing bytes, always `ceil(len / 8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Reads bit `index`. Out-of-range indices read as unset.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.bytes[index >> 3] & (1 << (index & 7)) != 0
    }

    /// Sets bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.bytes[index >> 3] |= 1 << (index & 7);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn byte_len_rounds_up() {
        assert_eq!(BitGrid::new(0).byte_len(), 0);
        assert_eq!(BitGrid::new(1).byte_len(), 1);
        assert_eq!(BitGrid::new(8).byte_len(), 1);
        assert_eq!(BitGrid::new(9).byte_len(), 2);
        assert_eq!(BitGrid::new(64).byte_len(), 8);
    }

    #[test]
    fn new_grid_is_all_clear() {
        let g = BitGrid::new(20);
        assert!((0..20).all(|i| !g.get(i)));
        assert_eq!(g.count_ones(), 0);
    }

    // ── set / get ─────────────────────────────────────────────────────────

    #[test]
    fn set_bits_across_byte_boundary() {
        let mut g = BitGrid::new(20);
        g.set(0);
        g.set(7);
        g.set(8);
        g.set(19);

        assert!(g.get(0));
        assert!(g.get(7));
        assert!(g.get(8));
        assert!(g.get(19));
        assert!(!g.get(1));
        assert!(!g.get(9));
        assert_eq!(g.count_ones(), 4);
    }

    #[test]
    fn set_is_idempotent() {
        let mut g = BitGrid::new(4);
        g.set(2);
        g.set(2);
        assert!(g.get(2));
        assert_eq!(g.count_ones(), 1);
    }

    #[test]
    fn out_of_range_reads_as_unset() {
        let g = BitGrid::new(10);
        assert!(!g.get(10));
        assert!(!g.get(usize::MAX));
    }

    #[test]
    #[should_panic]
    fn out_of_range_set_panics() {
        BitGrid::new(10).set(10);
    }
}
