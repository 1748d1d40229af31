//! Implicit availability buffer: no index at all.
//!
//! One bit per symbol and nothing else. Counting available symbols below `v`
//! scans the words up to `v`, so a full ranking pass costs $O(n^2 / 64)$ word
//! operations. For the short permutations whose ranks fit in a `u128` this is
//! the fastest option: the whole buffer is a single cache line.

use crate::availability::Availability;

/// An availability buffer stored as raw bits, with linear-time counting.
#[derive(Clone, Debug, Default)]
pub struct ImplicitAvailability {
    data: Vec<u64>,
    len: usize,
    remaining: usize,
}

impl Availability for ImplicitAvailability {
    fn with_len(len: usize) -> Self {
        let mut data = vec![!0u64; len.div_ceil(64)];
        let tail = len % 64;
        if tail > 0 {
            if let Some(last) = data.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self {
            data,
            len,
            remaining: len,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn remaining(&self) -> usize {
        self.remaining
    }

    fn is_available(&self, symbol: usize) -> bool {
        if symbol >= self.len {
            return false;
        }
        (self.data[symbol / 64] & (1u64 << (symbol % 64))) != 0
    }

    /// Linear-time count: O(symbol / 64).
    fn count_below(&self, symbol: usize) -> usize {
        let symbol = symbol.min(self.len);
        let full_words = symbol / 64;
        let mut count = 0;
        for &word in &self.data[..full_words] {
            count += word.count_ones() as usize;
        }
        let bit_offset = symbol % 64;
        if bit_offset > 0 {
            let mask = (1u64 << bit_offset) - 1;
            count += (self.data[full_words] & mask).count_ones() as usize;
        }
        count
    }

    fn take(&mut self, symbol: usize) -> bool {
        if !self.is_available(symbol) {
            return false;
        }
        self.data[symbol / 64] &= !(1u64 << (symbol % 64));
        self.remaining -= 1;
        true
    }
}
