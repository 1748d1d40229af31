//! Fenwick (binary indexed) availability buffer.
//!
//! # Layout
//!
//! `tree[i]` (1-indexed) holds the number of available symbols in the
//! half-open range `(i - lowbit(i), i]`, where `lowbit(i) = i & -i`. A prefix
//! count walks down by stripping low bits, a removal walks up by adding them,
//! both in $O(\log n)$.
//!
//! Initially every symbol is available, so `tree[i] = lowbit(i)` and the tree
//! is built in $O(n)$ without any updates.
//!
//! Membership is tracked separately in an [`ImplicitAvailability`] so that
//! `is_available` stays $O(1)$.
//!
//! # References
//!
//! - Fenwick, P. M. (1994). "A new data structure for cumulative frequency tables."

use crate::availability::Availability;
use crate::implicit::ImplicitAvailability;

/// An availability buffer with logarithmic prefix counts.
#[derive(Clone, Debug, Default)]
pub struct FenwickAvailability {
    tree: Vec<usize>,
    flags: ImplicitAvailability,
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl Availability for FenwickAvailability {
    fn with_len(len: usize) -> Self {
        let mut tree = Vec::with_capacity(len + 1);
        tree.push(0);
        tree.extend((1..=len).map(lowbit));
        Self {
            tree,
            flags: ImplicitAvailability::with_len(len),
        }
    }

    fn len(&self) -> usize {
        self.flags.len()
    }

    fn remaining(&self) -> usize {
        self.flags.remaining()
    }

    fn is_available(&self, symbol: usize) -> bool {
        self.flags.is_available(symbol)
    }

    fn count_below(&self, symbol: usize) -> usize {
        let mut i = symbol.min(self.len());
        let mut count = 0usize;
        while i > 0 {
            count += self.tree[i];
            i -= lowbit(i);
        }
        count
    }

    fn take(&mut self, symbol: usize) -> bool {
        if !self.flags.take(symbol) {
            return false;
        }
        let len = self.len();
        let mut i = symbol + 1;
        while i <= len {
            self.tree[i] -= 1;
            i += lowbit(i);
        }
        true
    }
}
