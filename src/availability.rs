//! Availability buffers: which symbols are still unused.
//!
//! Ranking a permutation repeatedly asks one question of its scratch buffer:
//! "how many symbols smaller than `v` have not been placed yet?" That is a
//! `rank1` query over a bit vector whose set bits are the available symbols,
//! followed by clearing bit `v`.
//!
//! Two buffers implement the same contract:
//! - [`ImplicitAvailability`]: raw bits, linear-time count.
//! - [`FenwickAvailability`]: binary indexed tree, logarithmic count and update.
//!
//! [`ImplicitAvailability`]: crate::implicit::ImplicitAvailability
//! [`FenwickAvailability`]: crate::fenwick::FenwickAvailability

/// A set of symbols `0..len`, initially all available, supporting
/// prefix counts and removal.
pub trait Availability {
    /// Create a buffer with every symbol in `0..len` available.
    fn with_len(len: usize) -> Self;

    /// Return the number of symbols the buffer was created for.
    fn len(&self) -> usize;

    /// Return true if the buffer holds no symbols at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of symbols still available.
    fn remaining(&self) -> usize;

    /// Return true if `symbol` is in range and not yet taken.
    fn is_available(&self, symbol: usize) -> bool;

    /// Return the number of available symbols in the range [0, symbol).
    ///
    /// `symbol` is clamped to `len`.
    fn count_below(&self, symbol: usize) -> usize;

    /// Mark `symbol` unavailable.
    ///
    /// Return false and leave the buffer untouched if `symbol` is out of
    /// range or already taken.
    fn take(&mut self, symbol: usize) -> bool;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Availability;

    /// Checks a buffer against a plain `Vec<bool>` model.
    pub(crate) fn check_against_model<A: Availability>(len: usize, order: &[usize]) {
        let mut buf = A::with_len(len);
        let mut model = vec![true; len];

        assert_eq!(buf.len(), len);
        assert_eq!(buf.remaining(), len);

        for (step, &symbol) in order.iter().enumerate() {
            for v in 0..=len {
                let expected = model[..v].iter().filter(|&&a| a).count();
                assert_eq!(buf.count_below(v), expected, "step {step}, v {v}");
            }
            assert!(buf.is_available(symbol));
            assert!(buf.take(symbol));
            model[symbol] = false;
            assert!(!buf.is_available(symbol));
            assert_eq!(buf.remaining(), len - step - 1);
        }

        assert!(!buf.is_available(len));
        assert_eq!(buf.count_below(len + 10), buf.remaining());
    }

    /// Taking a symbol twice, or one past the end, must not disturb counts.
    pub(crate) fn check_repeated_take<A: Availability>() {
        let mut buf = A::with_len(4);
        assert!(buf.take(1));
        assert!(!buf.take(1));
        assert!(!buf.take(4));
        assert!(!buf.take(usize::MAX));
        assert_eq!(buf.remaining(), 3);
        assert_eq!(buf.count_below(4), 3);
        assert_eq!(buf.count_below(2), 1);
        assert!(!buf.is_available(1));
    }
}
