//! Factorials as place values of the factorial number system.
//!
//! The table is built at compile time. `34!` is the largest factorial that
//! fits in a `u128`; `35!` does not.

/// Largest `k` for which `k!` is representable as a `u128`.
pub const MAX_FACTORIAL: usize = 34;

/// Largest permutation length whose ranks all fit in a `u128`.
///
/// Ranks of `n` symbols span `[0, n!)`, so this coincides with
/// [`MAX_FACTORIAL`].
pub const MAX_RANK_LEN: usize = MAX_FACTORIAL;

const TABLE: [u128; MAX_FACTORIAL + 1] = build_table();

const fn build_table() -> [u128; MAX_FACTORIAL + 1] {
    let mut entries = [1u128; MAX_FACTORIAL + 1];
    let mut i = 2;
    while i <= MAX_FACTORIAL {
        entries[i] = i as u128 * entries[i - 1];
        i += 1;
    }
    entries
}

/// Return `k!`, or `None` if it overflows a `u128`.
#[inline]
pub fn factorial(k: usize) -> Option<u128> {
    TABLE.get(k).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(2), Some(2));
        assert_eq!(factorial(3), Some(6));
        assert_eq!(factorial(4), Some(24));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_limit() {
        let top = factorial(MAX_FACTORIAL).unwrap();
        assert_eq!(top, 295_232_799_039_604_140_847_618_609_643_520_000_000);
        assert!(top.checked_mul(MAX_FACTORIAL as u128 + 1).is_none());
        assert_eq!(factorial(MAX_FACTORIAL + 1), None);
    }

    #[test]
    fn test_factorial_recurrence() {
        for k in 1..=MAX_FACTORIAL {
            assert_eq!(
                factorial(k).unwrap(),
                k as u128 * factorial(k - 1).unwrap()
            );
        }
    }
}
