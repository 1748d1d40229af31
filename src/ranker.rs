//! Lexicographic ranking of permutations.
//!
//! # Algorithm
//!
//! Walk the permutation left to right. At position `i` the digit
//! $d_i$ is the number of still-unused symbols smaller than the symbol placed
//! there; those are exactly the choices that would have produced a
//! lexicographically smaller arrangement with the same prefix. Each of them
//! heads $(n-1-i)!$ arrangements of the remaining suffix, so
//!
//! $$\text{rank} = \sum_{i=0}^{n-2} d_i \cdot (n-1-i)!$$
//!
//! The digit sequence $(d_0, \dots, d_{n-1})$ is the Lehmer code. The last
//! digit is always zero and never contributes.
//!
//! The place value starts at $(n-1)!$ and is divided by $n-1, n-2, \dots, 1$
//! in lockstep with the position instead of being recomputed.
//!
//! # Validation
//!
//! Range and duplicate checks are fused into the walk: a symbol is checked
//! against the availability buffer right before it is struck out, so a
//! malformed permutation costs nothing extra to reject.

use crate::availability::Availability;
use crate::error::{Error, Result};
use crate::factorial::{factorial, MAX_RANK_LEN};
use crate::fenwick::FenwickAvailability;
use crate::implicit::ImplicitAvailability;

/// Permutation length above which [`Strategy::Auto`] switches to the
/// Fenwick buffer.
pub const AUTO_FENWICK_THRESHOLD: usize = 64;

/// Which availability buffer the ranker counts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Linear scan over raw bits. $O(n^2)$ overall.
    Implicit,
    /// Binary indexed tree. $O(n \log n)$ overall.
    Fenwick,
    /// `Implicit` up to [`AUTO_FENWICK_THRESHOLD`] symbols, `Fenwick` above.
    #[default]
    Auto,
}

/// Computes ranks and Lehmer codes of permutations of `0..n`.
///
/// A `Ranker` is a plain configuration value; every call allocates its own
/// scratch buffer, so one ranker can be shared freely across threads.
///
/// ```
/// use lehmer::Ranker;
///
/// let ranker = Ranker::new();
/// assert_eq!(ranker.rank(&[1, 3, 0, 2]).unwrap(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ranker {
    strategy: Strategy,
}

impl Ranker {
    /// Create a ranker using [`Strategy::Auto`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a ranker using the given strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Return the configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Return the 0-based lexicographic rank of `permutation` among all
    /// permutations of `0..permutation.len()`.
    pub fn rank(&self, permutation: &[usize]) -> Result<u128> {
        self.permutation_number(permutation, permutation.len())
    }

    /// Return the 0-based lexicographic rank of `permutation` among all `n!`
    /// permutations of `0..n`.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if `permutation.len() != n`.
    /// - [`Error::TooLarge`] if `n` exceeds [`MAX_RANK_LEN`].
    /// - [`Error::OutOfRange`] or [`Error::Duplicate`] if `permutation` is
    ///   not a permutation of `0..n`.
    pub fn permutation_number(&self, permutation: &[usize], n: usize) -> Result<u128> {
        let result = if permutation.len() != n {
            Err(Error::LengthMismatch {
                expected: n,
                actual: permutation.len(),
            })
        } else if n > MAX_RANK_LEN {
            Err(Error::TooLarge {
                len: n,
                max: MAX_RANK_LEN,
            })
        } else if self.uses_fenwick(n) {
            rank_with::<FenwickAvailability>(permutation)
        } else {
            rank_with::<ImplicitAvailability>(permutation)
        };

        match &result {
            Ok(rank) => tracing::trace!(n, rank = %rank, "ranked permutation"),
            Err(e) => tracing::debug!(n, error = %e, "rejected permutation"),
        }
        result
    }

    /// Return the Lehmer code of `permutation`.
    ///
    /// Digit `i` counts the unused symbols smaller than `permutation[i]`, so
    /// it lies in `0..=n-1-i`. Unlike [`Ranker::rank`] there is no length
    /// limit.
    pub fn lehmer_code(&self, permutation: &[usize]) -> Result<Vec<usize>> {
        let mut code = Vec::with_capacity(permutation.len());
        let push = |_: usize, digit: usize| code.push(digit);
        let result = if self.uses_fenwick(permutation.len()) {
            walk::<FenwickAvailability>(permutation, push)
        } else {
            walk::<ImplicitAvailability>(permutation, push)
        };

        if let Err(e) = &result {
            tracing::debug!(n = permutation.len(), error = %e, "rejected permutation");
        }
        result.map(|()| code)
    }

    fn uses_fenwick(&self, n: usize) -> bool {
        match self.strategy {
            Strategy::Implicit => false,
            Strategy::Fenwick => true,
            Strategy::Auto => n > AUTO_FENWICK_THRESHOLD,
        }
    }
}

/// Rank `permutation` with the default [`Ranker`].
pub fn rank(permutation: &[usize]) -> Result<u128> {
    Ranker::default().rank(permutation)
}

/// Rank `permutation` as one of the `n!` permutations of `0..n`, with the
/// default [`Ranker`].
pub fn permutation_number(permutation: &[usize], n: usize) -> Result<u128> {
    Ranker::default().permutation_number(permutation, n)
}

/// Compute the Lehmer code of `permutation` with the default [`Ranker`].
pub fn lehmer_code(permutation: &[usize]) -> Result<Vec<usize>> {
    Ranker::default().lehmer_code(permutation)
}

/// Visit every position with its Lehmer digit, validating as it goes.
///
/// The buffer lives for exactly this call and is dropped on every return.
fn walk<A: Availability>(
    permutation: &[usize],
    mut visit: impl FnMut(usize, usize),
) -> Result<()> {
    let n = permutation.len();
    let mut available = A::with_len(n);

    for (index, &value) in permutation.iter().enumerate() {
        if value >= n {
            return Err(Error::OutOfRange {
                index,
                value,
                len: n,
            });
        }
        let digit = available.count_below(value);
        if !available.take(value) {
            return Err(Error::Duplicate { index, value });
        }
        visit(index, digit);
    }

    debug_assert_eq!(available.remaining(), 0);
    Ok(())
}

fn rank_with<A: Availability>(permutation: &[usize]) -> Result<u128> {
    let n = permutation.len();
    if n == 0 {
        return Ok(0);
    }

    let mut f = factorial(n - 1).ok_or(Error::TooLarge {
        len: n,
        max: MAX_RANK_LEN,
    })?;
    let mut rank = 0u128;

    walk::<A>(permutation, |i, pos| {
        // The last position has a single choice left.
        if i + 1 == n {
            return;
        }
        rank += pos as u128 * f;
        let divisor = (n - i - 1) as u128;
        debug_assert_eq!(f % divisor, 0);
        f /= divisor;
    })?;

    Ok(rank)
}
