//! # Lehmer
//!
//! *The position of a permutation in lexicographic order.*
//!
//! ## Intuition First
//!
//! Shuffle a deck of four cards labelled `0..4` and lay them out. Somewhere in the
//! alphabetized list of all 24 possible layouts is yours. Finding its index does not
//! require writing the list down: look at the first card, count how many smaller cards
//! you *could* have put there instead, and skip that many blocks of `3!` layouts. Repeat
//! with the cards that are left.
//!
//! ## The Problem
//!
//! Given a permutation $\pi$ of $\{0, \dots, n-1\}$, compute $r(\pi) \in [0, n!)$ such
//! that $\pi$ is the $r$-th permutation (0-based) in lexicographic order. This maps
//! every arrangement to a compact integer key, e.g. for table lookups or for storing a
//! shuffle in $\lceil \log_2 n! \rceil$ bits.
//!
//! ## Historical Context
//!
//! ```text
//! 1888  Laisant     Factorial number system ("factoradic") for permutations
//! 1960  Lehmer      Lehmer code: digit i counts smaller unused symbols
//! 1994  Fenwick     Binary indexed trees make each digit O(log n)
//! 2001  Myrvold     Linear-time ranking, at the cost of a non-lexicographic order
//! ```
//!
//! ## Mathematical Formulation
//!
//! With Lehmer digits $d_i = |\{ j > i : \pi_j < \pi_i \}|$,
//!
//! $$r(\pi) = \sum_{i=0}^{n-1} d_i \cdot (n-1-i)!$$
//!
//! Since $0 \le d_i \le n-1-i$, this is a mixed-radix number and the map is a
//! bijection onto $[0, n!)$.
//!
//! ## Complexity Analysis
//!
//! - **Implicit buffer**: $O(n^2)$ time, $n$ bits of scratch.
//! - **Fenwick buffer**: $O(n \log n)$ time, $O(n)$ words of scratch.
//!
//! ## What Could Go Wrong
//!
//! 1. **Overflow**: $35!$ exceeds `u128`. Ranks are refused above
//!    [`MAX_RANK_LEN`] symbols; [`lehmer_code`] has no such limit.
//! 2. **Malformed input**: a repeated or out-of-range symbol has no rank. It is
//!    reported, never repaired.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`Ranker`**: rank and Lehmer code, with a selectable [`Strategy`].
//! - **`ImplicitAvailability`** / **`FenwickAvailability`**: the scratch buffers.
//! - **`factorial`**: compile-time table of `u128` factorials.
//!
//! ## References
//!
//! - Lehmer, D. H. (1960). "Teaching combinatorial tricks to a computer."
//! - Knuth, D. E. *TAOCP* Vol. 2, §3.3.2 (factorial number system).
//! - Fenwick, P. M. (1994). "A new data structure for cumulative frequency tables."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod availability;
pub mod error;
pub mod factorial;
pub mod fenwick;
pub mod implicit;
pub mod ranker;

pub use availability::Availability;
pub use error::{Error, Result};
pub use factorial::{factorial, MAX_FACTORIAL, MAX_RANK_LEN};
pub use fenwick::FenwickAvailability;
pub use implicit::ImplicitAvailability;
pub use ranker::{lehmer_code, permutation_number, rank, Ranker, Strategy};
