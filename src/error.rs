//! Error types for permutation ranking.

use thiserror::Error;

/// Error variants for ranking operations.
///
/// Every variant describes malformed input. Nothing is ever corrected
/// silently: repairing a permutation would change its rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The permutation's length disagrees with the declared symbol count.
    #[error("length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch {
        /// Declared symbol count `n`.
        expected: usize,
        /// Actual slice length.
        actual: usize,
    },

    /// A symbol lies outside `0..len`.
    #[error("symbol {value} at position {index} is out of range for {len} symbols")]
    OutOfRange {
        /// Position of the offending symbol.
        index: usize,
        /// The symbol itself.
        value: usize,
        /// Number of symbols in the permutation.
        len: usize,
    },

    /// A symbol appears more than once.
    #[error("symbol {value} at position {index} was already used")]
    Duplicate {
        /// Position of the repeated occurrence.
        index: usize,
        /// The repeated symbol.
        value: usize,
    },

    /// The rank of a permutation this long does not fit in a `u128`.
    #[error("permutation of {len} symbols exceeds the rankable maximum of {max}")]
    TooLarge {
        /// Number of symbols requested.
        len: usize,
        /// Largest supported number of symbols.
        max: usize,
    },
}

impl Error {
    /// Return true if the error was caused by malformed caller input.
    ///
    /// Currently this holds for every variant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. }
                | Error::OutOfRange { .. }
                | Error::Duplicate { .. }
                | Error::TooLarge { .. }
        )
    }
}

/// A specialized Result type for ranking operations.
pub type Result<T> = std::result::Result<T, Error>;
