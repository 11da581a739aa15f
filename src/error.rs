//! Error types for the checked batch entry points.
//!
//! The hot-path functions never fail; these errors only come out of
//! `try_rys5_roots_weights`, which validates its input before writing
//! anything.

use thiserror::Error;

/// Result type alias using rys5's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected by the checked entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A T-exponent below zero
    #[error("T-exponent {value} at index {index} is negative")]
    NegativeExponent {
        /// Position in the batch
        index: usize,
        /// Offending value
        value: f64,
    },

    /// A NaN or infinite T-exponent
    #[error("T-exponent {value} at index {index} is not finite")]
    NonFiniteExponent {
        /// Position in the batch
        index: usize,
        /// Offending value
        value: f64,
    },

    /// An output buffer whose length is not 5 × batch size
    #[error("{buffer} buffer holds {got} values, expected {expected}")]
    BufferLength {
        /// "roots" or "weights"
        buffer: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        got: usize,
    },
}
