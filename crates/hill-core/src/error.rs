//! Error taxonomy shared by the core and the engine.

use thiserror::Error;

/// Errors produced while building keys or running a cipher operation.
///
/// The `Display` text of the validation variants is the exact message reported to callers
/// of [`validate_matrix`](crate::validate_matrix).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HillError {
    /// No rows were supplied.
    #[error("Matrix is empty")]
    EmptyMatrix,
    /// The number of rows is neither 2 nor 3.
    #[error("Matrix must be 2x2 or 3x3")]
    InvalidSize,
    /// A row length differs from the number of rows.
    #[error("Matrix must be square")]
    NonSquare,
    /// An entry is negative or not an integer.
    #[error("All entries must be non-negative integers")]
    InvalidEntry,
    /// The determinant shares a factor with 26.
    #[error("Determinant ({det}) is not coprime with 26. The matrix is not invertible.")]
    NotInvertible {
        /// Determinant reduced into `[0, 26)`.
        det: i64,
    },
    /// Cleaning the input left no letters to process.
    #[error("No valid characters found")]
    NoValidCharacters,
    /// The determinant has no inverse modulo 26.
    #[error("No modular inverse exists for determinant {det}")]
    ModularInverseMissing {
        /// Determinant reduced into `[0, 26)`.
        det: i64,
    },
    /// The configured padding character is not an uppercase Latin letter.
    #[error("Padding letter {0:?} must be in A-Z")]
    InvalidPadLetter(char),
}
