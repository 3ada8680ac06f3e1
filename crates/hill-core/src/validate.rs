//! Key validation with user-facing messages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HillError;
use crate::matrix::KeyMatrix;
use crate::modular::is_coprime_with_modulus;

const VALID_MESSAGE: &str = "Matrix is valid for the Hill cipher";

/// Outcome of [`validate_matrix`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the rows form a usable key.
    pub valid: bool,
    /// Success message, or the message of the first failing check.
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_owned(),
        }
    }

    fn rejected(err: &HillError) -> Self {
        Self {
            valid: false,
            message: err.to_string(),
        }
    }
}

/// Builds a key from `rows` and checks that its determinant is coprime with 26.
pub fn validated_key(rows: &[Vec<i64>]) -> Result<KeyMatrix, HillError> {
    let key = KeyMatrix::from_rows(rows)?;
    let det = key.determinant();
    if !is_coprime_with_modulus(det) {
        return Err(HillError::NotInvertible { det });
    }
    Ok(key)
}

/// Checks, in order: non-empty, size 2 or 3, square, non-negative entries, invertible mod 26.
///
/// Pure; the first failing check decides the message.
pub fn validate_matrix(rows: &[Vec<i64>]) -> ValidationResult {
    match validated_key(rows) {
        Ok(_) => ValidationResult::ok(),
        Err(err) => {
            debug!(%err, "key matrix rejected");
            ValidationResult::rejected(&err)
        }
    }
}
