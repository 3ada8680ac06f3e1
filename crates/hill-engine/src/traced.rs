//! Matrix operations that record their intermediate stages into a [`Trace`].

use hill_core::{gcd, mod_inverse, HillError, KeyMatrix, MODULUS};

use crate::step::{Step, StepKind, Trace};

/// Computes the inverse of `key` modulo 26.
///
/// Records, in order: `determinant`, `mod_inverse`, `cofactors` (3×3 only), `adjugate` and
/// `inverse`. When the determinant is not coprime with 26 an `error` step follows the
/// determinant and nothing else is recorded.
pub fn matrix_inverse(key: &KeyMatrix, trace: &mut Trace) -> Result<KeyMatrix, HillError> {
    let size = key.size();
    let det = key.determinant();
    trace.push(
        Step::new(
            StepKind::Determinant,
            format!("Computing determinant of the {size}x{size} matrix"),
        )
        .with_matrix(key.rows())
        .with_result(det),
    );

    let divisor = gcd(det, MODULUS);
    if divisor != 1 {
        trace.push(
            Step::new(
                StepKind::Error,
                "Matrix is not invertible (determinant is not coprime with 26)",
            )
            .with_result(format!("det = {det}, gcd({det}, 26) = {divisor}")),
        );
        return Err(HillError::NotInvertible { det });
    }

    let Some(det_inv) = mod_inverse(det, MODULUS) else {
        trace.push(
            Step::new(
                StepKind::Error,
                "Could not find the modular inverse of the determinant",
            )
            .with_result(format!("det = {det}")),
        );
        return Err(HillError::ModularInverseMissing { det });
    };
    trace.push(
        Step::new(
            StepKind::ModInverse,
            "Computing modular inverse of the determinant",
        )
        .with_input(det.to_string())
        .with_result(det_inv),
    );

    let adjugate_description = match key {
        KeyMatrix::Size2(_) => "Computing adjugate matrix",
        KeyMatrix::Size3(_) => {
            trace.push(
                Step::new(StepKind::Cofactors, "Computing cofactor matrix")
                    .with_matrix(key.cofactors()),
            );
            "Computing adjugate matrix (transpose of cofactors)"
        }
    };
    let adjugate = key.adjugate();
    let inverse = KeyMatrix::scale_rows(&adjugate, det_inv);
    trace.push(Step::new(StepKind::Adjugate, adjugate_description).with_matrix(adjugate));
    trace.push(
        Step::new(StepKind::Inverse, "Inverse matrix computed").with_matrix(inverse.clone()),
    );

    KeyMatrix::from_rows(&inverse)
}

/// Multiplies `key` by `vector` modulo 26 and records one `multiply` step.
pub fn matrix_vector_multiply(key: &KeyMatrix, vector: &[i64], trace: &mut Trace) -> Vec<i64> {
    let product = key.apply(vector);
    tracing::trace!(?vector, ?product, "block product");
    trace.push(
        Step::new(StepKind::Multiply, "Matrix x vector multiplication (mod 26)")
            .with_matrix(key.rows())
            .with_vector(vector.to_vec())
            .with_result(product.clone()),
    );
    product
}
