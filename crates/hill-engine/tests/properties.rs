//! Property-based tests for the cipher pipeline.

use hill_core::{clean, determinant_2x2, determinant_3x3, validate_matrix};
use hill_engine::{CipherEngine, KeyGenerator, StepKind};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Random invertible key rows of size 2 or 3, derived from a seed.
fn invertible_rows() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (any::<[u8; 32]>(), 2usize..=3).prop_map(|(seed, size)| {
        let mut gen = KeyGenerator::new(ChaCha20Rng::from_seed(seed));
        gen.random_invertible(size)
            .expect("supported size")
            .rows()
    })
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        rows in invertible_rows(),
        text in "[A-Z]{1,60}",
    ) {
        let size = rows.len();
        let mut plain = text;
        plain.truncate(plain.len() - plain.len() % size);
        prop_assume!(!plain.is_empty());

        let engine = CipherEngine::new();
        let cipher = engine.encrypt(&plain, &rows);
        prop_assert!(cipher.is_success());
        prop_assert_eq!(cipher.result.len(), plain.len());
        let recovered = engine.decrypt(&cipher.result, &rows);
        prop_assert_eq!(recovered.result, plain);
    }

    #[test]
    fn clean_is_idempotent(text in ".{0,80}") {
        let once = clean(&text);
        prop_assert_eq!(clean(&once), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn determinant_ignores_multiples_of_26(
        m2 in any::<[[u8; 2]; 2]>(),
        m3 in any::<[[u8; 3]; 3]>(),
        shift in 0i64..1000,
    ) {
        let base2 = m2.map(|row| row.map(|v| i64::from(v % 26)));
        let moved2 = base2.map(|row| row.map(|v| v + 26 * shift));
        prop_assert_eq!(determinant_2x2(&base2), determinant_2x2(&moved2));

        let base3 = m3.map(|row| row.map(|v| i64::from(v % 26)));
        let moved3 = base3.map(|row| row.map(|v| v + 26 * shift));
        prop_assert_eq!(determinant_3x3(&base3), determinant_3x3(&moved3));
    }

    #[test]
    fn encrypt_trace_order(
        rows in invertible_rows(),
        text in "[a-zA-Z ,.]{0,40}",
    ) {
        prop_assume!(!clean(&text).is_empty());
        let outcome = CipherEngine::new().encrypt(&text, &rows);
        let kinds: Vec<StepKind> = outcome.steps.iter().map(|step| step.kind).collect();

        prop_assert_eq!(kinds[0], StepKind::Clean);
        let mut idx = 1;
        if kinds[idx] == StepKind::Padding {
            idx += 1;
        }
        prop_assert_eq!(kinds[idx], StepKind::Convert);
        idx += 1;
        let blocks = &kinds[idx..kinds.len() - 1];
        prop_assert!(!blocks.is_empty());
        prop_assert_eq!(blocks.len() % 2, 0);
        for pair in blocks.chunks(2) {
            prop_assert_eq!(pair, &[StepKind::Block, StepKind::Multiply][..]);
        }
        prop_assert_eq!(kinds.last().copied(), Some(StepKind::Final));
    }

    #[test]
    fn validation_agrees_with_invertibility(
        entries in prop::collection::vec(0i64..26, 9),
        size in 2usize..=3,
    ) {
        let rows: Vec<Vec<i64>> = entries
            .chunks(3)
            .take(size)
            .map(|row| row[..size].to_vec())
            .collect();
        let result = validate_matrix(&rows);
        let engine = CipherEngine::new();
        let outcome = engine.encrypt("HILL", &rows);
        prop_assert_eq!(result.valid, outcome.is_success());
    }
}
