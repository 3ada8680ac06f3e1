//! Arithmetic building blocks for the Hill cipher over the 26-letter Latin alphabet.
//!
//! This crate provides:
//! - Modular primitives (`gcd`, modular inverse) for arithmetic modulo 26.
//! - [`KeyMatrix`], a 2×2 or 3×3 key whose shape is checked once at construction.
//! - Matrix validation producing the messages shown to end users.
//! - Alphabet helpers for cleaning, padding and letter/number conversion.
//!
//! The Hill cipher is a teaching cipher; nothing here offers cryptographic security.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod error;
mod matrix;
mod modular;
mod parse;
mod validate;

pub use crate::alphabet::{
    clean, letter_to_number, letters_to_numbers, number_to_letter, numbers_to_letters, pad,
};
pub use crate::error::HillError;
pub use crate::matrix::{determinant_2x2, determinant_3x3, KeyMatrix, Rows};
pub use crate::modular::{gcd, is_coprime_with_modulus, mod_inverse, reduce, MODULUS};
pub use crate::parse::{example_rows, parse_rows};
pub use crate::validate::{validate_matrix, validated_key, ValidationResult};
