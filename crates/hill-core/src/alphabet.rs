//! Conversions between text and letter codes (A=0 … Z=25).

use crate::modular::reduce;

/// Uppercases `text` and drops every character outside `A-Z`.
pub fn clean(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Appends `pad_letter` until the length of `text` is a multiple of `block_size`.
pub fn pad(text: &str, block_size: usize, pad_letter: char) -> String {
    let mut padded = String::from(text);
    if block_size == 0 {
        return padded;
    }
    while padded.chars().count() % block_size != 0 {
        padded.push(pad_letter);
    }
    padded
}

/// Maps a Latin letter (either case) to its code, `None` for anything else.
#[inline]
pub fn letter_to_number(letter: char) -> Option<i64> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| i64::from(upper as u8 - b'A'))
}

/// Maps a code back to an uppercase letter after reducing it modulo 26.
#[inline]
pub fn number_to_letter(number: i64) -> char {
    // reduce() keeps the offset within 0..26
    char::from(b'A' + reduce(number) as u8)
}

/// Converts every letter of `text` to its code, skipping non-letters.
pub fn letters_to_numbers(text: &str) -> Vec<i64> {
    text.chars().filter_map(letter_to_number).collect()
}

/// Converts codes back to a string of uppercase letters.
pub fn numbers_to_letters(numbers: &[i64]) -> String {
    numbers.iter().copied().map(number_to_letter).collect()
}
