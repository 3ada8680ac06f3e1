//! Key text parsing and the sample keys offered to users.

use crate::error::HillError;
use crate::matrix::Rows;

/// Parses key text such as `"3 2; 5 7"` into rows.
///
/// Rows are separated by `;` or newlines, entries by commas and/or whitespace. Blank rows are
/// ignored. Any token that is not an integer yields [`HillError::InvalidEntry`]; shape and sign
/// are left to validation.
pub fn parse_rows(text: &str) -> Result<Rows, HillError> {
    text.split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| token.parse::<i64>().map_err(|_| HillError::InvalidEntry))
                .collect()
        })
        .collect()
}

/// Sample key of the given size: the 2×2 `[[3, 2], [5, 7]]` or the textbook 3×3 key.
pub fn example_rows(size: usize) -> Option<Rows> {
    match size {
        2 => Some(vec![vec![3, 2], vec![5, 7]]),
        3 => Some(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]),
        _ => None,
    }
}
