//! 2×2 and 3×3 key matrices over Z/26.

use serde::{Deserialize, Serialize};

use crate::error::HillError;
use crate::modular::{gcd, mod_inverse, reduce, MODULUS};

/// Row-major matrix as supplied by callers or shown in a trace.
pub type Rows = Vec<Vec<i64>>;

/// Hill cipher key: a square matrix of size 2 or 3 with non-negative entries.
///
/// Entries are kept as supplied; every product reduces them modulo 26 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Rows", try_from = "Rows")]
pub enum KeyMatrix {
    /// 2×2 key, blocks of two letters.
    Size2([[i64; 2]; 2]),
    /// 3×3 key, blocks of three letters.
    Size3([[i64; 3]; 3]),
}

/// Determinant of a 2×2 matrix, reduced into `[0, 26)`.
pub fn determinant_2x2(m: &[[i64; 2]; 2]) -> i64 {
    let m = m.map(|row| row.map(reduce));
    reduce(m[0][0] * m[1][1] - m[0][1] * m[1][0])
}

/// Determinant of a 3×3 matrix by cofactor expansion, reduced into `[0, 26)`.
pub fn determinant_3x3(m: &[[i64; 3]; 3]) -> i64 {
    let m = m.map(|row| row.map(reduce));
    let a = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]);
    let b = m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]);
    let c = m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    reduce(a - b + c)
}

impl KeyMatrix {
    /// Builds a key from rows, checking emptiness, size, squareness and entry signs in that order.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, HillError> {
        if rows.is_empty() {
            return Err(HillError::EmptyMatrix);
        }
        let size = rows.len();
        if size != 2 && size != 3 {
            return Err(HillError::InvalidSize);
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(HillError::NonSquare);
        }
        if rows.iter().flatten().any(|&value| value < 0) {
            return Err(HillError::InvalidEntry);
        }
        let key = if size == 2 {
            Self::Size2(std::array::from_fn(|i| std::array::from_fn(|j| rows[i][j])))
        } else {
            Self::Size3(std::array::from_fn(|i| std::array::from_fn(|j| rows[i][j])))
        };
        Ok(key)
    }

    /// Identity key of the requested size (2 or 3).
    pub fn identity(size: usize) -> Result<Self, HillError> {
        let rows: Rows = (0..size)
            .map(|i| (0..size).map(|j| i64::from(i == j)).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Block length, 2 or 3.
    pub fn size(&self) -> usize {
        match self {
            Self::Size2(_) => 2,
            Self::Size3(_) => 3,
        }
    }

    /// Entry at `(row, col)`; panics when out of bounds.
    pub fn entry(&self, row: usize, col: usize) -> i64 {
        match self {
            Self::Size2(m) => m[row][col],
            Self::Size3(m) => m[row][col],
        }
    }

    /// Copies the entries into row vectors.
    pub fn rows(&self) -> Rows {
        match self {
            Self::Size2(m) => m.iter().map(|row| row.to_vec()).collect(),
            Self::Size3(m) => m.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Determinant reduced into `[0, 26)`.
    pub fn determinant(&self) -> i64 {
        match self {
            Self::Size2(m) => determinant_2x2(m),
            Self::Size3(m) => determinant_3x3(m),
        }
    }

    /// Returns true when the determinant is coprime with 26.
    pub fn is_invertible(&self) -> bool {
        gcd(self.determinant(), MODULUS) == 1
    }

    /// Signed cofactor matrix, computed on entries reduced modulo 26 but not reduced itself.
    pub fn cofactors(&self) -> Rows {
        match self {
            Self::Size2(m) => {
                let m = m.map(|row| row.map(reduce));
                vec![vec![m[1][1], -m[1][0]], vec![-m[0][1], m[0][0]]]
            }
            Self::Size3(m) => {
                let m = m.map(|row| row.map(reduce));
                vec![
                    vec![
                        m[1][1] * m[2][2] - m[1][2] * m[2][1],
                        -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                        m[1][0] * m[2][1] - m[1][1] * m[2][0],
                    ],
                    vec![
                        -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                        m[0][0] * m[2][2] - m[0][2] * m[2][0],
                        -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
                    ],
                    vec![
                        m[0][1] * m[1][2] - m[0][2] * m[1][1],
                        -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
                        m[0][0] * m[1][1] - m[0][1] * m[1][0],
                    ],
                ]
            }
        }
    }

    /// Adjugate: transpose of [`cofactors`](Self::cofactors).
    ///
    /// For a 2×2 key this is the swap-and-negate form `[[d, -b], [-c, a]]`.
    pub fn adjugate(&self) -> Rows {
        let cofactors = self.cofactors();
        let size = self.size();
        (0..size)
            .map(|i| cofactors.iter().map(|row| row[i]).collect())
            .collect()
    }

    /// Multiplies every entry of `rows` by `factor` and reduces into `[0, 26)`.
    pub fn scale_rows(rows: &[Vec<i64>], factor: i64) -> Rows {
        rows.iter()
            .map(|row| row.iter().map(|&v| reduce(reduce(v) * reduce(factor))).collect())
            .collect()
    }

    /// Inverse modulo 26 without recording intermediate stages.
    pub fn inverse(&self) -> Result<Self, HillError> {
        let det = self.determinant();
        if gcd(det, MODULUS) != 1 {
            return Err(HillError::NotInvertible { det });
        }
        let det_inv = mod_inverse(det, MODULUS).ok_or(HillError::ModularInverseMissing { det })?;
        Self::from_rows(&Self::scale_rows(&self.adjugate(), det_inv))
    }

    /// Matrix × column vector, each component reduced into `[0, 26)`.
    ///
    /// A vector shorter than the key contributes nothing for its missing components, so the
    /// output always has [`size`](Self::size) entries.
    pub fn apply(&self, vector: &[i64]) -> Vec<i64> {
        let size = self.size();
        (0..size)
            .map(|row| {
                let sum: i64 = (0..size)
                    .zip(vector.iter())
                    .map(|(col, &v)| reduce(self.entry(row, col)) * reduce(v))
                    .sum();
                reduce(sum)
            })
            .collect()
    }

    /// Matrix product `self * rhs` modulo 26; `None` when sizes differ.
    pub fn mul(&self, rhs: &Self) -> Option<Self> {
        let size = self.size();
        if rhs.size() != size {
            return None;
        }
        let rows: Rows = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| {
                        let sum: i64 = (0..size)
                            .map(|k| reduce(self.entry(i, k)) * reduce(rhs.entry(k, j)))
                            .sum();
                        reduce(sum)
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows).ok()
    }
}

impl From<KeyMatrix> for Rows {
    fn from(value: KeyMatrix) -> Self {
        value.rows()
    }
}

impl TryFrom<Rows> for KeyMatrix {
    type Error = HillError;

    fn try_from(value: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(&value)
    }
}
