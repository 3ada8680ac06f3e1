//! Integer helpers for arithmetic modulo 26.

/// Size of the alphabet and modulus of every Hill cipher product.
pub const MODULUS: i64 = 26;

/// Reduces `value` into `[0, 26)`, including negative inputs.
#[inline]
pub fn reduce(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Greatest common divisor by the Euclidean algorithm, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a.abs()
}

/// Returns true when `value` has an inverse modulo 26.
#[inline]
pub fn is_coprime_with_modulus(value: i64) -> bool {
    gcd(value, MODULUS) == 1
}

/// Finds `x` in `[1, m)` with `a * x ≡ 1 (mod m)` by exhaustive search.
///
/// `a` is first normalized into `[0, m)`. Returns `None` when `a` and `m` are not coprime
/// or when `m < 2`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m < 2 {
        return None;
    }
    let a = i128::from(a.rem_euclid(m));
    let modulus = i128::from(m);
    (1..m).find(|&x| (a * i128::from(x)) % modulus == 1)
}
