//! Arithmetic modulo [`WORD_MODULUS`](crate::WORD_MODULUS).
//!
//! Operands are always kept in `[0, m)`. Products go through `u128` so the
//! modulus can sit just below `i64::MAX` without overflow, and subtraction adds
//! `m` before reducing so a negative intermediate never appears.

#[inline]
pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);
    let sum = a + b;
    if sum >= m {
        sum - m
    } else {
        sum
    }
}

#[inline]
pub(crate) fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);
    if a >= b {
        a - b
    } else {
        a + (m - b)
    }
}

#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
