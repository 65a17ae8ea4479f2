//! # String Key Derivation
//!
//! Maps candidate subsequence strings to the integer keys consumed by the
//! probe functions of [`DedupSet`](crate::hashing::dedup::DedupSet).
//!
//! The key is a base-3 positional polynomial over per-character values
//! `ord(c) - ord('0') + 1`, folded Horner-style and reduced modulo a fixed
//! Mersenne prime at every step. The value law is tuned for digit
//! alphabets (`'0'` maps to 1, `'9'` to 10) but any `char` reduces
//! consistently, which is all the probing layer needs: a key collision
//! costs extra probes, never a wrong answer, because slots are confirmed
//! by string equality.

/// Multiplier of the positional polynomial.
const KEY_BASE: u64 = 3;

/// Modulus of the key space: the Mersenne prime 2^61 - 1. Keys stay well
/// inside `u64`, so the Horner step cannot wrap.
const KEY_MODULUS: u64 = 0x1FFF_FFFF_FFFF_FFFF;

/// Offset subtracted from each code point so that `'0'` maps to 1.
const DIGIT_ANCHOR: i64 = '0' as i64 - 1;

/// Derives the probe key for `s`. The empty string keys to 0.
///
/// The same string always yields the same key; distinct strings may
/// collide. Insertion and membership checks must key the exact same
/// string for their probe sequences to line up.
///
/// # Examples
/// ```
/// use lcs_all::hashing::string_key::string_key;
///
/// assert_eq!(string_key(""), 0);
/// assert_eq!(string_key("0"), 1);
/// assert_eq!(string_key("12"), 2 * 3 + 3);
/// ```
pub fn string_key(s: &str) -> u64 {
    let mut key = 0;
    for c in s.chars() {
        key = add_mod(mul_mod(key, KEY_BASE), char_value(c));
    }
    key
}

/// Per-character coefficient, reduced into the key field so code points
/// below `'0'` stay consistent instead of wrapping.
fn char_value(c: char) -> u64 {
    (c as i64 - DIGIT_ANCHOR).rem_euclid(KEY_MODULUS as i64) as u64
}

/// Modular addition for operands already below [`KEY_MODULUS`].
#[inline]
fn add_mod(a: u64, b: u64) -> u64 {
    let sum = a + b;
    if sum >= KEY_MODULUS {
        sum - KEY_MODULUS
    } else {
        sum
    }
}

/// Modular multiplication via a `u128` intermediate.
#[inline]
fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % KEY_MODULUS as u128) as u64
}
