//! Relational and bitwise queries.
//!
//! NOT constant-time: `gte`, `eq` and the zero/one tests return as soon as
//! a limb decides the answer.

use crate::limb::{LIMBS, LIMBS_64};

/// x >= y. Compares from the most significant limb down; equal values
/// compare as greater-or-equal.
///
/// ```
/// use nat128::gte;
///
/// assert!(gte(&[0, 0, 0, 1], &[u32::MAX, u32::MAX, u32::MAX, 0]));
/// assert!(gte(&[5, 0, 0, 0], &[5, 0, 0, 0]));
/// assert!(!gte(&[4, 0, 0, 0], &[5, 0, 0, 0]));
/// ```
pub fn gte(x: &[u32], y: &[u32]) -> bool {
    for i in (0..LIMBS).rev() {
        let (x_i, y_i) = (x[i], y[i]);
        if x_i < y_i {
            return false;
        }
        if x_i > y_i {
            return true;
        }
    }
    true // equal
}

/// x == y, limb by limb from the top.
pub fn eq(x: &[u32], y: &[u32]) -> bool {
    (0..LIMBS).rev().all(|i| x[i] == y[i])
}

/// x == 0.
pub fn is_zero(x: &[u32]) -> bool {
    x[..LIMBS].iter().all(|&l| l == 0)
}

/// x == 1. Tests the low limb first.
pub fn is_one(x: &[u32]) -> bool {
    x[0] == 1 && x[1..LIMBS].iter().all(|&l| l == 0)
}

/// Bit `bit` of x, 0 or 1. Any index outside [0, 127] reads as 0.
///
/// ```
/// use nat128::get_bit;
///
/// let x = [1, 0, 0, 0x8000_0000];
/// assert_eq!(get_bit(&x, 0), 1);
/// assert_eq!(get_bit(&x, 127), 1);
/// assert_eq!(get_bit(&x, 128), 0);
/// assert_eq!(get_bit(&x, -1), 0);
/// ```
pub fn get_bit(x: &[u32], bit: i32) -> u32 {
    if bit == 0 {
        return x[0] & 1;
    }
    if (bit & 127) != bit {
        return 0;
    }
    let w = (bit >> 5) as usize;
    let b = bit & 31;
    (x[w] >> b) & 1
}

// ============================================================================
// 64-bit view
// ============================================================================

/// x >= y over two 64-bit limbs.
pub fn gte64(x: &[u64], y: &[u64]) -> bool {
    for i in (0..LIMBS_64).rev() {
        if x[i] < y[i] {
            return false;
        }
        if x[i] > y[i] {
            return true;
        }
    }
    true
}

/// x == y over two 64-bit limbs.
pub fn eq64(x: &[u64], y: &[u64]) -> bool {
    x[1] == y[1] && x[0] == y[0]
}

/// x == 0 over two 64-bit limbs.
pub fn is_zero64(x: &[u64]) -> bool {
    x[0] == 0 && x[1] == 0
}

/// x == 1 over two 64-bit limbs.
pub fn is_one64(x: &[u64]) -> bool {
    x[0] == 1 && x[1] == 0
}

/// Bit `bit` of a 64-bit-view value. Any index outside [0, 127] reads as 0.
pub fn get_bit64(x: &[u64], bit: i32) -> u64 {
    if (bit & 127) != bit {
        return 0;
    }
    let w = (bit >> 6) as usize;
    let b = bit & 63;
    (x[w] >> b) & 1
}
