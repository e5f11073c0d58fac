//! Conversions to and from `num_bigint::BigInt`, plus the 32-bit/64-bit
//! limb view changes.

use num_bigint::{BigInt, Sign};

use crate::error::ConversionError;
use crate::limb::{Nat128, Nat128x64, BITS, LIMBS, LIMBS_64};

/// Rejects negative values and values wider than 128 bits.
fn check_range(x: &BigInt) -> Result<(), ConversionError> {
    let err = if x.sign() == Sign::Minus {
        ConversionError::Negative
    } else if x.bits() > BITS as u64 {
        ConversionError::TooWide { bits: x.bits() }
    } else {
        return Ok(());
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(value = %x, error = %err, "rejecting big integer");
    Err(err)
}

/// The value of `x` as a non-negative `BigInt`.
///
/// Zero limbs are skipped rather than written, over a full 16-byte
/// big-endian buffer, so a zero limb in the middle never shortens the
/// magnitude.
///
/// ```
/// use num_bigint::BigInt;
///
/// let n = nat128::to_big_integer(&[0, 0, 1, 0]);
/// assert_eq!(n, BigInt::from(1u128 << 64));
/// ```
pub fn to_big_integer(x: &[u32]) -> BigInt {
    let mut bs = [0u8; 16];
    for i in 0..LIMBS {
        let x_i = x[i];
        if x_i != 0 {
            let off = (3 - i) << 2;
            bs[off..off + 4].copy_from_slice(&x_i.to_be_bytes());
        }
    }
    BigInt::from_bytes_be(Sign::Plus, &bs)
}

/// The value of `x` (64-bit limbs) as a non-negative `BigInt`.
pub fn to_big_integer64(x: &[u64]) -> BigInt {
    let mut bs = [0u8; 16];
    for i in 0..LIMBS_64 {
        let x_i = x[i];
        if x_i != 0 {
            let off = (1 - i) << 3;
            bs[off..off + 8].copy_from_slice(&x_i.to_be_bytes());
        }
    }
    BigInt::from_bytes_be(Sign::Plus, &bs)
}

/// Four 32-bit limbs holding `x`.
///
/// Fails if `x` is negative or needs more than 128 bits.
///
/// ```
/// use num_bigint::BigInt;
/// use nat128::ConversionError;
///
/// let n = BigInt::from(u64::MAX) + 1;
/// assert_eq!(nat128::from_big_integer(&n), Ok([0, 0, 1, 0]));
/// assert_eq!(nat128::from_big_integer(&BigInt::from(-1)), Err(ConversionError::Negative));
/// ```
pub fn from_big_integer(x: &BigInt) -> Result<Nat128, ConversionError> {
    check_range(x)?;
    let mut z = [0u32; 4];
    for (limb, digit) in z.iter_mut().zip(x.magnitude().iter_u32_digits()) {
        *limb = digit;
    }
    Ok(z)
}

/// Two 64-bit limbs holding `x`.
///
/// Fails if `x` is negative or needs more than 128 bits.
pub fn from_big_integer64(x: &BigInt) -> Result<Nat128x64, ConversionError> {
    check_range(x)?;
    let mut z = [0u64; 2];
    for (limb, digit) in z.iter_mut().zip(x.magnitude().iter_u64_digits()) {
        *limb = digit;
    }
    Ok(z)
}

/// Regroups four 32-bit limbs as two 64-bit limbs. Same value.
pub fn to_64(x: &[u32]) -> Nat128x64 {
    [
        x[0] as u64 | ((x[1] as u64) << 32),
        x[2] as u64 | ((x[3] as u64) << 32),
    ]
}

/// Splits two 64-bit limbs into four 32-bit limbs. Same value.
pub fn from_64(x: &[u64]) -> Nat128 {
    [
        x[0] as u32,
        (x[0] >> 32) as u32,
        x[1] as u32,
        (x[1] >> 32) as u32,
    ]
}
