//! Buffer construction, zeroing and copying.
//!
//! These are the only routines besides the conversions that hand out fresh
//! buffers. Everything else writes into storage the caller owns.

use crate::limb::{Nat128, Nat128x64, Nat256, Nat256x64, EXT_LIMBS, EXT_LIMBS_64, LIMBS, LIMBS_64};

/// A zeroed 4-limb buffer.
///
/// ```
/// assert_eq!(nat128::create(), [0u32; 4]);
/// ```
#[inline]
pub const fn create() -> Nat128 {
    [0; LIMBS]
}

/// A zeroed 2-limb (64-bit view) buffer.
#[inline]
pub const fn create64() -> Nat128x64 {
    [0; LIMBS_64]
}

/// A zeroed 8-limb double-width buffer for products.
#[inline]
pub const fn create_ext() -> Nat256 {
    [0; EXT_LIMBS]
}

/// A zeroed 4-limb (64-bit view) double-width buffer.
#[inline]
pub const fn create_ext64() -> Nat256x64 {
    [0; EXT_LIMBS_64]
}

/// Clears the four limbs at the start of `z`.
#[inline]
pub fn zero(z: &mut [u32]) {
    z[..LIMBS].fill(0);
}

/// Clears the two limbs at the start of `z`.
#[inline]
pub fn zero64(z: &mut [u64]) {
    z[..LIMBS_64].fill(0);
}

/// Copies the four limbs of `x` into `z`.
#[inline]
pub fn copy(x: &[u32], z: &mut [u32]) {
    z[..LIMBS].copy_from_slice(&x[..LIMBS]);
}

/// Copies the two limbs of `x` into `z`.
#[inline]
pub fn copy64(x: &[u64], z: &mut [u64]) {
    z[..LIMBS_64].copy_from_slice(&x[..LIMBS_64]);
}
