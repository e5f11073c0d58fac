//! Limb layout, shared constants and the carry primitives every operation
//! group is built from.
//!
//! A 128-bit natural is stored little-limb-first: `limbs[0]` is least
//! significant. The canonical view is four `u32` limbs; the alternate view is
//! two `u64` limbs. Double-width buffers hold exact 256-bit products.

/// 128-bit natural, four 32-bit limbs.
pub type Nat128 = [u32; 4];

/// 128-bit natural, two 64-bit limbs.
pub type Nat128x64 = [u64; 2];

/// 256-bit product buffer, eight 32-bit limbs.
pub type Nat256 = [u32; 8];

/// 256-bit product buffer, four 64-bit limbs.
pub type Nat256x64 = [u64; 4];

/// Number of 32-bit limbs in a [`Nat128`].
pub const LIMBS: usize = 4;

/// Number of 64-bit limbs in a [`Nat128x64`].
pub const LIMBS_64: usize = 2;

/// Number of 32-bit limbs in a [`Nat256`].
pub const EXT_LIMBS: usize = 8;

/// Number of 64-bit limbs in a [`Nat256x64`].
pub const EXT_LIMBS_64: usize = 4;

/// Bit width of every operand.
pub const BITS: usize = 128;

/// Low-limb mask for a `u64` accumulator.
pub(crate) const M: u64 = 0xFFFF_FFFF;

// Compile-time guards
const _: () = assert!(LIMBS * 32 == BITS, "32-bit view must cover 128 bits");
const _: () = assert!(LIMBS_64 * 64 == BITS, "64-bit view must cover 128 bits");
const _: () = assert!(EXT_LIMBS == 2 * LIMBS, "extended buffer is double width");
const _: () = assert!(EXT_LIMBS_64 == 2 * LIMBS_64, "extended buffer is double width");
const _: () = assert!(M == u32::MAX as u64);

// ============================================================================
// 64-bit limb helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64) // borrow is 0 or 1
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 * b as u128 + c as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

// ============================================================================
// Carry extension
// ============================================================================

/// Adds one at limb `pos` and ripples the carry upward through `z`.
///
/// Returns 1 if the carry ran past the last limb of `z` (every limb from
/// `pos` upward was all-ones and is now zero), 0 otherwise. Limbs below
/// `pos` are never touched.
///
/// Callers bound the propagation by slicing: `inc_at(&mut z[..4], 3)` only
/// reaches limb 3.
///
/// ```
/// use nat128::limb::inc_at;
///
/// let mut z = [7, u32::MAX, u32::MAX, 5];
/// assert_eq!(inc_at(&mut z, 1), 0);
/// assert_eq!(z, [7, 0, 0, 6]);
///
/// let mut top = [1, u32::MAX];
/// assert_eq!(inc_at(&mut top, 1), 1);
/// assert_eq!(top, [1, 0]);
/// ```
pub fn inc_at(z: &mut [u32], pos: usize) -> u32 {
    debug_assert!(pos <= z.len());
    for limb in z[pos..].iter_mut() {
        *limb = limb.wrapping_add(1);
        if *limb != 0 {
            return 0;
        }
    }
    1
}
