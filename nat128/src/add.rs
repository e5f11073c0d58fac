//! Additive group: addition and subtraction with carry/borrow out.
//!
//! Every routine ripples through a double-width accumulator, so a limb sum
//! plus the incoming carry can never overflow. The value returned is the
//! carry (unsigned) or borrow (signed, sign-extended) out of the top limb.
//! Callers composing wider numbers from 128-bit blocks must feed it into
//! the next block.

use crate::compare::gte;
use crate::limb::{adc, sbb, LIMBS};

/// z = (x + y) mod 2^128. Returns the carry out, 0 or 1.
///
/// ```
/// let x = [u32::MAX; 4];
/// let mut z = nat128::create();
/// assert_eq!(nat128::add(&x, &[1, 0, 0, 0], &mut z), 1);
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
pub fn add(x: &[u32], y: &[u32], z: &mut [u32]) -> u32 {
    let mut c = 0u64;
    for i in 0..LIMBS {
        c += x[i] as u64 + y[i] as u64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as u32
}

/// z = (x + y + z) mod 2^128. Returns the carry out, 0 to 2.
pub fn add_both_to(x: &[u32], y: &[u32], z: &mut [u32]) -> u32 {
    let mut c = 0u64;
    for i in 0..LIMBS {
        c += x[i] as u64 + y[i] as u64 + z[i] as u64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as u32
}

/// z = (z + x) mod 2^128. Returns the carry out.
#[inline]
pub fn add_to(x: &[u32], z: &mut [u32]) -> u32 {
    add_to_with_carry(x, z, 0)
}

/// z = (z + x + c_in) mod 2^128. Returns the carry out.
///
/// `c_in` is normally the carry returned by the block below, which lets a
/// wider number be accumulated 128 bits at a time:
///
/// ```
/// use nat128::{add_to, add_to_with_carry};
///
/// // 256-bit accumulator += 256-bit addend, two blocks.
/// let addend = [u32::MAX, u32::MAX, u32::MAX, u32::MAX, 0, 0, 0, 0];
/// let mut acc = [1, 0, 0, 0, 0, 0, 0, 0];
/// let c = add_to(&addend[..4], &mut acc[..4]);
/// let c = add_to_with_carry(&addend[4..], &mut acc[4..], c);
/// assert_eq!(c, 0);
/// assert_eq!(acc, [0, 0, 0, 0, 1, 0, 0, 0]);
/// ```
pub fn add_to_with_carry(x: &[u32], z: &mut [u32], c_in: u32) -> u32 {
    let mut c = c_in as u64;
    for i in 0..LIMBS {
        c += x[i] as u64 + z[i] as u64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as u32
}

/// u, v = (u + v) mod 2^128. Both operands end up holding the sum.
pub fn add_to_each_other(u: &mut [u32], v: &mut [u32]) -> u32 {
    let mut c = 0u64;
    for i in 0..LIMBS {
        c += u[i] as u64 + v[i] as u64;
        u[i] = c as u32;
        v[i] = c as u32;
        c >>= 32;
    }
    c as u32
}

/// z = (x - y) mod 2^128. Returns the borrow: 0, or -1 if y > x.
///
/// ```
/// let mut z = nat128::create();
/// assert_eq!(nat128::sub(&[0, 0, 0, 0], &[1, 0, 0, 0], &mut z), -1);
/// assert_eq!(z, [u32::MAX; 4]);
/// ```
pub fn sub(x: &[u32], y: &[u32], z: &mut [u32]) -> i32 {
    let mut c = 0i64;
    for i in 0..LIMBS {
        c += x[i] as i64 - y[i] as i64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as i32
}

/// z = (z - x - y) mod 2^128. Returns the borrow: 0, -1 or -2.
pub fn sub_both_from(x: &[u32], y: &[u32], z: &mut [u32]) -> i32 {
    let mut c = 0i64;
    for i in 0..LIMBS {
        c += z[i] as i64 - x[i] as i64 - y[i] as i64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as i32
}

/// z = (z - x) mod 2^128. Returns the borrow: 0 or -1.
pub fn sub_from(x: &[u32], z: &mut [u32]) -> i32 {
    let mut c = 0i64;
    for i in 0..LIMBS {
        c += z[i] as i64 - x[i] as i64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as i32
}

/// z = |x - y|. Returns true if x >= y, i.e. if z = x - y.
///
/// Saves the caller a separate comparison before subtracting.
pub fn diff(x: &[u32], y: &[u32], z: &mut [u32]) -> bool {
    let pos = gte(x, y);
    if pos {
        sub(x, y, z);
    } else {
        sub(y, x, z);
    }
    pos
}

// ============================================================================
// 64-bit view
// ============================================================================

/// z = (x + y) mod 2^128 over two 64-bit limbs. Returns the carry out.
pub fn add64(x: &[u64], y: &[u64], z: &mut [u64]) -> u64 {
    let (r0, carry) = adc(x[0], y[0], 0);
    let (r1, carry) = adc(x[1], y[1], carry);
    z[0] = r0;
    z[1] = r1;
    carry
}

/// z = (x - y) mod 2^128 over two 64-bit limbs. Returns the borrow, 0 or -1.
pub fn sub64(x: &[u64], y: &[u64], z: &mut [u64]) -> i64 {
    let (r0, borrow) = sbb(x[0], y[0], 0);
    let (r1, borrow) = sbb(x[1], y[1], borrow);
    z[0] = r0;
    z[1] = r1;
    -(borrow as i64)
}
