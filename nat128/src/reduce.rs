//! Small-constant multiply-add helpers for reduction modulo p = 2^128 - c.
//!
//! Reducing a 256-bit product modulo such a prime is "multiply the high half
//! by c and add it to the low half". With c = 2^97 + 2^32 + ... style primes
//! the multiplier is often 2^32 + w for a 31-bit w, so several helpers here
//! multiply by that 33-bit constant directly (`mul33_*`).
//!
//! Preconditions (31-bit constants, window sizes) are checked with
//! `debug_assert!` only.
//!
//! The `*_word_add` family only calls [`inc_at`] when the local carry is
//! non-zero. That branch depends on the operands, so these helpers are NOT
//! constant-time.

use crate::limb::{inc_at, LIMBS, M};

/// z = y + (2^32 + w) * x over four limbs. Returns the carry out, which can
/// exceed one limb (up to 33 bits).
///
/// `w` must have its top bit clear.
///
/// ```
/// let x = [5, 0, 0, 0];
/// let y = [1, 0, 0, 0];
/// let mut z = nat128::create();
/// let c = nat128::mul33_add(3, &x, &y, &mut z);
/// // 1 + (2^32 + 3) * 5
/// assert_eq!((c, z), (0, [16, 5, 0, 0]));
/// ```
pub fn mul33_add(w: u32, x: &[u32], y: &[u32], z: &mut [u32]) -> u64 {
    debug_assert!(w >> 31 == 0, "mul33_add: w must be below 2^31");

    let mut c = 0u64;
    let w_val = w as u64;
    let x0 = x[0] as u64;
    c += w_val * x0 + y[0] as u64;
    z[0] = c as u32;
    c >>= 32;
    let x1 = x[1] as u64;
    c += w_val * x1 + x0 + y[1] as u64;
    z[1] = c as u32;
    c >>= 32;
    let x2 = x[2] as u64;
    c += w_val * x2 + x1 + y[2] as u64;
    z[2] = c as u32;
    c >>= 32;
    let x3 = x[3] as u64;
    c += w_val * x3 + x2 + y[3] as u64;
    z[3] = c as u32;
    c >>= 32;
    c += x3;
    c
}

/// zz[0..4] += x * yy[0..4]. Returns the carry out of zz[3].
///
/// `yy` and `zz` are windows into double-width buffers; the caller picks the
/// half by slicing (`&yy[4..]`, `&mut zz[4..]`).
pub fn mul_word_add_ext(x: u32, yy: &[u32], zz: &mut [u32]) -> u32 {
    debug_assert!(yy.len() >= 4 && zz.len() >= 4);

    let mut c = 0u64;
    let x_val = x as u64;
    for i in 0..LIMBS {
        c += x_val * yy[i] as u64 + zz[i] as u64;
        zz[i] = c as u32;
        c >>= 32;
    }
    c as u32
}

/// z[0..4] += (2^32 + x) * y for a 64-bit `y`. Returns the carry out.
///
/// `x` must have its top bit clear.
pub fn mul33_dword_add(x: u32, y: u64, z: &mut [u32]) -> u32 {
    debug_assert!(x >> 31 == 0, "mul33_dword_add: x must be below 2^31");
    debug_assert!(z.len() >= 4);

    let mut c = 0u64;
    let x_val = x as u64;
    let y00 = y & M;
    c += x_val * y00 + z[0] as u64;
    z[0] = c as u32;
    c >>= 32;
    let y01 = y >> 32;
    c += x_val * y01 + y00 + z[1] as u64;
    z[1] = c as u32;
    c >>= 32;
    c += y01 + z[2] as u64;
    z[2] = c as u32;
    c >>= 32;
    c += z[3] as u64;
    z[3] = c as u32;
    c >>= 32;
    c as u32
}

/// z[0..4] += (2^32 + x) * y for a 32-bit `y`. Returns the carry out of z[3].
///
/// `x` must have its top bit clear. The local carry chain covers z[0..3];
/// a remaining carry is pushed into z[3] with [`inc_at`].
pub fn mul33_word_add(x: u32, y: u32, z: &mut [u32]) -> u32 {
    debug_assert!(x >> 31 == 0, "mul33_word_add: x must be below 2^31");
    debug_assert!(z.len() >= 4);

    let mut c = 0u64;
    let y_val = y as u64;
    c += y_val * x as u64 + z[0] as u64;
    z[0] = c as u32;
    c >>= 32;
    c += y_val + z[1] as u64;
    z[1] = c as u32;
    c >>= 32;
    c += z[2] as u64;
    z[2] = c as u32;
    c >>= 32;
    if c == 0 {
        0
    } else {
        inc_at(&mut z[..LIMBS], 3)
    }
}

/// z[0..4] += x * y for a 64-bit `y`. Returns the carry out of z[3].
///
/// The local carry chain covers z[0..3]; a remaining carry is pushed into
/// z[3] with [`inc_at`].
pub fn mul_word_dword_add(x: u32, y: u64, z: &mut [u32]) -> u32 {
    debug_assert!(z.len() >= 4);

    let mut c = 0u64;
    let x_val = x as u64;
    c += x_val * (y & M) + z[0] as u64;
    z[0] = c as u32;
    c >>= 32;
    c += x_val * (y >> 32) + z[1] as u64;
    z[1] = c as u32;
    c >>= 32;
    c += z[2] as u64;
    z[2] = c as u32;
    c >>= 32;
    if c == 0 {
        0
    } else {
        inc_at(&mut z[..LIMBS], 3)
    }
}

/// z[0..4] += x * y for 32-bit `x` and `y`. Returns the carry out of z[3].
///
/// The local carry chain covers z[0..2]; a remaining carry is pushed into
/// z[2..4] with [`inc_at`].
pub fn mul_words_add(x: u32, y: u32, z: &mut [u32]) -> u32 {
    debug_assert!(z.len() >= 4);

    let mut c = 0u64;
    c += y as u64 * x as u64 + z[0] as u64;
    z[0] = c as u32;
    c >>= 32;
    c += z[1] as u64;
    z[1] = c as u32;
    c >>= 32;
    if c == 0 {
        0
    } else {
        inc_at(&mut z[..LIMBS], 2)
    }
}

/// z[0..4] = x * y[0..4]. Returns the fifth (top) limb of the product.
pub fn mul_word(x: u32, y: &[u32], z: &mut [u32]) -> u32 {
    let mut c = 0u64;
    let x_val = x as u64;
    for i in 0..LIMBS {
        c += x_val * y[i] as u64;
        z[i] = c as u32;
        c >>= 32;
    }
    c as u32
}
