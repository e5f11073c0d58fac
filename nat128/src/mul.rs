//! Multiplicative group: exact 128x128 -> 256-bit products.
//!
//! `zz` is always a double-width window of eight 32-bit limbs (four 64-bit
//! limbs for the `*64` variants). Nothing is reduced.

use crate::limb::{adc, mac, LIMBS, M};

/// zz = x * y, the exact 256-bit product.
///
/// Carry-save schoolbook: row 0 seeds zz[0..5], rows 1..3 each add four
/// partial products into zz[i..i+4] and write their carry to zz[i+4].
///
/// ```
/// let x = [u32::MAX; 4];
/// let mut zz = nat128::create_ext();
/// nat128::mul(&x, &x, &mut zz);
/// // (2^128 - 1)^2 = 2^256 - 2^129 + 1
/// assert_eq!(zz, [1, 0, 0, 0, u32::MAX - 1, u32::MAX, u32::MAX, u32::MAX]);
/// ```
pub fn mul(x: &[u32], y: &[u32], zz: &mut [u32]) {
    let y_0 = y[0] as u64;
    let y_1 = y[1] as u64;
    let y_2 = y[2] as u64;
    let y_3 = y[3] as u64;

    {
        let mut c = 0u64;
        let x_0 = x[0] as u64;
        c += x_0 * y_0;
        zz[0] = c as u32;
        c >>= 32;
        c += x_0 * y_1;
        zz[1] = c as u32;
        c >>= 32;
        c += x_0 * y_2;
        zz[2] = c as u32;
        c >>= 32;
        c += x_0 * y_3;
        zz[3] = c as u32;
        c >>= 32;
        zz[4] = c as u32;
    }

    for i in 1..4 {
        let mut c = 0u64;
        let x_i = x[i] as u64;
        c += x_i * y_0 + zz[i] as u64;
        zz[i] = c as u32;
        c >>= 32;
        c += x_i * y_1 + zz[i + 1] as u64;
        zz[i + 1] = c as u32;
        c >>= 32;
        c += x_i * y_2 + zz[i + 2] as u64;
        zz[i + 2] = c as u32;
        c >>= 32;
        c += x_i * y_3 + zz[i + 3] as u64;
        zz[i + 3] = c as u32;
        c >>= 32;
        zz[i + 4] = c as u32;
    }
}

/// zz = (zz + x * y) mod 2^256. Returns the carry out of zz[7].
///
/// Used to sum several partial products into one accumulator.
pub fn mul_add_to(x: &[u32], y: &[u32], zz: &mut [u32]) -> u32 {
    let y_0 = y[0] as u64;
    let y_1 = y[1] as u64;
    let y_2 = y[2] as u64;
    let y_3 = y[3] as u64;

    let mut zc = 0u64;
    for i in 0..LIMBS {
        let mut c = 0u64;
        let x_i = x[i] as u64;
        c += x_i * y_0 + zz[i] as u64;
        zz[i] = c as u32;
        c >>= 32;
        c += x_i * y_1 + zz[i + 1] as u64;
        zz[i + 1] = c as u32;
        c >>= 32;
        c += x_i * y_2 + zz[i + 2] as u64;
        zz[i + 2] = c as u32;
        c >>= 32;
        c += x_i * y_3 + zz[i + 3] as u64;
        zz[i + 3] = c as u32;
        c >>= 32;
        c += zc + zz[i + 4] as u64;
        zz[i + 4] = c as u32;
        zc = c >> 32;
    }
    zc as u32
}

/// zz = x^2, the exact 256-bit square.
///
/// Each cross term x_i * x_j (i < j) is computed once. The diagonal terms
/// are laid down pre-halved, the cross terms are added on top, and the
/// whole sum is doubled limb by limb: `c` ferries the bit shifted out of the
/// top of one limb into the low bit of the next.
///
/// Column accumulators are renormalized to 32 bits before the x_3 row so
/// that no `u64` column can overflow.
///
/// ```
/// let mut zz = nat128::create_ext();
/// nat128::square(&[2, 0, 0, 0], &mut zz);
/// assert_eq!(zz, [4, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn square(x: &[u32], zz: &mut [u32]) {
    let x_0 = x[0] as u64;
    let mut zz_1: u64;

    let mut c: u32 = 0;
    let mut w: u32;
    {
        let mut i = 3;
        let mut j = 8;
        loop {
            let x_val = x[i] as u64;
            i -= 1;
            let p = x_val * x_val;
            j -= 1;
            zz[j] = (c << 31) | ((p >> 33) as u32);
            j -= 1;
            zz[j] = (p >> 1) as u32;
            c = p as u32;
            if i == 0 {
                break;
            }
        }

        let p = x_0 * x_0;
        zz_1 = ((c << 31) as u64) | (p >> 33);
        zz[0] = p as u32;
        c = ((p >> 32) as u32) & 1;
    }

    let x_1 = x[1] as u64;
    let mut zz_2 = zz[2] as u64;

    {
        zz_1 += x_1 * x_0;
        w = zz_1 as u32;
        zz[1] = (w << 1) | c;
        c = w >> 31;
        zz_2 += zz_1 >> 32;
    }

    let x_2 = x[2] as u64;
    let mut zz_3 = zz[3] as u64;
    let mut zz_4 = zz[4] as u64;
    {
        zz_2 += x_2 * x_0;
        w = zz_2 as u32;
        zz[2] = (w << 1) | c;
        c = w >> 31;
        zz_3 += (zz_2 >> 32) + x_2 * x_1;
        zz_4 += zz_3 >> 32;
        zz_3 &= M;
    }

    let x_3 = x[3] as u64;
    let mut zz_5 = zz[5] as u64 + (zz_4 >> 32);
    zz_4 &= M;
    let mut zz_6 = zz[6] as u64 + (zz_5 >> 32);
    zz_5 &= M;
    {
        zz_3 += x_3 * x_0;
        w = zz_3 as u32;
        zz[3] = (w << 1) | c;
        c = w >> 31;
        zz_4 += (zz_3 >> 32) + x_3 * x_1;
        zz_5 += (zz_4 >> 32) + x_3 * x_2;
        zz_6 += zz_5 >> 32;
    }

    w = zz_4 as u32;
    zz[4] = (w << 1) | c;
    c = w >> 31;
    w = zz_5 as u32;
    zz[5] = (w << 1) | c;
    c = w >> 31;
    w = zz_6 as u32;
    zz[6] = (w << 1) | c;
    c = w >> 31;
    w = zz[7] + (zz_6 >> 32) as u32;
    zz[7] = (w << 1) | c;
}

// ============================================================================
// 64-bit view
// ============================================================================

/// zz = x * y over 64-bit limbs, the exact 256-bit product.
pub fn mul64(x: &[u64], y: &[u64], zz: &mut [u64]) {
    let (r0, carry) = mac(x[0], y[0], 0, 0);
    let (r1, r2) = mac(x[0], y[1], 0, carry);

    let (r1, carry) = mac(x[1], y[0], r1, 0);
    let (r2, carry) = mac(x[1], y[1], r2, carry);

    zz[0] = r0;
    zz[1] = r1;
    zz[2] = r2;
    zz[3] = carry;
}

/// zz = x^2 over 64-bit limbs. One cross product, doubled by shifting.
pub fn square64(x: &[u64], zz: &mut [u64]) {
    let (d0, d1) = mac(x[0], x[0], 0, 0);
    let (d2, d3) = mac(x[1], x[1], 0, 0);

    let (lo, hi) = mac(x[0], x[1], 0, 0);
    let top = hi >> 63;
    let hi = (hi << 1) | (lo >> 63);
    let lo = lo << 1;

    let (r1, carry) = adc(d1, lo, 0);
    let (r2, carry) = adc(d2, hi, carry);
    let (r3, _) = adc(d3, top, carry);

    zz[0] = d0;
    zz[1] = r1;
    zz[2] = r2;
    zz[3] = r3;
}
