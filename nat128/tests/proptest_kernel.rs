//! Property-based tests for the 128-bit kernel.
//!
//! Every operation is checked against `num-bigint` arithmetic. Operands are
//! drawn limb by limb with a bias towards 0, 1, 2^31 and 2^32 - 1 so that
//! carry and borrow chains are exercised far more often than uniform
//! sampling would manage.

use nat128::*;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Reference value of a little-endian limb slice, built without the kernel.
fn big(limbs: &[u32]) -> BigInt {
    limbs
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &l| (acc << 32) + l)
}

fn big64(limbs: &[u64]) -> BigInt {
    limbs
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &l| (acc << 64) + l)
}

fn pow2(bits: usize) -> BigInt {
    BigInt::one() << bits
}

/// Strategy: one limb, edge values a third of the time.
fn limb() -> impl Strategy<Value = u32> {
    prop_oneof![
        2 => any::<u32>(),
        1 => prop_oneof![Just(0u32), Just(1), Just(0x8000_0000), Just(u32::MAX)],
    ]
}

/// Strategy: a 128-bit value as four limbs.
fn nat() -> impl Strategy<Value = [u32; 4]> {
    prop::array::uniform4(limb())
}

/// Strategy: a 256-bit accumulator as eight limbs.
fn nat_ext() -> impl Strategy<Value = [u32; 8]> {
    prop::array::uniform8(limb())
}

/// Strategy: a 128-bit value as two 64-bit limbs.
fn nat64() -> impl Strategy<Value = [u64; 2]> {
    nat().prop_map(|x| to_64(&x))
}

/// Strategy: a small constant with its top bit clear.
fn small_const() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..(1 << 31), Just(0), Just(1), Just((1 << 31) - 1)]
}

// ============================================================================
// Additive group
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_add_matches_reference(x in nat(), y in nat()) {
        let mut z = create();
        let c = add(&x, &y, &mut z);
        prop_assert!(c <= 1);
        prop_assert_eq!(big(&z) + BigInt::from(c) * pow2(128), big(&x) + big(&y));
    }

    #[test]
    fn prop_add_to_with_carry_chains(x in nat(), z0 in nat(), c_in in 0u32..=1) {
        let mut z = z0;
        let c = add_to_with_carry(&x, &mut z, c_in);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&x) + big(&z0) + c_in
        );
    }

    #[test]
    fn prop_add_to_agrees_with_add(x in nat(), y in nat()) {
        let mut z = create();
        let c = add(&x, &y, &mut z);
        let mut acc = y;
        prop_assert_eq!(add_to(&x, &mut acc), c);
        prop_assert_eq!(acc, z);
    }

    #[test]
    fn prop_add_both_to(x in nat(), y in nat(), z0 in nat()) {
        let mut z = z0;
        let c = add_both_to(&x, &y, &mut z);
        prop_assert!(c <= 2);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&x) + big(&y) + big(&z0)
        );
    }

    #[test]
    fn prop_add_to_each_other(u0 in nat(), v0 in nat()) {
        let (mut u, mut v) = (u0, v0);
        let c = add_to_each_other(&mut u, &mut v);
        prop_assert_eq!(u, v);
        prop_assert_eq!(big(&u) + BigInt::from(c) * pow2(128), big(&u0) + big(&v0));
    }

    #[test]
    fn prop_sub_matches_reference(x in nat(), y in nat()) {
        let mut z = create();
        let b = sub(&x, &y, &mut z);
        prop_assert!(b == 0 || b == -1);
        prop_assert_eq!(b == -1, big(&x) < big(&y));
        prop_assert_eq!(big(&z) + BigInt::from(b) * pow2(128), big(&x) - big(&y));
    }

    #[test]
    fn prop_sub_from(x in nat(), z0 in nat()) {
        let mut z = z0;
        let b = sub_from(&x, &mut z);
        prop_assert_eq!(big(&z) + BigInt::from(b) * pow2(128), big(&z0) - big(&x));
    }

    #[test]
    fn prop_sub_both_from(x in nat(), y in nat(), z0 in nat()) {
        let mut z = z0;
        let b = sub_both_from(&x, &y, &mut z);
        prop_assert!((-2..=0).contains(&b));
        prop_assert_eq!(
            big(&z) + BigInt::from(b) * pow2(128),
            big(&z0) - big(&x) - big(&y)
        );
    }

    #[test]
    fn prop_add_then_sub_restores(x in nat(), y in nat()) {
        let mut sum = create();
        let c = add(&x, &y, &mut sum);
        let mut back = create();
        let b = sub(&sum, &y, &mut back);
        prop_assert_eq!(back, x);
        // A carry out of the add shows up as a borrow in the sub.
        prop_assert_eq!(c as i32 + b, 0);
    }

    #[test]
    fn prop_diff(x in nat(), y in nat()) {
        let mut z = create();
        let pos = diff(&x, &y, &mut z);
        prop_assert_eq!(pos, big(&x) >= big(&y));
        prop_assert_eq!(big(&z), (big(&x) - big(&y)).abs());
    }
}

// ============================================================================
// Multiplicative group
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_mul_matches_reference(x in nat(), y in nat()) {
        let mut zz = create_ext();
        mul(&x, &y, &mut zz);
        prop_assert_eq!(big(&zz), big(&x) * big(&y));
    }

    #[test]
    fn prop_mul_commutes(x in nat(), y in nat()) {
        let mut xy = create_ext();
        let mut yx = create_ext();
        mul(&x, &y, &mut xy);
        mul(&y, &x, &mut yx);
        prop_assert_eq!(xy, yx);
    }

    #[test]
    fn prop_square_equals_mul(x in nat()) {
        let mut sq = create_ext();
        let mut prod = create_ext();
        square(&x, &mut sq);
        mul(&x, &x, &mut prod);
        prop_assert_eq!(sq, prod);
    }

    #[test]
    fn prop_square_matches_reference(x in nat(), stale in nat_ext()) {
        let mut zz = stale;
        square(&x, &mut zz);
        prop_assert_eq!(big(&zz), big(&x) * big(&x));
    }

    #[test]
    fn prop_mul_add_to(x in nat(), y in nat(), zz0 in nat_ext()) {
        let mut zz = zz0;
        let c = mul_add_to(&x, &y, &mut zz);
        prop_assert!(c <= 1);
        prop_assert_eq!(
            big(&zz) + BigInt::from(c) * pow2(256),
            big(&zz0) + big(&x) * big(&y)
        );
    }
}

// ============================================================================
// Small-constant helpers
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_mul33_add(w in small_const(), x in nat(), y in nat()) {
        let mut z = create();
        let c = mul33_add(w, &x, &y, &mut z);
        prop_assert!(c < 1 << 33);
        let k = pow2(32) + w;
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&y) + k * big(&x)
        );
    }

    #[test]
    fn prop_mul33_add_zero_accumulator(w in small_const(), x in nat()) {
        let mut z = create();
        let c = mul33_add(w, &x, &[0; 4], &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            (pow2(32) + w) * big(&x)
        );
    }

    #[test]
    fn prop_mul_word_add_ext(x in limb(), yy in nat_ext(), zz0 in nat_ext()) {
        let mut zz = zz0;
        let c = mul_word_add_ext(x, &yy[4..], &mut zz[4..]);
        prop_assert_eq!(&zz[..4], &zz0[..4]);
        prop_assert_eq!(
            big(&zz[4..]) + BigInt::from(c) * pow2(128),
            big(&zz0[4..]) + BigInt::from(x) * big(&yy[4..])
        );
    }

    #[test]
    fn prop_mul33_dword_add(x in small_const(), y in any::<u64>(), z0 in nat()) {
        let mut z = z0;
        let c = mul33_dword_add(x, y, &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&z0) + (pow2(32) + x) * y
        );
    }

    #[test]
    fn prop_mul33_word_add(x in small_const(), y in limb(), z0 in nat()) {
        let mut z = z0;
        let c = mul33_word_add(x, y, &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&z0) + (pow2(32) + x) * y
        );
    }

    #[test]
    fn prop_mul_word_dword_add(x in limb(), y in any::<u64>(), z0 in nat()) {
        let mut z = z0;
        let c = mul_word_dword_add(x, y, &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&z0) + BigInt::from(x) * y
        );
    }

    #[test]
    fn prop_mul_words_add(x in limb(), y in limb(), z0 in nat()) {
        let mut z = z0;
        let c = mul_words_add(x, y, &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(c) * pow2(128),
            big(&z0) + BigInt::from(x) * y
        );
    }

    #[test]
    fn prop_mul_word(x in limb(), y in nat()) {
        let mut z = create();
        let top = mul_word(x, &y, &mut z);
        prop_assert_eq!(
            big(&z) + BigInt::from(top) * pow2(128),
            BigInt::from(x) * big(&y)
        );
    }
}

// ============================================================================
// Relational / bitwise
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_gte_matches_reference(x in nat(), y in nat()) {
        prop_assert_eq!(gte(&x, &y), to_big_integer(&x) >= to_big_integer(&y));
    }

    #[test]
    fn prop_eq_matches_reference(x in nat(), y in nat()) {
        prop_assert_eq!(eq(&x, &y), big(&x) == big(&y));
        prop_assert!(eq(&x, &x));
    }

    #[test]
    fn prop_get_bit_in_range(x in nat(), bit in 0i32..128) {
        let expected = u32::from(big(&x).bit(bit as u64));
        prop_assert_eq!(get_bit(&x, bit), expected);
    }

    #[test]
    fn prop_get_bit_out_of_range(x in nat(), bit in prop_oneof![128i32..=i32::MAX, i32::MIN..0i32]) {
        prop_assert_eq!(get_bit(&x, bit), 0);
        prop_assert_eq!(get_bit64(&to_64(&x), bit), 0);
    }

    #[test]
    fn prop_zero_one_tests(x in nat()) {
        prop_assert_eq!(is_zero(&x), big(&x).is_zero());
        prop_assert_eq!(is_one(&x), big(&x).is_one());
    }
}

// ============================================================================
// Conversion
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_to_big_integer_matches_reference(x in nat()) {
        prop_assert_eq!(to_big_integer(&x), big(&x));
    }

    #[test]
    fn prop_limbs_roundtrip(x in nat()) {
        prop_assert_eq!(from_big_integer(&to_big_integer(&x)), Ok(x));
    }

    #[test]
    fn prop_bigint_roundtrip(n in any::<u128>()) {
        let n = BigInt::from(n);
        let limbs = from_big_integer(&n).unwrap();
        prop_assert_eq!(to_big_integer(&limbs), n.clone());
        let limbs64 = from_big_integer64(&n).unwrap();
        prop_assert_eq!(to_big_integer64(&limbs64), n);
    }

    #[test]
    fn prop_rejects_out_of_range(n in any::<u128>(), extra in 0usize..64) {
        let too_wide = (BigInt::from(n) << 128) + (pow2(128) << extra);
        let is_too_wide = matches!(
            from_big_integer(&too_wide),
            Err(ConversionError::TooWide { .. })
        );
        prop_assert!(is_too_wide);
        let negative = -(BigInt::from(n) + 1u32);
        prop_assert_eq!(from_big_integer(&negative), Err(ConversionError::Negative));
        prop_assert_eq!(from_big_integer64(&negative), Err(ConversionError::Negative));
    }
}

// ============================================================================
// 64-bit view
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_add64_sub64(x in nat64(), y in nat64()) {
        let mut z = create64();
        let c = add64(&x, &y, &mut z);
        prop_assert_eq!(big64(&z) + BigInt::from(c) * pow2(128), big64(&x) + big64(&y));

        let b = sub64(&x, &y, &mut z);
        prop_assert!(b == 0 || b == -1);
        prop_assert_eq!(big64(&z) + BigInt::from(b) * pow2(128), big64(&x) - big64(&y));
    }

    #[test]
    fn prop_mul64_square64(x in nat64(), y in nat64()) {
        let mut zz = create_ext64();
        mul64(&x, &y, &mut zz);
        prop_assert_eq!(big64(&zz), big64(&x) * big64(&y));

        let mut sq = create_ext64();
        square64(&x, &mut sq);
        prop_assert_eq!(big64(&sq), big64(&x) * big64(&x));
    }

    #[test]
    fn prop_views_agree(x in nat(), y in nat()) {
        let (x64, y64) = (to_64(&x), to_64(&y));
        prop_assert_eq!(gte64(&x64, &y64), gte(&x, &y));
        prop_assert_eq!(eq64(&x64, &y64), eq(&x, &y));
        prop_assert_eq!(is_zero64(&x64), is_zero(&x));
        prop_assert_eq!(is_one64(&x64), is_one(&x));
        prop_assert_eq!(from_64(&x64), x);
        for bit in [0, 31, 32, 63, 64, 95, 96, 127] {
            prop_assert_eq!(get_bit64(&x64, bit) as u32, get_bit(&x, bit));
        }
    }
}
