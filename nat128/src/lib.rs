//! Fixed-width 128-bit natural number kernel.
//!
//! A 128-bit value is four little-endian `u32` limbs (or two `u64` limbs).
//! Every routine is a free function over caller-owned slices: pass
//! `&buf[off..]` to work on a value embedded in a wider array. Outputs are
//! written in place and the carry or borrow out of the top limb is returned,
//! so wider arithmetic can be chained from 128-bit blocks.
//!
//! Only [`from_big_integer`] and [`from_big_integer64`] can fail. Short
//! slices panic on indexing; other preconditions are `debug_assert!`s.
//!
//! Nothing here is constant-time.

pub mod add;
pub mod compare;
pub mod convert;
pub mod create;
pub mod error;
pub mod limb;
pub mod mul;
pub mod reduce;

pub use add::{
    add, add64, add_both_to, add_to, add_to_each_other, add_to_with_carry, diff, sub, sub64,
    sub_both_from, sub_from,
};
pub use compare::{eq, eq64, get_bit, get_bit64, gte, gte64, is_one, is_one64, is_zero, is_zero64};
pub use convert::{
    from_64, from_big_integer, from_big_integer64, to_64, to_big_integer, to_big_integer64,
};
pub use create::{copy, copy64, create, create64, create_ext, create_ext64, zero, zero64};
pub use error::ConversionError;
pub use limb::{Nat128, Nat128x64, Nat256, Nat256x64};
pub use mul::{mul, mul64, mul_add_to, square, square64};
pub use reduce::{
    mul33_add, mul33_dword_add, mul33_word_add, mul_word, mul_word_add_ext, mul_word_dword_add,
    mul_words_add,
};
