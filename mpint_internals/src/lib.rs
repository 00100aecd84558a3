//! This crate contains common developer utilities for crates within the
//! `mpint` system: the `Digit` and `Word` type selection, the payload-bit
//! constants every kernel loop masks against, the widening helpers, and the
//! shared error enum. Most users should never have to interact with this
//! crate directly; there is a hidden reexport of it for `mpint`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod error;

pub use error::IntError;

// If more than one flag is active it will cause an error because two `Digit`s
// are defined. However, we have this one duplication check in case of trying
// to use `--all-features`.
#[cfg(all(feature = "u32_digits", feature = "u64_digits"))]
compile_error!(
    "Attempted to activate multiple `*_digits` features at the same time. This is likely because \
     `--all-features` was used, which does not work for `mpint`."
);

/// The basic element of the digit vector backing an `Int`. Only the low
/// [DIGIT_BITS] bits carry payload; the bits above them exist so that a
/// transient carry or borrow fits in the same storage word before being
/// masked off.
#[cfg(any(
    feature = "u64_digits",
    not(any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32"))
))]
pub type Digit = u64;
#[cfg(all(
    not(feature = "u64_digits"),
    any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32")
))]
pub type Digit = u32;

/// Unsigned type twice the width of a [Digit], used for intermediate products
/// and delayed carries.
#[cfg(any(
    feature = "u64_digits",
    not(any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32"))
))]
pub type Word = u128;
#[cfg(all(
    not(feature = "u64_digits"),
    any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32")
))]
pub type Word = u64;

/// Number of payload bits in one [Digit]
#[cfg(any(
    feature = "u64_digits",
    not(any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32"))
))]
pub const DIGIT_BITS: usize = 60;
#[cfg(all(
    not(feature = "u64_digits"),
    any(feature = "u32_digits", target_pointer_width = "16", target_pointer_width = "32")
))]
pub const DIGIT_BITS: usize = 28;

/// Storage bitwidth of a [Digit]
pub const DIGIT_STORAGE_BITS: usize = Digit::BITS as usize;

/// Bitwidth of a [Word]
pub const WORD_BITS: usize = Word::BITS as usize;

/// Keeps [Digit] contents within payload range
pub const MASK: Digit = (1 << DIGIT_BITS) - 1;

/// [MASK] widened to a [Word]
pub const WORD_MASK: Word = MASK as Word;

/// Number of column products a `Word` accumulator can absorb before the
/// delayed carry could overflow, which bounds the smaller operand of a Comba
/// multiplication.
pub const MAX_COMBA: usize = 1 << (WORD_BITS - 2 * DIGIT_BITS);

/// Size of the Comba column buffer, bounding the total output digits of a
/// Comba multiplication.
pub const WARRAY: usize = 2 * MAX_COMBA;

/// Minimum digit capacity granted by a growth request; capacities are rounded
/// up to a multiple of this.
pub const DEFAULT_DIGIT_COUNT: usize = 8;

/// Recursion depth bound for the factorial binary-split recurrence
pub const FACTORIAL_BINARY_SPLIT_MAX_RECURSIONS: usize = 100;

/// Computes `(x * y) + acc`. This cannot overflow for payload-range `x` and
/// `y`, because the product of two [MASK]-bounded digits plus a
/// `DIGIT_BITS`-shifted carry always fits in a [Word]. Returns the masked low
/// digit and the carry word.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, acc: Word) -> (Digit, Word) {
    let tmp = (x as Word) * (y as Word) + acc;
    ((tmp & WORD_MASK) as Digit, tmp >> DIGIT_BITS)
}

/// Returns the number of significant bits in `d`, `0` for `d == 0`
#[inline]
pub const fn digit_bit_len(d: Digit) -> usize {
    DIGIT_STORAGE_BITS - (d.leading_zeros() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_model() {
        // the transient carry bits must exist above the payload
        assert!(DIGIT_BITS < DIGIT_STORAGE_BITS);
        assert_eq!(WORD_BITS, 2 * DIGIT_STORAGE_BITS);
        assert_eq!(MASK.count_ones() as usize, DIGIT_BITS);
        // `MAX_COMBA` products of `MASK * MASK` plus a shifted-down carry must
        // stay below `Word::MAX`
        let max_prod = (MASK as Word) * (MASK as Word);
        let bound = (MAX_COMBA as Word) * max_prod;
        assert!(bound.checked_add(bound >> DIGIT_BITS).is_some());
        assert_eq!(WARRAY, 2 * MAX_COMBA);
    }

    #[test]
    fn widening() {
        assert_eq!(widen_mul_add(MASK, MASK, 0).0, 1);
        let (lo, carry) = widen_mul_add(MASK, MASK, MASK as Word);
        assert_eq!(lo, 0);
        assert_eq!(carry, MASK as Word);
        assert_eq!(digit_bit_len(0), 0);
        assert_eq!(digit_bit_len(1), 1);
        assert_eq!(digit_bit_len(MASK), DIGIT_BITS);
    }
}
