//! Shared helpers for the `mpint` integration tests

use mpint::{Digit, Int, Sign, MASK};

/// Checks the canonical-form invariants and panics on any violation
#[track_caller]
pub fn check_canonical(x: &Int) {
    assert!(x.used() <= x.capacity(), "used beyond capacity");
    let raw = x.raw_digits();
    if x.used() > 0 {
        assert_ne!(raw[x.used() - 1], 0, "leading zero digit");
    }
    for &d in &raw[x.used()..] {
        assert_eq!(d, 0, "dirty slot above used");
    }
    for &d in &raw[..x.used()] {
        assert!(d <= MASK, "digit above payload mask");
    }
    if x.used() == 0 {
        assert_eq!(x.sign(), Sign::Pos, "zero must be nonnegative");
    }
}

/// Checks for equality and that invariants are being kept
#[track_caller]
pub fn eq(lhs: &Int, rhs: &Int) {
    check_canonical(lhs);
    check_canonical(rhs);
    if lhs != rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Parses a decimal string through the single-digit kernel operations
#[track_caller]
pub fn from_decimal(s: &str) -> Int {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    assert!(!digits.is_empty());
    let mut res = Int::new();
    for c in digits.bytes() {
        assert!(c.is_ascii_digit(), "non-decimal character {c}");
        res.short_mul_(10).unwrap();
        res.add_digit_((c - b'0') as Digit).unwrap();
    }
    if neg {
        res.neg_();
    }
    res
}

/// Renders a decimal string through repeated single-digit division
pub fn to_decimal(x: &Int) -> String {
    if x.is_zero() {
        return "0".to_owned()
    }
    let mut mag = x.clone();
    mag.abs_();
    let mut q = Int::new();
    let mut out = Vec::new();
    while !mag.is_zero() {
        let r = Int::short_divide(Some(&mut q), &mag, 10).unwrap();
        out.push(b'0' + (r as u8));
        std::mem::swap(&mut mag, &mut q);
    }
    if x.is_neg() {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

/// The signed value of `x`, which must fit in an `i128`
#[track_caller]
pub fn to_i128(x: &Int) -> i128 {
    let mut mag = x.clone();
    mag.abs_();
    let mag = mag.to_u128().unwrap();
    if x.is_neg() {
        -(mag as i128)
    } else {
        assert!(mag <= (i128::MAX as u128));
        mag as i128
    }
}

/// Truncating division reference, matching [mpint::Int::divide]
pub fn model_divmod_trunc(n: i128, d: i128) -> (i128, i128) {
    (n / d, n % d)
}

/// Canonical-residue reference, matching [mpint::Int::mod_floor_]
pub fn model_mod_floor(n: i128, d: i128) -> i128 {
    let r = n % d;
    if r != 0 && ((r < 0) != (d < 0)) {
        r + d
    } else {
        r
    }
}
