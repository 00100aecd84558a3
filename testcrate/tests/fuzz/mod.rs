use mpint::{Digit, Int, Sign, MASK};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};
use testcrate::check_canonical;

pub fn rand_digit(rng: &mut Xoshiro128StarStar) -> Digit {
    (rng.next_u64() as Digit) & MASK
}

/// Random `Int` with up to `max_digits` digits and a random sign
pub fn rand_int(rng: &mut Xoshiro128StarStar, max_digits: usize) -> Int {
    let digits = (rng.next_u32() as usize) % (max_digits + 1);
    let mut v = Vec::with_capacity(digits);
    for _ in 0..digits {
        v.push(rand_digit(rng));
    }
    let sign = if (rng.next_u32() & 1) == 0 {
        Sign::Pos
    } else {
        Sign::Neg
    };
    let res = Int::from_le_digits(&v, sign).unwrap();
    check_canonical(&res);
    res
}

/// Random `Int` with exactly `digits` digits, the top one nonzero
pub fn rand_int_exact(rng: &mut Xoshiro128StarStar, digits: usize, sign: Sign) -> Int {
    let mut v = Vec::with_capacity(digits);
    for _ in 0..digits {
        v.push(rand_digit(rng));
    }
    if let Some(top) = v.last_mut() {
        *top |= 1;
    }
    let res = Int::from_le_digits(&v, sign).unwrap();
    check_canonical(&res);
    res
}

/// Random signed value with at most `bits` magnitude bits for the `i128`
/// reference model
pub fn rand_i128(rng: &mut Xoshiro128StarStar, bits: u32) -> i128 {
    let mag = (rng.next_u64() as u128) | ((rng.next_u64() as u128) << 64);
    let mag = (mag & ((1u128 << bits) - 1)) as i128;
    if (rng.next_u32() & 1) == 0 {
        mag
    } else {
        -mag
    }
}
