use mpint::{Int, IntError, Sign, DIGIT_BITS, MASK};
use testcrate::*;

#[test]
fn carry_across_digits() {
    // 2^60 - 1 plus 1 carries into a fresh digit
    let mut x = from_decimal("1152921504606846975");
    x.add_digit_(1).unwrap();
    check_canonical(&x);
    assert_eq!(to_decimal(&x), "1152921504606846976");
    assert_eq!(x.used(), 60 / DIGIT_BITS + 1);
}

#[test]
fn zero_minus_one() {
    let mut x = Int::new();
    let one = Int::from_u128(1).unwrap();
    x.sub_(&one).unwrap();
    check_canonical(&x);
    assert_eq!(x.sign(), Sign::Neg);
    assert_eq!(x.used(), 1);
    assert_eq!(x.as_le_digits()[0], 1);
}

#[test]
fn mul_known_product() {
    let a = from_decimal("12345678901234567890");
    let b = from_decimal("98765432109876543210");
    let mut p = a.clone();
    p.mul_(&b).unwrap();
    check_canonical(&p);
    assert_eq!(to_decimal(&p), "1219326311370217952237463801111263526900");
    let mut p2 = b.clone();
    p2.mul_(&a).unwrap();
    eq(&p, &p2);
}

#[test]
fn divide_known_quotient() {
    let n = from_decimal("1000000000000000000000");
    let d = Int::from_u128(7).unwrap();
    let mut q = Int::new();
    let mut r = Int::new();
    Int::divide(Some(&mut q), Some(&mut r), &n, &d).unwrap();
    check_canonical(&q);
    check_canonical(&r);
    assert_eq!(to_decimal(&q), "142857142857142857142");
    assert_eq!(r.to_u128(), Some(6));
    // the single-digit path must agree
    let mut q2 = Int::new();
    let rem = Int::short_divide(Some(&mut q2), &n, 7).unwrap();
    eq(&q, &q2);
    assert_eq!(rem, 6);
    // and so must division by three
    let mut q3 = Int::new();
    let rem3 = Int::short_divide(Some(&mut q3), &n, 3).unwrap();
    assert_eq!(to_decimal(&q3), "333333333333333333333");
    assert_eq!(rem3, 1);
}

#[test]
fn canonical_residues() {
    let mut x = Int::from_i128(-5).unwrap();
    let m = Int::from_u128(3).unwrap();
    x.mod_floor_(&m).unwrap();
    check_canonical(&x);
    assert_eq!(x.to_u128(), Some(1));

    // negative modulus mirrors the range
    let mut y = Int::from_i128(5).unwrap();
    let mneg = Int::from_i128(-3).unwrap();
    y.mod_floor_(&mneg).unwrap();
    check_canonical(&y);
    assert_eq!(to_i128(&y), -1);

    // already-canonical residues pass through
    let mut z = Int::from_u128(2).unwrap();
    z.mod_floor_(&m).unwrap();
    assert_eq!(z.to_u128(), Some(2));
}

#[test]
fn factorials() {
    let mut f25 = Int::new();
    f25.factorial_(25).unwrap();
    check_canonical(&f25);
    assert_eq!(to_decimal(&f25), "15511210043330985984000000");

    // first value past the table exercises the binary split
    let mut f35 = Int::new();
    f35.factorial_(35).unwrap();
    check_canonical(&f35);
    assert_eq!(to_decimal(&f35), "10333147966386144929666651337523200000000");

    let mut f40 = Int::new();
    f40.factorial_(40).unwrap();
    assert_eq!(
        to_decimal(&f40),
        "815915283247897734345611269596115894272000000000"
    );
    // and the split agrees with the recurrence n! = (n-1)! * n
    let mut f39 = Int::new();
    f39.factorial_(39).unwrap();
    f39.short_mul_(40).unwrap();
    eq(&f39, &f40);
}

#[test]
fn add_digit_fast_path() {
    // the fast path bumps `used` unconditionally and relies on the clamp
    let mut x = Int::from_u128(5).unwrap();
    x.add_digit_(1).unwrap();
    check_canonical(&x);
    assert_eq!(x.used(), 1);
    assert_eq!(x.to_u128(), Some(6));

    // full carry chain across several digits
    let mut y = Int::from_le_digits(&[MASK, MASK, MASK], Sign::Pos).unwrap();
    y.add_digit_(1).unwrap();
    check_canonical(&y);
    assert_eq!(y.used(), 4);
    assert_eq!(y.as_le_digits()[0], 0);
    assert_eq!(y.as_le_digits()[3], 1);

    // negative operands route through the magnitude
    let mut z = Int::from_i128(-1).unwrap();
    z.add_digit_(3).unwrap();
    check_canonical(&z);
    assert_eq!(z.to_u128(), Some(2));
    let mut w = Int::from_i128(-7).unwrap();
    w.add_digit_(3).unwrap();
    assert_eq!(to_i128(&w), -4);
    let mut v = Int::from_i128(-3).unwrap();
    v.add_digit_(3).unwrap();
    assert!(v.is_zero());
    check_canonical(&v);

    // subtraction crossing zero
    let mut u = Int::from_u128(2).unwrap();
    u.sub_digit_(5).unwrap();
    assert_eq!(to_i128(&u), -3);
    let mut t = Int::new();
    t.sub_digit_(4).unwrap();
    assert_eq!(to_i128(&t), -4);
}

#[test]
fn shifts() {
    let mut x = Int::from_u128(1).unwrap();
    x.shl_(3 * DIGIT_BITS + 5).unwrap();
    check_canonical(&x);
    assert_eq!(x.used(), 4);
    assert_eq!(x.bit_count(), 3 * DIGIT_BITS + 6);
    x.shr_(3 * DIGIT_BITS + 5);
    assert_eq!(x.to_u128(), Some(1));

    // shifting everything out collapses to canonical zero
    let mut y = Int::from_i128(-123).unwrap();
    y.shr_(200);
    check_canonical(&y);
    assert!(y.is_zero());

    let mut z = Int::from_i128(-1).unwrap();
    z.shr1_();
    check_canonical(&z);
    assert!(z.is_zero());

    let mut a = from_decimal("987654321987654321987654321");
    let mut b = a.clone();
    a.shl1_().unwrap();
    b.short_mul_(2).unwrap();
    eq(&a, &b);
    a.shr1_();
    assert_eq!(to_decimal(&a), "987654321987654321987654321");
}

#[test]
fn errors() {
    let x = Int::from_u128(42).unwrap();
    let zero = Int::new();
    assert_eq!(
        Int::divide(None, None, &x, &zero),
        Err(IntError::DivisionByZero)
    );
    assert_eq!(Int::short_divide(None, &x, 0), Err(IntError::DivisionByZero));
    assert_eq!(
        Int::short_divide(None, &x, MASK + 1),
        Err(IntError::InvalidArgument)
    );
    let mut y = x.clone();
    assert_eq!(y.add_digit_(MASK + 1), Err(IntError::InvalidArgument));
    assert_eq!(y.sub_digit_(MASK + 1), Err(IntError::InvalidArgument));
    assert_eq!(y.short_mul_(MASK + 1), Err(IntError::InvalidArgument));
    assert_eq!(y.mod_floor_(&zero), Err(IntError::DivisionByZero));
    assert_eq!(
        Int::from_le_digits(&[MASK + 1], Sign::Pos),
        Err(IntError::InvalidInput)
    );
    // failed operations leave the destination untouched here
    assert_eq!(y.to_u128(), Some(42));
}

#[test]
fn ordering() {
    let vals = [
        "-100000000000000000000000",
        "-5",
        "0",
        "3",
        "99999999999999999999",
    ];
    for (i, a) in vals.iter().enumerate() {
        for (j, b) in vals.iter().enumerate() {
            let x = from_decimal(a);
            let y = from_decimal(b);
            assert_eq!(x.cmp(&y), i.cmp(&j), "{a} vs {b}");
        }
    }
}

#[test]
fn copy_and_grow() {
    // copying a short value over a long one must scrub the stale digits
    let big = from_decimal("340282366920938463463374607431768211455");
    let mut dst = big.clone();
    let small = Int::from_u128(7).unwrap();
    dst.copy_(&small).unwrap();
    check_canonical(&dst);
    assert_eq!(dst.to_u128(), Some(7));
    assert!(dst.capacity() >= big.used());

    let mut x = Int::with_capacity(100).unwrap();
    assert!(x.capacity() >= 100);
    assert!(x.is_zero());
    x.grow(5).unwrap();
    assert!(x.capacity() >= 100);

    let mut w = Int::from_u128(u128::MAX).unwrap();
    assert_eq!(w.to_u128(), Some(u128::MAX));
    w.add_digit_(1).unwrap();
    assert_eq!(w.to_u128(), None);
    assert_eq!(Int::from_i128(-1).unwrap().to_u128(), None);
}

#[test]
fn from_le_digits_normalizes() {
    let x = Int::from_le_digits(&[5, 0, 0], Sign::Neg).unwrap();
    check_canonical(&x);
    assert_eq!(x.used(), 1);
    assert_eq!(to_i128(&x), -5);

    let z = Int::from_le_digits(&[0, 0], Sign::Neg).unwrap();
    check_canonical(&z);
    assert!(z.is_zero());
    assert_eq!(z.sign(), Sign::Pos);
}
