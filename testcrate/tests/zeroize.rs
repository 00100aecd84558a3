use mpint::Int;
use testcrate::check_canonical;
use zeroize::Zeroize;

#[test]
fn zeroize() {
    let mut x = Int::from_u128(0xfedc_ba98_7654_3210_u128).unwrap();
    x.zeroize();
    check_canonical(&x);
    assert!(x.is_zero());
    for &d in x.raw_digits() {
        assert_eq!(d, 0);
    }

    let mut y = Int::from_i128(-1).unwrap();
    y.zeroize();
    check_canonical(&y);
    assert!(y.is_zero());
}
