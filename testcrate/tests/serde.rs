use mpint::{Int, MASK};
use testcrate::{check_canonical, eq, from_decimal};

#[test]
fn serde() {
    let x = Int::from_i128(-5).unwrap();
    assert_eq!(ron::to_string(&x).unwrap(), "(neg:true,digits:[5])");
    let y: Int = ron::from_str("(neg:true,digits:[5])").unwrap();
    assert_eq!(x, y);

    let z = Int::new();
    assert_eq!(ron::to_string(&z).unwrap(), "(neg:false,digits:[])");

    // a negative zero and leading zeros normalize away
    let n: Int = ron::from_str("(neg:true,digits:[0])").unwrap();
    check_canonical(&n);
    assert!(n.is_zero());
    assert!(!n.is_neg());

    // digits above the payload mask are rejected
    let bad = format!("(neg:false,digits:[{}])", (MASK as u128) + 1);
    assert!(ron::from_str::<Int>(&bad).is_err());

    // round trip of a wide value
    let w = from_decimal("-123456789123456789123456789123456789");
    let s = ron::to_string(&w).unwrap();
    let w2: Int = ron::from_str(&s).unwrap();
    eq(&w, &w2);
}
