use core::mem;

use crate::{mpint_internals::*, Int};

/// `n!` for every `n` whose factorial fits in a `u128`
const FACTORIAL_TABLE: [u128; 35] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
    51090942171709440000,
    1124000727777607680000,
    25852016738884976640000,
    620448401733239439360000,
    15511210043330985984000000,
    403291461126605635584000000,
    10888869450418352160768000000,
    304888344611713860501504000000,
    8841761993739701954543616000000,
    265252859812191058636308480000000,
    8222838654177922817725562880000000,
    263130836933693530167218012160000000,
    8683317618811886495518194401280000000,
    295232799039604140847618609643520000000,
];

#[test]
fn factorial_table() {
    let mut acc: u128 = 1;
    for (n, entry) in FACTORIAL_TABLE.iter().enumerate() {
        if n > 0 {
            acc = acc.checked_mul(n as u128).unwrap();
        }
        assert_eq!(acc, *entry);
    }
}

/// # Factorial
impl Int {
    /// Factorial-assigns `n!` to `self`. Small `n` is served from a table,
    /// larger `n` by a binary-split recurrence over odd-integer products.
    /// Fails with [IntError::MaxIterationsReached] if the split recursion
    /// exceeds [FACTORIAL_BINARY_SPLIT_MAX_RECURSIONS].
    pub fn factorial_(&mut self, n: usize) -> Result<(), IntError> {
        if n < FACTORIAL_TABLE.len() {
            return self.set_u128_(FACTORIAL_TABLE[n])
        }
        self.factorial_binary_split(n)
    }

    /// Luschny's recurrence: level `i` contributes the product of the odd
    /// integers in `(n >> (i+1), n >> i]`; the `inner` accumulator carries
    /// each level's product into every lower level through `outer`, and the
    /// stripped power-of-two factor is restored by the final shift.
    fn factorial_binary_split(&mut self, n: usize) -> Result<(), IntError> {
        let mut inner = Int::from_u128(1)?;
        let mut outer = Int::from_u128(1)?;
        let mut level = Int::new();
        let log2_n = ((usize::BITS - 1) as usize) - (n.leading_zeros() as usize);
        for i in (0..=log2_n).rev() {
            let start = ((n >> (i + 1)) + 1) | 1;
            let stop = ((n >> i) + 1) | 1;
            Self::recursive_product(&mut level, start, stop, 0)?;
            inner.mul_(&level)?;
            outer.mul_(&inner)?;
        }
        outer.shl_(n - (n.count_ones() as usize))?;
        mem::swap(self, &mut outer);
        Ok(())
    }

    /// Balanced product of the odd integers in `[start, stop)`, both ends
    /// odd
    fn recursive_product(
        res: &mut Int,
        start: usize,
        stop: usize,
        level: usize,
    ) -> Result<(), IntError> {
        if level > FACTORIAL_BINARY_SPLIT_MAX_RECURSIONS {
            return Err(IntError::MaxIterationsReached)
        }
        let num_factors = (stop - start) >> 1;
        match num_factors {
            0 => res.set_u128_(1),
            1 => res.set_u128_(start as u128),
            2 => res.set_u128_((start as u128) * ((start as u128) + 2)),
            _ => {
                let mid = (start + num_factors) | 1;
                let mut rhs = Int::new();
                Self::recursive_product(res, start, mid, level + 1)?;
                Self::recursive_product(&mut rhs, mid, stop, level + 1)?;
                res.mul_(&rhs)
            }
        }
    }
}
