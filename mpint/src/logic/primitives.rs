use crate::{mpint_internals::*, Int, Sign};

/// # Primitive conversion
impl Int {
    /// Assigns the unsigned value `v`
    pub fn set_u128_(&mut self, v: u128) -> Result<(), IntError> {
        self.grow(128 / DIGIT_BITS + 1)?;
        let old_used = self.used;
        self.sign = Sign::Pos;
        let mut v = v;
        let mut used = 0;
        {
            let dp = self.dp_mut();
            while v != 0 {
                dp[used] = (v as Digit) & MASK;
                v >>= DIGIT_BITS;
                used += 1;
            }
        }
        self.used = used;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Assigns the signed value `v`
    pub fn set_i128_(&mut self, v: i128) -> Result<(), IntError> {
        self.set_u128_(v.unsigned_abs())?;
        if v < 0 && self.used > 0 {
            self.sign = Sign::Neg;
        }
        Ok(())
    }

    /// Constructs from an unsigned value
    pub fn from_u128(v: u128) -> Result<Self, IntError> {
        let mut res = Int::new();
        res.set_u128_(v)?;
        Ok(res)
    }

    /// Constructs from a signed value
    pub fn from_i128(v: i128) -> Result<Self, IntError> {
        let mut res = Int::new();
        res.set_i128_(v)?;
        Ok(res)
    }

    /// Constructs from little-endian magnitude digits and a sign. Leading
    /// zero digits are clamped away, and a zero magnitude is canonically
    /// nonnegative regardless of `sign`. Fails with
    /// [IntError::InvalidInput] if any digit exceeds [MASK].
    pub fn from_le_digits(digits: &[Digit], sign: Sign) -> Result<Self, IntError> {
        for &d in digits {
            if d > MASK {
                return Err(IntError::InvalidInput)
            }
        }
        let mut res = Int::with_capacity(digits.len())?;
        res.dp_mut()[..digits.len()].copy_from_slice(digits);
        res.used = digits.len();
        Int::clamp(&mut res);
        if res.used > 0 {
            res.sign = sign;
        }
        Ok(res)
    }

    /// The value as a `u128`, or `None` if `self` is negative or does not
    /// fit
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.is_neg() {
            return None
        }
        let mut v: u128 = 0;
        for i in (0..self.used).rev() {
            if (v >> (128 - DIGIT_BITS)) != 0 {
                return None
            }
            v = (v << DIGIT_BITS) | (self.dp()[i] as u128);
        }
        Some(v)
    }

    /// Number of significant bits in the magnitude; zero for zero
    #[must_use]
    pub fn bit_count(&self) -> usize {
        if self.used == 0 {
            return 0
        }
        (self.used - 1) * DIGIT_BITS + digit_bit_len(self.dp()[self.used - 1])
    }
}
