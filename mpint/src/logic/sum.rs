use core::cmp::Ordering;

use crate::{mpint_internals::*, Int, Sign};

/// # Summation
///
/// The unsigned kernels here operate on magnitudes only and leave sign
/// bookkeeping to the signed dispatch functions. The destination of every
/// loop is also its left operand, so each slot is read before it is
/// overwritten.
impl Int {
    /// `self <- |self| + |rhs|`
    pub(crate) fn uadd_(&mut self, rhs: &Self) -> Result<(), IntError> {
        let old_used = self.used;
        let min_used = self.used.min(rhs.used);
        let max_used = self.used.max(rhs.used);
        self.grow(max_used + 1)?;
        let mut carry: Digit = 0;
        {
            let dp = self.dp_mut();
            let rp = rhs.dp();
            for i in 0..min_used {
                let tmp = dp[i] + rp[i] + carry;
                dp[i] = tmp & MASK;
                carry = tmp >> DIGIT_BITS;
            }
            // propagate over the tail of the longer operand
            if old_used < rhs.used {
                for i in min_used..max_used {
                    let tmp = rp[i] + carry;
                    dp[i] = tmp & MASK;
                    carry = tmp >> DIGIT_BITS;
                }
            } else {
                for i in min_used..max_used {
                    let tmp = dp[i] + carry;
                    dp[i] = tmp & MASK;
                    carry = tmp >> DIGIT_BITS;
                }
            }
            dp[max_used] = carry;
        }
        self.used = max_used + 1;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// `self <- |self| - |rhs|`, requiring `|self| >= |rhs|`
    pub(crate) fn usub_(&mut self, rhs: &Self) {
        debug_assert!(self.cmp_mag(rhs) != Ordering::Less);
        let old_used = self.used;
        let mut borrow: Digit = 0;
        {
            let dp = self.dp_mut();
            let rp = rhs.dp();
            for i in 0..rhs.used {
                let tmp = dp[i].wrapping_sub(rp[i]).wrapping_sub(borrow);
                // the borrow is the sign bit of the raw difference
                borrow = tmp >> (DIGIT_STORAGE_BITS - 1);
                dp[i] = tmp & MASK;
            }
            for i in rhs.used..old_used {
                let tmp = dp[i].wrapping_sub(borrow);
                borrow = tmp >> (DIGIT_STORAGE_BITS - 1);
                dp[i] = tmp & MASK;
            }
        }
        self.zero_unused(old_used);
        self.clamp();
    }

    /// `self <- |rhs| - |self|`, requiring `|rhs| >= |self|`
    pub(crate) fn ursb_(&mut self, rhs: &Self) -> Result<(), IntError> {
        debug_assert!(rhs.cmp_mag(self) != Ordering::Less);
        self.grow(rhs.used)?;
        let old_used = self.used;
        let mut borrow: Digit = 0;
        {
            let dp = self.dp_mut();
            let rp = rhs.dp();
            for i in 0..old_used {
                let tmp = rp[i].wrapping_sub(dp[i]).wrapping_sub(borrow);
                borrow = tmp >> (DIGIT_STORAGE_BITS - 1);
                dp[i] = tmp & MASK;
            }
            for i in old_used..rhs.used {
                let tmp = rp[i].wrapping_sub(borrow);
                borrow = tmp >> (DIGIT_STORAGE_BITS - 1);
                dp[i] = tmp & MASK;
            }
        }
        self.used = rhs.used;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Negate-assigns `self`; zero stays nonnegative
    pub fn neg_(&mut self) {
        if self.used > 0 {
            self.sign = self.sign.flip();
        }
    }

    /// Absolute-value-assigns `self`
    pub fn abs_(&mut self) {
        self.sign = Sign::Pos;
    }

    /// Add-assigns `rhs` to `self`
    pub fn add_(&mut self, rhs: &Self) -> Result<(), IntError> {
        if self.sign == rhs.sign {
            return self.uadd_(rhs)
        }
        // opposite signs: the larger magnitude decides the result sign
        match self.cmp_mag(rhs) {
            Ordering::Less => {
                let sign = rhs.sign;
                self.ursb_(rhs)?;
                self.sign = sign;
            }
            _ => self.usub_(rhs),
        }
        Ok(())
    }

    /// Subtract-assigns `rhs` from `self`
    pub fn sub_(&mut self, rhs: &Self) -> Result<(), IntError> {
        if self.sign != rhs.sign {
            return self.uadd_(rhs)
        }
        match self.cmp_mag(rhs) {
            Ordering::Less => {
                let sign = self.sign.flip();
                self.ursb_(rhs)?;
                self.sign = sign;
            }
            _ => self.usub_(rhs),
        }
        Ok(())
    }

    /// Carry chain of a single digit into the magnitude. `used` is bumped
    /// unconditionally for a potential carry-out; the clamp restores it.
    fn uadd_digit(&mut self, d: Digit) -> Result<(), IntError> {
        let old_used = self.used;
        self.grow(old_used + 1)?;
        let mut carry = d;
        {
            let dp = self.dp_mut();
            for i in 0..old_used {
                if carry == 0 {
                    break
                }
                let tmp = dp[i] + carry;
                dp[i] = tmp & MASK;
                carry = tmp >> DIGIT_BITS;
            }
            dp[old_used] = carry;
        }
        self.used = old_used + 1;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Borrow chain of a single digit out of the magnitude, requiring the
    /// magnitude to be at least `d`
    fn usub_digit(&mut self, d: Digit) {
        debug_assert!(self.used > 1 || self.dp()[0] >= d);
        let old_used = self.used;
        let mut borrow = d;
        {
            let dp = self.dp_mut();
            for i in 0..old_used {
                if borrow == 0 {
                    break
                }
                let tmp = dp[i].wrapping_sub(borrow);
                borrow = tmp >> (DIGIT_STORAGE_BITS - 1);
                dp[i] = tmp & MASK;
            }
        }
        self.zero_unused(old_used);
        self.clamp();
    }

    /// Add-assigns the single digit `d`. Fails with
    /// [IntError::InvalidArgument] if `d` exceeds [MASK].
    pub fn add_digit_(&mut self, d: Digit) -> Result<(), IntError> {
        if d > MASK {
            return Err(IntError::InvalidArgument)
        }
        if d == 0 {
            return Ok(())
        }
        if !self.is_neg() {
            return self.uadd_digit(d)
        }
        // negative: |self| shrinks toward zero or flips past it
        if self.used > 1 || self.dp()[0] >= d {
            self.usub_digit(d);
        } else {
            let tmp = d - self.dp()[0];
            self.dp_mut()[0] = tmp;
            self.used = 1;
            self.sign = Sign::Pos;
            self.clamp();
        }
        Ok(())
    }

    /// Subtract-assigns the single digit `d`. Fails with
    /// [IntError::InvalidArgument] if `d` exceeds [MASK].
    pub fn sub_digit_(&mut self, d: Digit) -> Result<(), IntError> {
        if d > MASK {
            return Err(IntError::InvalidArgument)
        }
        if d == 0 {
            return Ok(())
        }
        if self.is_neg() {
            return self.uadd_digit(d)
        }
        if self.used == 0 {
            self.grow(1)?;
            self.dp_mut()[0] = d;
            self.used = 1;
            self.sign = Sign::Neg;
        } else if self.used > 1 || self.dp()[0] >= d {
            self.usub_digit(d);
        } else {
            let tmp = d - self.dp()[0];
            self.dp_mut()[0] = tmp;
            self.used = 1;
            self.sign = Sign::Neg;
        }
        Ok(())
    }
}
