use crate::{mpint_internals::*, Int};

/// # Shifts
///
/// All shifts act on the magnitude and preserve the sign, apart from the
/// clamp forcing nonnegative zero when a right shift collapses the value.
impl Int {
    /// Shift-left-assigns by one bit
    pub fn shl1_(&mut self) -> Result<(), IntError> {
        if self.used == 0 {
            return Ok(())
        }
        let old_used = self.used;
        self.grow(old_used + 1)?;
        let mut carry: Digit = 0;
        {
            let dp = self.dp_mut();
            for i in 0..old_used {
                let tmp = (dp[i] << 1) | carry;
                carry = tmp >> DIGIT_BITS;
                dp[i] = tmp & MASK;
            }
            dp[old_used] = carry;
        }
        self.used = old_used + 1;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Shift-right-assigns by one bit, truncating the magnitude
    pub fn shr1_(&mut self) {
        let old_used = self.used;
        let mut carry: Digit = 0;
        {
            let dp = self.dp_mut();
            for i in (0..old_used).rev() {
                let tmp = dp[i];
                dp[i] = (tmp >> 1) | (carry << (DIGIT_BITS - 1));
                carry = tmp & 1;
            }
        }
        self.zero_unused(old_used);
        self.clamp();
    }

    /// Shift-left-assigns by `n` whole digits
    pub(crate) fn shl_digits_(&mut self, n: usize) -> Result<(), IntError> {
        if n == 0 || self.used == 0 {
            return Ok(())
        }
        let old_used = self.used;
        self.grow(old_used + n)?;
        {
            let dp = self.dp_mut();
            for i in (0..old_used).rev() {
                dp[i + n] = dp[i];
            }
            dp[..n].fill(0);
        }
        self.used = old_used + n;
        self.clamp();
        Ok(())
    }

    /// Shift-right-assigns by `n` whole digits
    pub(crate) fn shr_digits_(&mut self, n: usize) {
        if n == 0 {
            return
        }
        if n >= self.used {
            self.zero_();
            return
        }
        let old_used = self.used;
        {
            let dp = self.dp_mut();
            for i in 0..(old_used - n) {
                dp[i] = dp[i + n];
            }
        }
        self.used = old_used - n;
        self.zero_unused(old_used);
        self.clamp();
    }

    /// Shift-left-assigns by `bits`
    pub fn shl_(&mut self, bits: usize) -> Result<(), IntError> {
        if bits == 0 || self.used == 0 {
            return Ok(())
        }
        self.shl_digits_(bits / DIGIT_BITS)?;
        let b = bits % DIGIT_BITS;
        if b > 0 {
            let old_used = self.used;
            self.grow(old_used + 1)?;
            let shift = DIGIT_BITS - b;
            let mut carry: Digit = 0;
            {
                let dp = self.dp_mut();
                for i in 0..old_used {
                    let tmp = dp[i];
                    // the wrapping shift only discards bits above the
                    // storage word, all of which `carry` already holds
                    dp[i] = (tmp.wrapping_shl(b as u32) | carry) & MASK;
                    carry = tmp >> shift;
                }
                dp[old_used] = carry;
            }
            self.used = old_used + 1;
            self.clamp();
        }
        Ok(())
    }

    /// Shift-right-assigns by `bits`, truncating the magnitude
    pub fn shr_(&mut self, bits: usize) {
        if bits == 0 || self.used == 0 {
            return
        }
        self.shr_digits_(bits / DIGIT_BITS);
        let b = bits % DIGIT_BITS;
        if b > 0 && self.used > 0 {
            let old_used = self.used;
            let low_mask: Digit = (1 << b) - 1;
            let shift = DIGIT_BITS - b;
            let mut carry: Digit = 0;
            {
                let dp = self.dp_mut();
                for i in (0..old_used).rev() {
                    let tmp = dp[i] & low_mask;
                    dp[i] = (dp[i] >> b) | (carry << shift);
                    carry = tmp;
                }
            }
            self.zero_unused(old_used);
            self.clamp();
        }
    }
}
