use core::mem;

use crate::{mpint_internals::*, Int, Sign};

/// # Multiplication
impl Int {
    /// Multiply-assigns by the single digit `d`, with shift fast paths for
    /// powers of two. Fails with [IntError::InvalidArgument] if `d` exceeds
    /// [MASK].
    pub fn short_mul_(&mut self, d: Digit) -> Result<(), IntError> {
        if d > MASK {
            return Err(IntError::InvalidArgument)
        }
        match d {
            0 => {
                self.zero_();
                return Ok(())
            }
            1 => return Ok(()),
            2 => return self.shl1_(),
            _ if d.is_power_of_two() => return self.shl_(d.trailing_zeros() as usize),
            _ => (),
        }
        if self.used == 0 {
            return Ok(())
        }
        let old_used = self.used;
        self.grow(old_used + 1)?;
        let mut carry: Word = 0;
        {
            let dp = self.dp_mut();
            for i in 0..old_used {
                let (lo, hi) = widen_mul_add(dp[i], d, carry);
                dp[i] = lo;
                carry = hi;
            }
            dp[old_used] = carry as Digit;
        }
        self.used = old_used + 1;
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Multiply-assigns by `rhs`, choosing Comba when the operands fit its
    /// carry bounds and schoolbook otherwise. To square `self` use
    /// [Int::sqr_], which is the path that supports the destination being
    /// both operands.
    pub fn mul_(&mut self, rhs: &Self) -> Result<(), IntError> {
        if self.used == 0 || rhs.used == 0 {
            self.zero_();
            return Ok(())
        }
        let neg = self.sign != rhs.sign;
        let digs = self.used + rhs.used + 1;
        if digs < WARRAY && self.used.min(rhs.used) <= MAX_COMBA {
            self.mul_comba_(rhs, digs)?;
        } else {
            self.mul_schoolbook_(rhs)?;
        }
        self.sign = if neg && self.used > 0 { Sign::Neg } else { Sign::Pos };
        Ok(())
    }

    /// Column accumulation into a fixed buffer, flushing one digit per
    /// column. The `WARRAY`/`MAX_COMBA` bounds checked by the caller keep
    /// the delayed carry within the accumulator word.
    fn mul_comba_(&mut self, rhs: &Self, digs: usize) -> Result<(), IntError> {
        let mut w = [0 as Digit; WARRAY];
        let pa = digs.min(self.used + rhs.used);
        let mut acc: Word = 0;
        {
            let ap = self.dp();
            let bp = rhs.dp();
            for ix in 0..pa {
                // column `ix` sums the products a[tx+iz]*b[ty-iz]
                let ty = (rhs.used - 1).min(ix);
                let tx = ix - ty;
                let iy = (self.used - tx).min(ty + 1);
                for iz in 0..iy {
                    acc += (ap[tx + iz] as Word) * (bp[ty - iz] as Word);
                }
                w[ix] = (acc & WORD_MASK) as Digit;
                acc >>= DIGIT_BITS;
            }
        }
        let old_used = self.used;
        self.grow(pa)?;
        self.used = pa;
        self.dp_mut()[..pa].copy_from_slice(&w[..pa]);
        self.zero_unused(old_used);
        self.clamp();
        Ok(())
    }

    /// Schoolbook rows into an owned scratch, avoiding alias hazards with
    /// the destination
    fn mul_schoolbook_(&mut self, rhs: &Self) -> Result<(), IntError> {
        let digs = self.used + rhs.used + 1;
        let mut t = Int::with_capacity(digs)?;
        t.used = digs;
        {
            let tp = t.dp_mut();
            let ap = self.dp();
            let bp = rhs.dp();
            for ix in 0..self.used {
                let mut carry: Word = 0;
                let pb = rhs.used.min(digs - ix);
                for iy in 0..pb {
                    let tmp = (tp[ix + iy] as Word) + (ap[ix] as Word) * (bp[iy] as Word) + carry;
                    tp[ix + iy] = (tmp & WORD_MASK) as Digit;
                    carry = tmp >> DIGIT_BITS;
                }
                if ix + pb < digs {
                    tp[ix + pb] = carry as Digit;
                }
            }
        }
        Int::clamp(&mut t);
        mem::swap(self, &mut t);
        Ok(())
    }

    /// Square-assigns `self`. Off-diagonal products are doubled and diagonal
    /// squares added once, with the carry held in the accumulator word.
    pub fn sqr_(&mut self) -> Result<(), IntError> {
        if self.used == 0 {
            return Ok(())
        }
        let pa = self.used;
        let mut t = Int::with_capacity(2 * pa + 1)?;
        t.used = 2 * pa + 1;
        {
            let tp = t.dp_mut();
            let ap = self.dp();
            for ix in 0..pa {
                // diagonal square, added once
                let tmp = (tp[2 * ix] as Word) + (ap[ix] as Word) * (ap[ix] as Word);
                tp[2 * ix] = (tmp & WORD_MASK) as Digit;
                let mut carry = tmp >> DIGIT_BITS;
                let mut iy = ix + 1;
                while iy < pa {
                    // doubled off-diagonal product
                    let prod = (ap[ix] as Word) * (ap[iy] as Word);
                    let tmp = (tp[ix + iy] as Word) + (prod << 1) + carry;
                    tp[ix + iy] = (tmp & WORD_MASK) as Digit;
                    carry = tmp >> DIGIT_BITS;
                    iy += 1;
                }
                while carry != 0 {
                    let tmp = (tp[ix + iy] as Word) + carry;
                    tp[ix + iy] = (tmp & WORD_MASK) as Digit;
                    carry = tmp >> DIGIT_BITS;
                    iy += 1;
                }
            }
        }
        Int::clamp(&mut t);
        mem::swap(self, &mut t);
        self.sign = Sign::Pos;
        Ok(())
    }
}
