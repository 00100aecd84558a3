use core::{cmp::Ordering, mem};

use crate::{mpint_internals::*, Int, Sign};

/// # Division
///
/// These operations are not inplace unlike many other functions in this
/// crate, because the dividend is subtracted from in the internal algorithm
/// until it becomes the remainder. We use "quo" for quotient, "rem" for
/// remainder, and "div" for divisor; "duo" names the dividend, since it
/// serves two purposes.
impl Int {
    /// Divides `duo` by `div`, assigning the truncated quotient to `quo` and
    /// the remainder to `rem`; either destination may be omitted. The
    /// remainder keeps the sign of `duo`, the quotient is negative exactly
    /// when the operand signs differ and the quotient is nonzero. Fails with
    /// [IntError::DivisionByZero] if `div` is zero.
    pub fn divide(
        quo: Option<&mut Self>,
        rem: Option<&mut Self>,
        duo: &Self,
        div: &Self,
    ) -> Result<(), IntError> {
        if div.used == 0 {
            return Err(IntError::DivisionByZero)
        }
        if duo.cmp_mag(div) == Ordering::Less {
            if let Some(rem) = rem {
                rem.copy_(duo)?;
            }
            if let Some(quo) = quo {
                quo.zero_();
            }
            return Ok(())
        }
        let neg = duo.sign != div.sign;

        let mut q = Int::with_capacity(duo.used + 2)?;
        q.used = duo.used + 2;
        let mut t1 = Int::with_capacity(3)?;
        let mut t2 = Int::with_capacity(3)?;
        let mut x = Int::new();
        x.copy_(duo)?;
        x.sign = Sign::Pos;
        let mut y = Int::new();
        y.copy_(div)?;
        y.sign = Sign::Pos;

        // normalize so the top bit of `y`'s leading digit is set, which
        // bounds the estimate corrections below to two
        let top_bits = y.bit_count() % DIGIT_BITS;
        let norm = if top_bits == 0 { 0 } else { DIGIT_BITS - top_bits };
        if norm > 0 {
            x.shl_(norm)?;
            y.shl_(norm)?;
        }

        let n = x.used - 1;
        let t = y.used - 1;

        // align `y` with the top of `x` and pre-subtract the leading window
        y.shl_digits_(n - t)?;
        while x.cmp_mag(&y) != Ordering::Less {
            q.dp_mut()[n - t] += 1;
            x.usub_(&y);
        }
        y.shr_digits_(n - t);

        for i in ((t + 1)..=n).rev() {
            if i > x.used {
                continue
            }
            let qidx = (i - t) - 1;
            // estimate one quotient digit from the top two digits of the
            // remainder window and the leading digit of `y`
            let est = if x.dp()[i] == y.dp()[t] {
                MASK
            } else {
                let mut w = ((x.dp()[i] as Word) << DIGIT_BITS) | (x.dp()[i - 1] as Word);
                w /= y.dp()[t] as Word;
                if w > WORD_MASK {
                    w = WORD_MASK
                }
                w as Digit
            };
            let mut qd = (est + 1) & MASK;
            loop {
                qd = qd.wrapping_sub(1) & MASK;
                // left hand: qd * (y[t]*b + y[t-1])
                t1.zero_();
                {
                    let tp = t1.dp_mut();
                    tp[0] = if t < 1 { 0 } else { y.dp()[t - 1] };
                    tp[1] = y.dp()[t];
                }
                t1.used = 2;
                t1.short_mul_(qd)?;
                // right hand: x[i]*b^2 + x[i-1]*b + x[i-2]
                {
                    let tp = t2.dp_mut();
                    tp[0] = if i < 2 { 0 } else { x.dp()[i - 2] };
                    tp[1] = x.dp()[i - 1];
                    tp[2] = x.dp()[i];
                }
                t2.used = 3;
                if t1.cmp_mag(&t2) != Ordering::Greater {
                    break
                }
            }
            // x -= qd * y * b^qidx
            t1.copy_(&y)?;
            t1.short_mul_(qd)?;
            t1.shl_digits_(qidx)?;
            x.sub_(&t1)?;
            // the estimate can still be one high; add back and adjust
            if x.sign == Sign::Neg {
                t1.copy_(&y)?;
                t1.shl_digits_(qidx)?;
                x.add_(&t1)?;
                qd = qd.wrapping_sub(1) & MASK;
            }
            q.dp_mut()[qidx] = qd;
        }

        // `q` is the quotient and `x` the still-normalized remainder
        x.sign = if x.used == 0 { Sign::Pos } else { duo.sign };
        if let Some(quo) = quo {
            Int::clamp(&mut q);
            mem::swap(quo, &mut q);
            quo.sign = if neg && quo.used > 0 { Sign::Neg } else { Sign::Pos };
        }
        if let Some(rem) = rem {
            x.shr_(norm);
            mem::swap(rem, &mut x);
        }
        Ok(())
    }

    /// Divides `duo` by the single digit `d`, assigning the quotient to
    /// `quo` when present and returning the remainder digit. The quotient
    /// keeps `duo`'s sign; the remainder is a magnitude digit. Fails with
    /// [IntError::DivisionByZero] if `d` is zero and with
    /// [IntError::InvalidArgument] if `d` exceeds [MASK].
    pub fn short_divide(quo: Option<&mut Self>, duo: &Self, d: Digit) -> Result<Digit, IntError> {
        if d == 0 {
            return Err(IntError::DivisionByZero)
        }
        if d > MASK {
            return Err(IntError::InvalidArgument)
        }
        if d == 1 || duo.used == 0 {
            if let Some(quo) = quo {
                quo.copy_(duo)?;
            }
            return Ok(0)
        }
        if d == 2 {
            let rem = duo.dp()[0] & 1;
            if let Some(quo) = quo {
                quo.copy_(duo)?;
                quo.shr1_();
            }
            return Ok(rem)
        }
        if d.is_power_of_two() {
            let rem = duo.dp()[0] & (d - 1);
            if let Some(quo) = quo {
                quo.copy_(duo)?;
                quo.shr_(d.trailing_zeros() as usize);
            }
            return Ok(rem)
        }
        if d == 3 {
            return Self::short_divide3(quo, duo)
        }
        let Some(quo) = quo else {
            // remainder-only walk
            let mut w: Word = 0;
            for i in (0..duo.used).rev() {
                w = ((w << DIGIT_BITS) | (duo.dp()[i] as Word)) % (d as Word);
            }
            return Ok(w as Digit)
        };
        let mut q = Int::with_capacity(duo.used)?;
        q.used = duo.used;
        q.sign = duo.sign;
        let mut w: Word = 0;
        {
            let qp = q.dp_mut();
            let np = duo.dp();
            for i in (0..duo.used).rev() {
                w = (w << DIGIT_BITS) | (np[i] as Word);
                let t = if w >= d as Word {
                    let t = w / (d as Word);
                    w -= t * (d as Word);
                    t
                } else {
                    0
                };
                qp[i] = t as Digit;
            }
        }
        Int::clamp(&mut q);
        mem::swap(quo, &mut q);
        Ok(w as Digit)
    }

    /// Division by three via one reciprocal multiply per digit
    fn short_divide3(quo: Option<&mut Self>, duo: &Self) -> Result<Digit, IntError> {
        // floor(b/3) where b is the digit radix
        let b: Word = ((1 as Word) << DIGIT_BITS) / 3;
        let Some(quo) = quo else {
            let mut w: Word = 0;
            for i in (0..duo.used).rev() {
                w = ((w << DIGIT_BITS) | (duo.dp()[i] as Word)) % 3;
            }
            return Ok(w as Digit)
        };
        let mut q = Int::with_capacity(duo.used)?;
        q.used = duo.used;
        q.sign = duo.sign;
        let mut w: Word = 0;
        {
            let qp = q.dp_mut();
            let np = duo.dp();
            for i in (0..duo.used).rev() {
                w = (w << DIGIT_BITS) | (np[i] as Word);
                let mut t: Word = 0;
                if w >= 3 {
                    t = (w * b) >> DIGIT_BITS;
                    w -= (t << 1) + t;
                    // the reciprocal underestimates by at most a few
                    while w >= 3 {
                        t += 1;
                        w -= 3;
                    }
                }
                qp[i] = t as Digit;
            }
        }
        Int::clamp(&mut q);
        mem::swap(quo, &mut q);
        Ok(w as Digit)
    }
}
