use core::mem;

use crate::{mpint_internals::IntError, Int};

/// # Modular arithmetic
///
/// Each combinator performs the named operation and then reduces into the
/// canonical residue range of the modulus: `[0, m)` for positive `m` and
/// `(m, 0]` for negative `m`.
impl Int {
    /// Reduce-assigns `self` modulo `div` into the canonical residue range.
    /// Fails with [IntError::DivisionByZero] if `div` is zero.
    pub fn mod_floor_(&mut self, div: &Self) -> Result<(), IntError> {
        let mut r = Int::new();
        Self::divide(None, Some(&mut r), self, div)?;
        if r.used != 0 && r.sign != div.sign {
            r.add_(div)?;
        }
        mem::swap(self, &mut r);
        Ok(())
    }

    /// `self <- (self + rhs) mod m`
    pub fn add_mod_(&mut self, rhs: &Self, m: &Self) -> Result<(), IntError> {
        self.add_(rhs)?;
        self.mod_floor_(m)
    }

    /// `self <- (self - rhs) mod m`
    pub fn sub_mod_(&mut self, rhs: &Self, m: &Self) -> Result<(), IntError> {
        self.sub_(rhs)?;
        self.mod_floor_(m)
    }

    /// `self <- (self * rhs) mod m`
    pub fn mul_mod_(&mut self, rhs: &Self, m: &Self) -> Result<(), IntError> {
        self.mul_(rhs)?;
        self.mod_floor_(m)
    }

    /// `self <- self² mod m`
    pub fn sqr_mod_(&mut self, m: &Self) -> Result<(), IntError> {
        self.sqr_()?;
        self.mod_floor_(m)
    }
}
