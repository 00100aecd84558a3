use alloc::alloc::{alloc_zeroed, dealloc, realloc, Layout};
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem, ptr,
    ptr::NonNull,
    slice,
};

use crate::mpint_internals::*;

/// Sign of an [Int]. Zero is canonically [Sign::Pos].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Sign {
    /// Zero or positive
    #[default]
    Pos,
    /// Negative
    Neg,
}

impl Sign {
    /// The opposite sign
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

/// An arbitrary precision signed integer in sign-magnitude form.
///
/// The magnitude is a little-endian vector of [Digit]s, of which only the
/// first `used` are significant. Every public operation leaves the value in
/// canonical form:
///
/// - `used <= capacity`
/// - the most significant used digit is nonzero
/// - every digit slot at and above `used` is zero
/// - every used digit is at most [MASK]
/// - zero has `used == 0` and [Sign::Pos]
///
/// Operations that can allocate or fail return `Result<_, IntError>`;
/// in-place assign operations carry a trailing `_` in their name and their
/// destination is their own first operand. Single-digit operands must be
/// within payload range (`<= MASK`).
///
/// ```
/// use mpint::Int;
///
/// let mut x = Int::from_u128(12345678901234567890).unwrap();
/// let y = Int::from_u128(98765432109876543210).unwrap();
/// x.mul_(&y).unwrap();
/// let m = Int::from_u128(1 << 61).unwrap();
/// x.mod_floor_(&m).unwrap();
/// assert!(x.to_u128().unwrap() < (1 << 61));
/// ```
pub struct Int {
    /// Dangling when `cap == 0`, otherwise an allocation of exactly `cap`
    /// digits, all slots initialized
    pub(crate) digits: NonNull<Digit>,
    /// Allocated capacity in digits
    pub(crate) cap: usize,
    /// Number of significant digits
    pub(crate) used: usize,
    pub(crate) sign: Sign,
}

/// `Int` is safe to send between threads since it does not own aliasing
/// memory and has no reference counting mechanism like `Rc`.
unsafe impl Send for Int {}

/// `Int` is safe to share between threads since it does not own aliasing
/// memory and has no mutable internal state like `Cell` or `RefCell`.
unsafe impl Sync for Int {}

#[inline]
const fn layout_for(cap: usize) -> Layout {
    // Safety: callers only pass capacities that came from a successful
    // `Layout::array::<Digit>` in `grow`, so size and alignment are valid.
    unsafe { Layout::from_size_align_unchecked(cap * mem::size_of::<Digit>(), mem::align_of::<Digit>()) }
}

impl Int {
    /// Returns a zero-valued `Int` without allocating
    #[inline]
    pub const fn new() -> Self {
        Int {
            digits: NonNull::dangling(),
            cap: 0,
            used: 0,
            sign: Sign::Pos,
        }
    }

    /// Returns a zero-valued `Int` with capacity for at least `digits` digits
    pub fn with_capacity(digits: usize) -> Result<Self, IntError> {
        let mut res = Int::new();
        res.grow(digits)?;
        Ok(res)
    }

    /// The full capacity slice, zeroed at and above `used`
    #[inline]
    pub(crate) fn dp(&self) -> &[Digit] {
        // Safety: `cap == 0` pairs the dangling pointer with a zero length,
        // otherwise the allocation is `cap` initialized digits
        unsafe { slice::from_raw_parts(self.digits.as_ptr(), self.cap) }
    }

    /// Mutable form of [Int::dp]
    #[inline]
    pub(crate) fn dp_mut(&mut self) -> &mut [Digit] {
        // Safety: same as `dp`, and `&mut self` gives exclusive access
        unsafe { slice::from_raw_parts_mut(self.digits.as_ptr(), self.cap) }
    }

    /// Ensures `self.capacity() >= max(digits, DEFAULT_DIGIT_COUNT)`,
    /// zero-filling every newly acquired slot. Existing digits are preserved.
    pub fn grow(&mut self, digits: usize) -> Result<(), IntError> {
        let needed = digits.max(DEFAULT_DIGIT_COUNT);
        if needed <= self.cap {
            return Ok(())
        }
        // round up to the next multiple of `DEFAULT_DIGIT_COUNT`
        let new_cap = match needed.checked_add(DEFAULT_DIGIT_COUNT - 1) {
            Some(x) => (x / DEFAULT_DIGIT_COUNT) * DEFAULT_DIGIT_COUNT,
            None => return Err(IntError::OutOfMemory),
        };
        let new_layout = match Layout::array::<Digit>(new_cap) {
            Ok(layout) => layout,
            Err(_) => return Err(IntError::OutOfMemory),
        };
        unsafe {
            let ptr = if self.cap == 0 {
                alloc_zeroed(new_layout)
            } else {
                realloc(self.digits.as_ptr().cast::<u8>(), layout_for(self.cap), new_layout.size())
            };
            let Some(ptr) = NonNull::new(ptr.cast::<Digit>()) else {
                // the old allocation, if any, is still valid and untouched
                return Err(IntError::OutOfMemory)
            };
            if self.cap != 0 {
                // `realloc` leaves the acquired tail uninitialized
                ptr::write_bytes(ptr.as_ptr().add(self.cap), 0, new_cap - self.cap);
            }
            self.digits = ptr;
            self.cap = new_cap;
        }
        Ok(())
    }

    /// Removes leading zero digits from the significant range and restores
    /// the canonical nonnegative zero. Idempotent.
    pub(crate) fn clamp(&mut self) {
        while self.used > 0 && self.dp()[self.used - 1] == 0 {
            self.used -= 1;
        }
        if self.used == 0 {
            self.sign = Sign::Pos;
        }
    }

    /// Zeroes the digit slots in `[self.used, old_used)` after a mutation
    /// that may have shrunk `used`. Pass the capacity when the prior `used`
    /// is unknown.
    pub(crate) fn zero_unused(&mut self, old_used: usize) {
        let used = self.used;
        let end = old_used.min(self.cap);
        if end > used {
            self.dp_mut()[used..end].fill(0);
        }
    }

    /// Zero-assigns `self`, keeping its capacity
    pub fn zero_(&mut self) {
        let cap = self.cap;
        self.used = 0;
        self.sign = Sign::Pos;
        self.zero_unused(cap);
    }

    /// Copy-assigns `src` to `self`
    pub fn copy_(&mut self, src: &Self) -> Result<(), IntError> {
        self.grow(src.used)?;
        let old_used = self.used;
        self.used = src.used;
        self.sign = src.sign;
        self.dp_mut()[..src.used].copy_from_slice(&src.dp()[..src.used]);
        self.zero_unused(old_used);
        Ok(())
    }

    /// Returns the allocated capacity in digits
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of significant digits; zero has `used() == 0`
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Returns the sign; zero is always [Sign::Pos]
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// The significant digits of the magnitude, least significant first
    #[inline]
    #[must_use]
    pub fn as_le_digits(&self) -> &[Digit] {
        &self.dp()[..self.used]
    }

    /// The full capacity slice including the zeroed slots above `used`. This
    /// exists so external tests can check the canonical-form invariants.
    #[doc(hidden)]
    #[must_use]
    pub fn raw_digits(&self) -> &[Digit] {
        self.dp()
    }
}

impl Drop for Int {
    fn drop(&mut self) {
        if self.cap != 0 {
            // Safety: matches the layout `grow` allocated with
            unsafe { dealloc(self.digits.as_ptr().cast::<u8>(), layout_for(self.cap)) }
        }
    }
}

impl Default for Int {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Int {
    /// Panics through `handle_alloc_error` if the allocation fails; use
    /// [Int::copy_] to handle allocation failure as a `Result`.
    fn clone(&self) -> Self {
        let mut res = Int::new();
        if res.copy_(self).is_err() {
            alloc::alloc::handle_alloc_error(layout_for(self.used.max(DEFAULT_DIGIT_COUNT)))
        }
        res
    }
}

impl Hash for Int {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.as_le_digits().hash(state);
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int")
            .field("sign", &self.sign)
            .field("digits", &self.as_le_digits())
            .finish()
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for Int {
    fn zeroize(&mut self) {
        self.dp_mut().zeroize();
        self.used = 0;
        self.sign = Sign::Pos;
    }
}
