//! Common arithmetic error enum

use core::fmt;

/// An arithmetic, storage, or argument error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntError {
    /// The allocator failed a growth request or a scratch creation
    OutOfMemory,
    /// The divisor of a division or modular reduction is zero
    DivisionByZero,
    /// An argument is outside its documented domain, e.g. a digit operand
    /// above the payload mask
    InvalidArgument,
    /// An iteration-bounded routine exceeded its recursion budget
    MaxIterationsReached,
    /// Malformed external input, e.g. a non-canonical digit vector fed to
    /// deserialization
    InvalidInput,
}

impl fmt::Display for IntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
