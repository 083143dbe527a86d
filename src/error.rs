use core::fmt;

use crate::parse::Base;

/// Everything that can go wrong in the kernels and at their boundary.
///
/// The detection conditions are those of a fail-fast numeric library;
/// here they are handed back to the caller instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// empty literal, or nothing left after the sign and base prefix
    NoDigits,
    /// not alphanumeric, or numerically out of range for the base
    InvalidDigit { digit: char, base: Base },
    /// the caller's base and the literal's base prefix disagree
    BaseConflict { expected: Base, found: Base },
    /// bit range given with left index below right index
    InvalidRange { left: usize, right: usize },
    DivisionByZero,
    /// a carry or borrow left the buffer of the named kernel
    Wrapped(&'static str),
    /// an output buffer is shorter than the operation's worst case
    BufferTooSmall { needed: usize, actual: usize },
    /// a value of zero bits
    ZeroWidth,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoDigits => f.write_str("The char string must contain at least one digit."),
            Error::InvalidDigit { digit, base } => {
                write!(f, "{} is not a valid digit in base {}", digit, base.radix())
            }
            Error::BaseConflict { .. } => f.write_str(
                "The base set in the program does not match the base in the input string.",
            ),
            Error::InvalidRange { left, right } => {
                write!(f, "Ensure that left index {} >= right index {}", left, right)
            }
            Error::DivisionByZero => f.write_str("Division by zero."),
            Error::Wrapped(kernel) => write!(f, "Result (in {}) is wrapped around.", kernel),
            Error::BufferTooSmall { needed, actual } => {
                write!(f, "Buffer of {} digits cannot hold {} digits.", actual, needed)
            }
            Error::ZeroWidth => f.write_str("An integer needs at least one bit."),
        }
    }
}
