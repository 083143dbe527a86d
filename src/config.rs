//! Runtime configuration of the operation helpers.

use crate::{Digit, Error, Result};

/// What to do with a carry or borrow that has no digit left to go to.
///
/// Buffers sized at the documented minimum never produce one; an
/// undersized destination does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overflow {
    /// Drop it: arithmetic modulo the buffer's radix power.
    Wrap,
    /// Report it as [`Error::Wrapped`].
    Check,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub overflow: Overflow,
}

impl Config {
    pub const WRAPPING: Self = Self { overflow: Overflow::Wrap };
    pub const CHECKED: Self = Self { overflow: Overflow::Check };

    /// Apply the overflow policy to the carry/borrow left over by `kernel`.
    pub fn settle(&self, kernel: &'static str, carry: Digit) -> Result<()> {
        if carry == 0 {
            return Ok(());
        }
        warn!("Result of {} is wrapped around.", kernel);
        match self.overflow {
            Overflow::Wrap => Ok(()),
            Overflow::Check => Err(Error::Wrapped(kernel)),
        }
    }
}

impl Default for Config {
    /// Checked in debug builds, wrapping otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::CHECKED
        } else {
            Self::WRAPPING
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn settle() {
        assert_eq!(Config::WRAPPING.settle("vec_add_on", 1), Ok(()));
        assert_eq!(Config::CHECKED.settle("vec_add_on", 0), Ok(()));
        assert_eq!(
            Config::CHECKED.settle("vec_add_on", 1),
            Err(Error::Wrapped("vec_add_on"))
        );
    }
}
