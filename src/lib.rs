#![cfg_attr(not(test), no_std)]
//! Digit-vector kernels for bit-accurate integers of any width.
//!
//! Magnitudes are little-endian vectors of [`Digit`]s, each holding
//! [`digit::BITS_PER_DIGIT`] bits of value. The [`vector`] and [`arithmetic`]
//! kernels work on caller-sized slices and never allocate, except for the
//! scratch space of long division. Signed values carry a [`Sign`] next to
//! their magnitude, and every result is reduced to its bit width `nb` on the
//! way out, wrapping the way a fixed-width hardware signal does.
//!
//! [`Number`] owns a value of one width and exercises the whole kernel:
//!
//! ```
//! use nbvec::{Number, Signedness};
//!
//! let a = Number::from_str_radix(Signedness::Signed, 12, "-0x7ff", None).unwrap();
//! let b = Number::from_i64(Signedness::Signed, 12, 3);
//! // -2047 * 3 = -6141 wraps to -2045 in 12 bits
//! assert_eq!(a.checked_mul(&b).unwrap(), Number::from_i64(Signedness::Signed, 12, -2045));
//! ```

extern crate alloc;

delog::generate_macros!();

pub mod digit;
pub use digit::{Digit, Digits};
mod error;
pub use error::{Error, Result};
mod config;
pub use config::{Config, Overflow};
pub mod vector;
pub use vector::Magnitude;
pub mod sign;
pub use sign::{Sign, Signedness};
pub mod parse;
pub use parse::{Base, Literal};
pub mod arithmetic;
mod numbers;
pub use numbers::Number;
