//! The digit, and the radix constants everything else is built on.
//!
//! A digit is stored in a machine word, but only the low [`BITS_PER_DIGIT`]
//! bits carry value. The two spare bits hold carries and borrows, so the
//! kernels never need a wider accumulator than the digit itself.
//!
//! Feature `u32` forces 32-bit storage even on 64-bit architectures,
//! feature `u64` forces 64-bit storage even on 32-bit architectures.

/// A word on the machine, holding one digit in `[0, DIGIT_RADIX)`.
pub type Digit = digit::Digit;

/// Multiple [`Digit`]s, least significant first.
pub type Digits = [Digit];

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
}

/// Bits of value per digit; two bits of head room remain in the word.
pub const BITS_PER_DIGIT: usize = Digit::BITS as usize - 2;
pub const DIGIT_RADIX: Digit = 1 << BITS_PER_DIGIT;
pub const DIGIT_MASK: Digit = DIGIT_RADIX - 1;

pub const BITS_PER_HALF_DIGIT: usize = BITS_PER_DIGIT / 2;
pub const HALF_DIGIT_RADIX: Digit = 1 << BITS_PER_HALF_DIGIT;
pub const HALF_DIGIT_MASK: Digit = HALF_DIGIT_RADIX - 1;

pub const BITS_PER_BYTE: usize = 8;
pub const BYTE_RADIX: Digit = 1 << BITS_PER_BYTE;
pub const BYTE_MASK: Digit = BYTE_RADIX - 1;
pub const BYTES_PER_DIGIT: usize = (BITS_PER_DIGIT + BITS_PER_BYTE - 1) / BITS_PER_BYTE;

// Long division estimates a byte quotient from three dividend bytes.
const _: () = assert!(BITS_PER_DIGIT >= 3 * BITS_PER_BYTE);

/// Number of digits needed to hold `nb` bits.
#[inline]
pub const fn digits_for_bits(nb: usize) -> usize {
    (nb + BITS_PER_DIGIT - 1) / BITS_PER_DIGIT
}

/// Index of the digit holding bit `i`.
#[inline]
pub const fn digit_ord(i: usize) -> usize {
    i / BITS_PER_DIGIT
}

/// Position of bit `i` within its digit.
#[inline]
pub const fn bit_ord(i: usize) -> usize {
    i % BITS_PER_DIGIT
}

/// `n` low bits set, i.e. `0..011..1`.
#[inline]
pub const fn one_and_ones(n: usize) -> Digit {
    if n == 0 {
        0
    } else {
        Digit::MAX >> (Digit::BITS as usize - n)
    }
}

/// Only bit `n` set, i.e. `0..010..0`.
#[inline]
pub const fn one_and_zeros(n: usize) -> Digit {
    1 << n
}

#[inline]
pub const fn low_half(d: Digit) -> Digit {
    d & HALF_DIGIT_MASK
}

/// Everything above the low half, which may be wider than a half digit.
#[inline]
pub const fn high_half(d: Digit) -> Digit {
    d >> BITS_PER_HALF_DIGIT
}

#[inline]
pub const fn high_half_masked(d: Digit) -> Digit {
    high_half(d) & HALF_DIGIT_MASK
}

#[inline]
pub const fn concat(h: Digit, l: Digit) -> Digit {
    (h << BITS_PER_HALF_DIGIT) | l
}
