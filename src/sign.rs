//! Signs, and the sign-magnitude / two's-complement boundary.
//!
//! Kernels work on magnitudes. A signed value is kept as a [`Sign`] plus a
//! magnitude; whenever a result must be reduced to its bit width `nb`, it is
//! taken to two's complement, truncated there, and brought back.

use core::ops::{Mul, Neg};

use crate::digit::{bit_ord, one_and_ones, one_and_zeros, Digit};
use crate::vector::{vec_all_zero, vec_complement};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Neg,
    Zero,
    Pos,
}

/// How the bit width of a value is interpreted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Signedness {
    /// the top bit of `nb` is the two's-complement sign bit
    Signed,
    /// all `nb` bits are magnitude
    Unsigned,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Pos,
            _ => Sign::Neg,
        }
    }
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Sign::Neg
    }
}

/// `Zero` if all of `d` is zero, `s` otherwise.
#[inline]
pub fn check_for_zero(s: Sign, d: &[Digit]) -> Sign {
    if vec_all_zero(d) {
        Sign::Zero
    } else {
        s
    }
}

/// Number of valid bits in the top digit of an `nb`-bit value.
#[inline]
fn top_bits(nb: usize) -> usize {
    bit_ord(nb - 1) + 1
}

/// Clear the bits of the top digit above `nb`.
#[inline]
pub fn trim(nb: usize, d: &mut [Digit]) {
    if let Some(top) = d.last_mut() {
        *top &= one_and_ones(top_bits(nb));
    }
}

/// Sign-magnitude to two's complement, within the digit length of `d`.
#[inline]
pub fn convert_sm_to_2c(s: Sign, d: &mut [Digit]) {
    if s == Sign::Neg {
        vec_complement(d);
    }
}

/// Like [`convert_sm_to_2c`], but the result is cut down to `nb` bits.
pub fn convert_sm_to_2c_trimmed(s: Sign, nb: usize, d: &mut [Digit]) {
    if s == Sign::Neg {
        vec_complement(d);
        trim(nb, d);
    }
}

/// Read `d` as an `nb`-bit two's-complement value, leave its magnitude in `d`.
pub fn convert_signed_2c_to_sm(nb: usize, d: &mut [Digit]) -> Sign {
    let xnb = top_bits(nb);
    let top = d.len() - 1;

    let s = if d[top] & one_and_zeros(xnb - 1) != 0 {
        vec_complement(d);
        Sign::Neg
    } else {
        Sign::Pos
    };

    d[top] &= one_and_ones(xnb);

    check_for_zero(s, d)
}

/// Read `d` as an `nb`-bit unsigned value: truncate, and settle the sign.
pub fn convert_unsigned_2c_to_sm(nb: usize, d: &mut [Digit]) -> Sign {
    trim(nb, d);
    check_for_zero(Sign::Pos, d)
}

/// Reduce a sign-magnitude value modulo its `nb`-bit width.
///
/// This is where any out-of-range result wraps, the way a fixed-width
/// hardware signal does.
pub fn convert_sm_to_2c_to_sm(
    signedness: Signedness,
    s: Sign,
    nb: usize,
    d: &mut [Digit],
) -> Sign {
    convert_sm_to_2c(s, d);
    match signedness {
        Signedness::Signed => convert_signed_2c_to_sm(nb, d),
        Signedness::Unsigned => convert_unsigned_2c_to_sm(nb, d),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digit::{BITS_PER_DIGIT, DIGIT_MASK};

    #[test]
    fn sign_algebra() {
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Neg * Sign::Pos, Sign::Neg);
        assert_eq!(Sign::Zero * Sign::Neg, Sign::Zero);
        assert_eq!(-Sign::Pos, Sign::Neg);
        assert_eq!(-Sign::Zero, Sign::Zero);
    }

    #[test]
    fn signed_wraps_into_width() {
        // 200 in 8 signed bits is -56
        let mut d = [200];
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Signed, Sign::Pos, 8, &mut d), Sign::Neg);
        assert_eq!(d, [56]);

        // -5 stays -5
        let mut d = [5];
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Signed, Sign::Neg, 8, &mut d), Sign::Neg);
        assert_eq!(d, [5]);

        // -128 is representable, +128 is not
        let mut d = [128];
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Signed, Sign::Neg, 8, &mut d), Sign::Neg);
        assert_eq!(d, [128]);
        let mut d = [128];
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Signed, Sign::Pos, 8, &mut d), Sign::Neg);
        assert_eq!(d, [128]);
    }

    #[test]
    fn unsigned_wraps_into_width() {
        // -1 in 4 unsigned bits is 15
        let mut d = [1];
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Unsigned, Sign::Neg, 4, &mut d), Sign::Pos);
        assert_eq!(d, [0xF]);

        // -1 over two digits
        let mut d = [1, 0];
        let nb = BITS_PER_DIGIT + 4;
        assert_eq!(convert_sm_to_2c_to_sm(Signedness::Unsigned, Sign::Neg, nb, &mut d), Sign::Pos);
        assert_eq!(d, [DIGIT_MASK, 0xF]);
    }

    #[test]
    fn zero_has_zero_sign() {
        let mut d = [0, 1 << 3];
        // only the top digit's low 3 bits survive in BITS_PER_DIGIT + 3 bits
        assert_eq!(convert_unsigned_2c_to_sm(BITS_PER_DIGIT + 3, &mut d), Sign::Zero);
        assert_eq!(check_for_zero(Sign::Neg, &[0, 0]), Sign::Zero);
    }

    #[test]
    fn trimmed() {
        let mut d = [1];
        convert_sm_to_2c_trimmed(Sign::Neg, 8, &mut d);
        assert_eq!(d, [0xFF]);
    }
}
