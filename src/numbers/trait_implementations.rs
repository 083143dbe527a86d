use core::{cmp::Ordering, fmt, ops::{BitAnd, BitOr, BitXor, Neg, Shl, Shr}};

use zeroize::Zeroize;

use super::Number;
use crate::sign::{convert_sm_to_2c_to_sm, Sign};
use crate::vector::vec_cmp;

/// Equal values, whatever the widths they are held in.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && vec_cmp(&self.digits, &other.digits) == Ordering::Equal
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = |s: Sign| match s {
            Sign::Neg => 0,
            Sign::Zero => 1,
            Sign::Pos => 2,
        };
        match rank(self.sign).cmp(&rank(other.sign)) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }

        let magnitudes = vec_cmp(&self.digits, &other.digits);
        // larger magnitude is the smaller negative number
        if self.sign == Sign::Neg {
            magnitudes.reverse()
        } else {
            magnitudes
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for Number {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        self.sign = Sign::Zero;
    }
}

impl fmt::Debug for Number {
    /// Two's complement pattern as big-endian hex, e.g. `i8(FB)` for -5.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.to_twos_complement_bytes();
        bytes.reverse();
        let prefix = match self.signedness {
            crate::Signedness::Signed => 'i',
            crate::Signedness::Unsigned => 'u',
        };
        write!(f, "{}{}({})", prefix, self.nb, delog::hexstr!(&bytes[..]))
    }
}

/// Negation modulo `2^nb`; for unsigned numbers this is `2^nb - x`.
impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        let mut negated = self.clone();
        negated.sign = convert_sm_to_2c_to_sm(negated.signedness, -negated.sign, negated.nb, &mut negated.digits);
        negated
    }
}

impl BitAnd for &Number {
    type Output = Number;

    fn bitand(self, other: Self) -> Number {
        let mut result = self.clone();
        result.bitand_assign(other);
        result
    }
}

impl BitOr for &Number {
    type Output = Number;

    fn bitor(self, other: Self) -> Number {
        let mut result = self.clone();
        result.bitor_assign(other);
        result
    }
}

impl BitXor for &Number {
    type Output = Number;

    fn bitxor(self, other: Self) -> Number {
        let mut result = self.clone();
        result.bitxor_assign(other);
        result
    }
}

impl Shl<usize> for &Number {
    type Output = Number;

    /// Truncating, like a fixed-width register.
    fn shl(self, bits: usize) -> Number {
        let mut result = self.clone();
        result.shl_assign(bits);
        result
    }
}

impl Shr<usize> for &Number {
    type Output = Number;

    /// Note that "right" means "lower number".
    fn shr(self, bits: usize) -> Number {
        let mut result = self.clone();
        result.shr_assign(bits);
        result
    }
}
