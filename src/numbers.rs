use alloc::{vec, vec::Vec};

use zeroize::Zeroizing;

use crate::arithmetic::{
    add_on_help, and_on_help, div_on_help, mod_on_help, mul_on_help, or_on_help, xor_on_help,
    radix::{vec_from_char, vec_to_bytes},
    shift::{vec_reverse, vec_shift_left, vec_shift_right},
};
use crate::digit::{digits_for_bits, Digit, BITS_PER_DIGIT, DIGIT_MASK};
use crate::parse::{vec_from_str, Base};
use crate::sign::{convert_signed_2c_to_sm, convert_sm_to_2c, convert_sm_to_2c_to_sm, convert_sm_to_2c_trimmed, convert_unsigned_2c_to_sm, Sign, Signedness};
use crate::vector::Magnitude;
use crate::{Config, Error, Result};

mod trait_implementations;

/// Integer of a fixed bit width `nb`, in sign-magnitude form.
///
/// All arithmetic wraps modulo `2^nb` like a hardware signal of that width:
/// the result of `a.checked_add(&b)` has the width and signedness of `a`.
///
/// The magnitude is kept in `digits_for_bits(nb)` digits, and is never
/// larger than `2^(nb - 1)` for signed numbers, `2^nb - 1` for unsigned ones.
#[derive(Clone)]
pub struct Number {
    signedness: Signedness,
    sign: Sign,
    nb: usize,
    digits: Vec<Digit>,
}

// c'tors and such
impl Number {
    /// Zero of width `nb`.
    ///
    /// Panics if `nb` is zero.
    pub fn new(signedness: Signedness, nb: usize) -> Self {
        assert!(nb > 0, "an integer needs at least one bit");
        Self {
            signedness,
            sign: Sign::Zero,
            nb,
            digits: vec![0; digits_for_bits(nb)],
        }
    }

    pub fn signed(nb: usize) -> Self {
        Self::new(Signedness::Signed, nb)
    }

    pub fn unsigned(nb: usize) -> Self {
        Self::new(Signedness::Unsigned, nb)
    }

    /// Parse a literal such as `"-0x1f"`, reduced to `nb` bits.
    ///
    /// Without `base`, the literal's prefix decides (decimal if it has none).
    /// A width `nb` of zero is an error.
    pub fn from_str_radix(signedness: Signedness, nb: usize, text: &str, base: Option<Base>) -> Result<Self> {
        if nb == 0 {
            error!("An integer needs at least one bit.");
            return Err(Error::ZeroWidth);
        }
        let mut number = Self::new(signedness, nb);
        let sign = vec_from_str(nb, &mut number.digits, text, base)?;
        number.sign = sign;
        number.reduce();
        Ok(number)
    }

    pub fn from_u64(signedness: Signedness, nb: usize, value: u64) -> Self {
        let mut number = Self::new(signedness, nb);
        number.sign = Sign::Pos;
        number.set_magnitude_u64(value);
        number
    }

    pub fn from_i64(signedness: Signedness, nb: usize, value: i64) -> Self {
        let mut number = Self::new(signedness, nb);
        number.sign = if value < 0 { Sign::Neg } else { Sign::Pos };
        number.set_magnitude_u64(value.unsigned_abs());
        number
    }

    /// Read a little-endian base-256 magnitude, reduced to `nb` bits.
    ///
    /// As the reduction is modulo `2^nb`, this also reads an `nb`-bit two's
    /// complement pattern, such as one from [`Self::to_twos_complement_bytes`].
    pub fn from_bytes(signedness: Signedness, nb: usize, bytes: &[u8]) -> Self {
        let mut number = Self::new(signedness, nb);

        // the full byte string, so that reduction sees every bit of it
        let mut wide = Zeroizing::new(vec![0; digits_for_bits(8 * bytes.len())]);
        vec_from_char(bytes, &mut wide);
        let len = core::cmp::min(wide.len(), number.digits.len());
        number.digits[..len].copy_from_slice(&wide[..len]);

        number.sign = Sign::Pos;
        number.reduce();
        number
    }

    fn set_magnitude_u64(&mut self, mut value: u64) {
        for digit in self.digits.iter_mut() {
            *digit = (value & DIGIT_MASK as u64) as Digit;
            value >>= BITS_PER_DIGIT;
        }
        self.reduce();
    }

    /// Bring the sign-magnitude pair back into `nb` bits.
    fn reduce(&mut self) {
        self.sign = convert_sm_to_2c_to_sm(self.signedness, self.sign, self.nb, &mut self.digits);
    }
}

// accessors
impl Number {
    pub fn signedness(&self) -> Signedness {
        self.signedness
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Bit width.
    pub fn nb(&self) -> usize {
        self.nb
    }

    pub fn magnitude(&self) -> &Magnitude {
        Magnitude::new(&self.digits)
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    fn byte_len(&self) -> usize {
        (self.nb + 7) / 8
    }

    fn digits_to_bytes(&self, digits: &[Digit]) -> Vec<u8> {
        let mut bytes = vec_to_bytes(digits);
        bytes.truncate(self.byte_len());
        bytes
    }

    /// The magnitude as little-endian base-256, `ceil(nb / 8)` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.digits_to_bytes(&self.digits)
    }

    /// The `nb`-bit two's complement pattern as little-endian base-256,
    /// `ceil(nb / 8)` bytes. Bits above `nb` are zero.
    pub fn to_twos_complement_bytes(&self) -> Vec<u8> {
        let mut pattern = Zeroizing::new(self.digits.clone());
        convert_sm_to_2c_trimmed(self.sign, self.nb, &mut pattern);
        self.digits_to_bytes(&pattern)
    }
}

// arithmetic
impl Number {
    /// `self + other`, modulo `2^nb`.
    ///
    /// The digits span all `nb` bits, so a carry out of them is wrap-around
    /// and this is always `Ok`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        add_on_help(&Config::WRAPPING, self.signedness, &mut sum.sign, self.nb, &mut sum.digits, other.sign, &other.digits)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut difference = self.clone();
        add_on_help(&Config::WRAPPING, self.signedness, &mut difference.sign, self.nb, &mut difference.digits, -other.sign, &other.digits)?;
        Ok(difference)
    }

    /// Always `Ok`; checked for symmetry with the other operations.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let mut product = self.clone();
        mul_on_help(self.signedness, &mut product.sign, self.nb, &mut product.digits, other.sign, &other.digits);
        Ok(product)
    }

    /// Quotient rounded towards zero; fails on division by zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        let mut quotient = self.clone();
        div_on_help(self.signedness, &mut quotient.sign, self.nb, &mut quotient.digits, other.sign, &other.digits)?;
        Ok(quotient)
    }

    /// Remainder with the sign of `self`; fails on division by zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self> {
        let mut remainder = self.clone();
        mod_on_help(self.signedness, &mut remainder.sign, self.nb, &mut remainder.digits, other.sign, &other.digits)?;
        Ok(remainder)
    }

    pub(crate) fn bitand_assign(&mut self, other: &Self) {
        and_on_help(self.signedness, &mut self.sign, self.nb, &mut self.digits, other.sign, &other.digits);
    }

    pub(crate) fn bitor_assign(&mut self, other: &Self) {
        or_on_help(self.signedness, &mut self.sign, self.nb, &mut self.digits, other.sign, &other.digits);
    }

    pub(crate) fn bitxor_assign(&mut self, other: &Self) {
        xor_on_help(self.signedness, &mut self.sign, self.nb, &mut self.digits, other.sign, &other.digits);
    }

    /// Truncating, i.e. modulo `2^nb`.
    pub(crate) fn shl_assign(&mut self, bits: usize) {
        if self.sign == Sign::Zero {
            return;
        }
        vec_shift_left(&mut self.digits, bits);
        self.reduce();
    }

    /// Arithmetic for negative signed numbers (rounds towards negative infinity).
    pub(crate) fn shr_assign(&mut self, bits: usize) {
        if self.sign == Sign::Zero {
            return;
        }

        let fill = if self.sign == Sign::Neg {
            convert_sm_to_2c(self.sign, &mut self.digits);
            DIGIT_MASK
        } else {
            0
        };

        vec_shift_right(&mut self.digits, bits, fill);
        self.read_twos_complement();
    }

    /// Reverse the order of the bits `l` down to `r` of the two's complement
    /// pattern.
    pub fn reverse(&mut self, l: usize, r: usize) -> Result<()> {
        let mut pattern = Zeroizing::new(self.digits.clone());
        convert_sm_to_2c_trimmed(self.sign, self.nb, &mut pattern);
        vec_reverse(self.nb, &mut pattern, l, r)?;

        self.digits.copy_from_slice(&pattern);
        self.read_twos_complement();
        Ok(())
    }

    /// Take `digits` as an `nb`-bit two's complement pattern.
    fn read_twos_complement(&mut self) {
        self.sign = match self.signedness {
            Signedness::Signed => convert_signed_2c_to_sm(self.nb, &mut self.digits),
            Signedness::Unsigned => convert_unsigned_2c_to_sm(self.nb, &mut self.digits),
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    fn signed(nb: usize, value: i64) -> Number {
        Number::from_i64(Signedness::Signed, nb, value)
    }

    fn unsigned(nb: usize, value: u64) -> Number {
        Number::from_u64(Signedness::Unsigned, nb, value)
    }

    #[test]
    fn construct() {
        let n = signed(8, -5);
        assert_eq!((n.sign(), n.nb(), n.signedness()), (Sign::Neg, 8, Signedness::Signed));
        assert_eq!(n.to_bytes(), [5]);

        // 300 in 8 signed bits is 44
        assert_eq!(signed(8, 300).to_bytes(), [44]);
        // u64::MAX in 4 unsigned bits
        assert_eq!(unsigned(4, u64::MAX).to_bytes(), [0xF]);

        assert!(Number::signed(100).is_zero());
        assert_eq!(signed(64, i64::MIN).to_twos_complement_bytes(), hex!("0000000000000080"));
    }

    #[test]
    fn literals() {
        let n = Number::from_str_radix(Signedness::Signed, 16, "-0x1A", None).unwrap();
        assert_eq!(n, signed(16, -26));

        // unsigned literals wrap into range
        let n = Number::from_str_radix(Signedness::Unsigned, 8, "-1", None).unwrap();
        assert_eq!(n, unsigned(8, 255));

        assert_eq!(
            Number::from_str_radix(Signedness::Signed, 16, "0xZ", None),
            Err(Error::InvalidDigit { digit: 'Z', base: Base::Hex })
        );
        assert_eq!(Number::from_str_radix(Signedness::Signed, 0, "1", None), Err(Error::ZeroWidth));
    }

    #[test]
    fn bytes() {
        let n = Number::from_bytes(Signedness::Unsigned, 72, &hex!("010203040506070809"));
        assert_eq!(n.to_bytes(), hex!("010203040506070809"));

        // a pattern with the sign bit set reads as negative
        let n = Number::from_bytes(Signedness::Signed, 16, &hex!("feff"));
        assert_eq!(n, signed(16, -2));
        assert_eq!(n.to_bytes(), hex!("0200"));
        assert_eq!(n.to_twos_complement_bytes(), hex!("feff"));

        // bits above the width are dropped
        let n = Number::from_bytes(Signedness::Unsigned, 12, &hex!("ffffff"));
        assert_eq!(n.to_bytes(), hex!("ff0f"));
    }

    #[test]
    fn arithmetic() {
        let a = signed(16, 1000);
        let b = signed(16, -7);

        assert_eq!(a.checked_add(&b).unwrap(), signed(16, 993));
        assert_eq!(a.checked_sub(&b).unwrap(), signed(16, 1007));
        assert_eq!(a.checked_mul(&b).unwrap(), signed(16, -7000));
        assert_eq!(a.checked_div(&b).unwrap(), signed(16, -142));
        assert_eq!(a.checked_rem(&b).unwrap(), signed(16, 6));

        // 1000 * 1000 wraps in 16 bits
        assert_eq!(a.checked_mul(&a).unwrap(), signed(16, 1_000_000 % 65536));

        assert_eq!(a.checked_div(&Number::signed(16)), Err(Error::DivisionByZero));
    }

    #[test]
    fn wraps_at_full_digit_width() {
        let nb = BITS_PER_DIGIT;
        let max = unsigned(nb, DIGIT_MASK as u64);
        assert!(max.checked_add(&unsigned(nb, 1)).unwrap().is_zero());
        assert_eq!(unsigned(nb, 0).checked_sub(&unsigned(nb, 1)).unwrap(), max);

        let min = signed(nb, -(1 << (nb - 1)));
        assert!(min.checked_add(&min).unwrap().is_zero());

        // one bit narrower behaves the same
        let max = unsigned(nb - 1, (DIGIT_MASK >> 1) as u64);
        assert!(max.checked_add(&unsigned(nb - 1, 1)).unwrap().is_zero());
    }

    #[test]
    fn mixed_widths() {
        let wide = Number::from_str_radix(Signedness::Unsigned, 100, "0xffffffffffffffff", None).unwrap();
        assert_eq!(unsigned(8, 1).checked_add(&wide).unwrap(), unsigned(8, 0));

        // 2^62 + 3 is 3 modulo 2^8
        let wide = Number::from_str_radix(Signedness::Unsigned, 100, "0x4000000000000003", None).unwrap();
        assert_eq!(unsigned(8, 5).checked_sub(&wide).unwrap(), unsigned(8, 2));

        let wide = Number::from_str_radix(Signedness::Unsigned, 100, "0x4000000000000007", None).unwrap();
        assert_eq!(unsigned(8, 5).checked_sub(&wide).unwrap(), unsigned(8, 254));
        assert_eq!(signed(8, 5).checked_sub(&wide).unwrap(), signed(8, -2));

        // the narrower operand on the right
        assert_eq!(wide.checked_add(&unsigned(8, 1)).unwrap().to_bytes(), hex!("08000000000000400000000000"));
    }

    #[test]
    fn bits() {
        let a = signed(8, -3);
        assert_eq!(&a << 1, signed(8, -6));
        assert_eq!(&a >> 1, signed(8, -2));
        assert_eq!(&signed(8, 64) << 1, signed(8, -128));
        assert_eq!(&unsigned(8, 0x81) >> 4, unsigned(8, 0x8));

        assert_eq!(&signed(8, -1) & &signed(8, 0x5a), signed(8, 0x5a));
        assert_eq!(&unsigned(8, 0xf0) | &unsigned(8, 0x0f), unsigned(8, 0xff));
        assert_eq!(&signed(8, 5) ^ &signed(8, -1), signed(8, -6));

        let mut n = unsigned(8, 0b0000_0011);
        n.reverse(7, 0).unwrap();
        assert_eq!(n, unsigned(8, 0b1100_0000));

        // the pattern of -128 is 0b1000_0000
        let mut n = signed(8, -128);
        n.reverse(7, 0).unwrap();
        assert_eq!(n, signed(8, 1));

        assert_eq!(n.reverse(0, 7), Err(Error::InvalidRange { left: 0, right: 7 }));
    }
}
