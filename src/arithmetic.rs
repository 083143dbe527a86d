//! Digit vector kernels, and the helpers that apply them to signed values.
//!
//! The kernels in the submodules see bare magnitudes. The `*_on_help`
//! functions here take a value as its sign, bit width `nb` and digits
//! (`digits_for_bits(nb)` of them, owned by the caller; `add_on_help` also
//! takes fewer), update it in place
//! with a second operand, and reduce the result to `nb` bits.

use alloc::vec;
use core::cmp::{min, Ordering};

use zeroize::Zeroizing;

use crate::digit::{digits_for_bits, Digit, BITS_PER_DIGIT, DIGIT_MASK, HALF_DIGIT_RADIX};
use crate::sign::{convert_signed_2c_to_sm, convert_sm_to_2c, convert_sm_to_2c_to_sm, convert_unsigned_2c_to_sm, Sign, Signedness};
use crate::vector::{vec_all_zero, vec_cmp, vec_copy_and_zero, vec_skip_leading_zeros, vec_zero};
use crate::{Config, Error, Result};

pub mod add;
pub mod divide;
pub mod multiply;
pub mod radix;
pub mod shift;
pub mod subtract;

use add::vec_add_on;
use divide::{vec_div_large, vec_rem_large, vec_rem_on_small, vec_rem_small};
use multiply::{vec_mul, vec_mul_small};
use subtract::{vec_sub_on, vec_sub_on2};

#[inline]
fn reduce(signedness: Signedness, s: Sign, unb: usize, ud: &mut [Digit]) -> Sign {
    convert_sm_to_2c_to_sm(signedness, s, unb, ud)
}

/// u += v
///
/// `v` is taken modulo the digits of `ud`, which is exact modulo `2^unb`,
/// so a carry out of a `ud` of `digits_for_bits(unb)` digits is plain
/// wrap-around. A shorter `ud` holds only its own digits' worth of bits:
/// whatever is lost above it is settled by `config`.
pub fn add_on_help(
    config: &Config,
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) -> Result<()> {
    debug_assert!(!ud.is_empty() && ud.len() <= digits_for_bits(unb));

    let spans_width = ud.len() == digits_for_bits(unb);
    let settle = |kernel: &'static str, carry: Digit| -> Result<()> {
        if spans_width {
            Ok(())
        } else {
            config.settle(kernel, carry)
        }
    };
    let nb = min(unb, ud.len() * BITS_PER_DIGIT);

    let (vd, above) = vd.split_at(min(vd.len(), ud.len()));
    if vs != Sign::Zero && !vec_all_zero(above) {
        settle("add_on_help", 1)?;
    }

    let vd = &vd[..vec_skip_leading_zeros(vd)];
    if vs == Sign::Zero || vd.is_empty() {
        return Ok(());
    }
    if *us == Sign::Zero {
        vec_copy_and_zero(ud, vd);
        *us = reduce(signedness, vs, nb, ud);
        return Ok(());
    }

    if *us == vs {
        settle("vec_add_on", vec_add_on(ud, vd))?;
    } else {
        match vec_cmp(ud, vd) {
            Ordering::Equal => {
                *us = Sign::Zero;
                vec_zero(ud);
                return Ok(());
            }
            Ordering::Greater => {
                settle("vec_sub_on", vec_sub_on(ud, vd))?;
            }
            Ordering::Less => {
                *us = -*us;
                settle("vec_sub_on2", vec_sub_on2(ud, vd))?;
            }
        }
    }

    *us = reduce(signedness, *us, nb, ud);
    Ok(())
}

/// u *= v
///
/// The full product is formed in scratch space and cut down to `unb` bits.
pub fn mul_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) {
    debug_assert_eq!(ud.len(), digits_for_bits(unb));

    let s = *us * vs;

    let und = vec_skip_leading_zeros(ud);
    let vnd = vec_skip_leading_zeros(vd);

    if s == Sign::Zero || und == 0 || vnd == 0 {
        *us = Sign::Zero;
        vec_zero(ud);
        return;
    }

    let mut w = Zeroizing::new(vec![0; und + vnd]);

    if vnd == 1 && vd[0] < HALF_DIGIT_RADIX {
        vec_mul_small(&ud[..und], vd[0], &mut w);
    } else if und == 1 && ud[0] < HALF_DIGIT_RADIX {
        vec_mul_small(&vd[..vnd], ud[0], &mut w);
    } else {
        vec_mul(&ud[..und], &vd[..vnd], &mut w);
    }

    vec_copy_and_zero(ud, &w);
    *us = reduce(signedness, s, unb, ud);
}

fn check_divisor(vs: Sign, vd: &[Digit]) -> Result<usize> {
    let vnd = vec_skip_leading_zeros(vd);
    if vs == Sign::Zero || vnd == 0 {
        error!("Division by zero.");
        return Err(Error::DivisionByZero);
    }
    Ok(vnd)
}

/// u /= v, rounding towards zero.
pub fn div_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) -> Result<()> {
    debug_assert_eq!(ud.len(), digits_for_bits(unb));

    let vnd = check_divisor(vs, vd)?;
    let vd = &vd[..vnd];

    let und = vec_skip_leading_zeros(ud);
    if *us == Sign::Zero || und == 0 {
        return Ok(());
    }

    let s = *us * vs;

    match vec_cmp(&ud[..und], vd) {
        // |u| < |v|
        Ordering::Less => {
            *us = Sign::Zero;
            vec_zero(ud);
            return Ok(());
        }
        Ordering::Equal => {
            vec_zero(ud);
            ud[0] = 1;
        }
        Ordering::Greater => {
            if vnd == 1 && vd[0] == 1 {
                // the magnitude stays
            } else if vnd == 1 && vd[0] < HALF_DIGIT_RADIX {
                vec_rem_on_small(&mut ud[..und], vd[0]);
            } else {
                let mut w = Zeroizing::new(vec![0; und]);
                vec_div_large(&ud[..und], vd, &mut w)?;
                vec_copy_and_zero(ud, &w);
            }
        }
    }

    *us = reduce(signedness, s, unb, ud);
    Ok(())
}

/// u %= v; the remainder takes the sign of `u`.
pub fn mod_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) -> Result<()> {
    debug_assert_eq!(ud.len(), digits_for_bits(unb));

    let vnd = check_divisor(vs, vd)?;
    let vd = &vd[..vnd];

    let und = vec_skip_leading_zeros(ud);
    if *us == Sign::Zero || und == 0 {
        return Ok(());
    }

    match vec_cmp(&ud[..und], vd) {
        // |u| < |v|: u is its own remainder
        Ordering::Less => return Ok(()),
        Ordering::Equal => {
            *us = Sign::Zero;
            vec_zero(ud);
            return Ok(());
        }
        Ordering::Greater => {
            if vnd == 1 && vd[0] < HALF_DIGIT_RADIX {
                let r = vec_rem_small(&ud[..und], vd[0]);
                vec_zero(ud);
                ud[0] = r;
            } else {
                let mut w = Zeroizing::new(vec![0; vnd]);
                vec_rem_large(&ud[..und], vd, &mut w)?;
                vec_copy_and_zero(ud, &w);
            }
        }
    }

    *us = reduce(signedness, *us, unb, ud);
    Ok(())
}

/// Apply `op` digit-wise to the two's complements of `u` and `v`.
///
/// Both are taken to two's complement over the digits of `ud`, which sign
/// extends a shorter `v`.
fn bitwise_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
    op: impl Fn(Digit, Digit) -> Digit,
) {
    debug_assert_eq!(ud.len(), digits_for_bits(unb));

    let mut t = Zeroizing::new(vec![0; ud.len()]);
    vec_copy_and_zero(&mut t, vd);

    convert_sm_to_2c(*us, ud);
    convert_sm_to_2c(vs, &mut t);

    for (u, t) in ud.iter_mut().zip(t.iter()) {
        *u = op(*u, *t) & DIGIT_MASK;
    }

    *us = match signedness {
        Signedness::Signed => convert_signed_2c_to_sm(unb, ud),
        Signedness::Unsigned => convert_unsigned_2c_to_sm(unb, ud),
    };
}

/// u &= v, in two's complement
pub fn and_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) {
    bitwise_on_help(signedness, us, unb, ud, vs, vd, |u, v| u & v)
}

/// u |= v, in two's complement
pub fn or_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) {
    bitwise_on_help(signedness, us, unb, ud, vs, vd, |u, v| u | v)
}

/// u ^= v, in two's complement
pub fn xor_on_help(
    signedness: Signedness,
    us: &mut Sign,
    unb: usize,
    ud: &mut [Digit],
    vs: Sign,
    vd: &[Digit],
) {
    bitwise_on_help(signedness, us, unb, ud, vs, vd, |u, v| u ^ v)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digit::{BITS_PER_DIGIT, DIGIT_MASK as M};
    use crate::Overflow;

    const S: Signedness = Signedness::Signed;
    const U: Signedness = Signedness::Unsigned;

    #[test]
    fn add_signs() {
        let config = Config::CHECKED;

        // 5 + -7 = -2
        let (mut us, mut ud) = (Sign::Pos, [5]);
        add_on_help(&config, S, &mut us, 16, &mut ud, Sign::Neg, &[7]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [2]));

        // -2 + 2 = 0
        add_on_help(&config, S, &mut us, 16, &mut ud, Sign::Pos, &[2]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // 0 + -3 = -3, v with leading zeros
        add_on_help(&config, S, &mut us, 16, &mut ud, Sign::Neg, &[3, 0, 0]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [3]));

        // 9 + -3 = 6
        let (mut us, mut ud) = (Sign::Pos, [9]);
        add_on_help(&config, S, &mut us, 16, &mut ud, Sign::Neg, &[3]).unwrap();
        assert_eq!((us, ud), (Sign::Pos, [6]));
    }

    #[test]
    fn add_wraps_into_width() {
        // 127 + 1 in 8 signed bits
        let (mut us, mut ud) = (Sign::Pos, [127]);
        add_on_help(&Config::CHECKED, S, &mut us, 8, &mut ud, Sign::Pos, &[1]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [128]));

        // 255 + 1 in 8 unsigned bits
        let (mut us, mut ud) = (Sign::Pos, [255]);
        add_on_help(&Config::CHECKED, U, &mut us, 8, &mut ud, Sign::Pos, &[1]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));
    }

    #[test]
    fn add_carry_out_of_full_width() {
        // a carry out of a full-width buffer is wrap-around, even when checked
        let nb = BITS_PER_DIGIT;
        let (mut us, mut ud) = (Sign::Pos, [M]);
        add_on_help(&Config::CHECKED, U, &mut us, nb, &mut ud, Sign::Pos, &[1]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // -2^(nb-1) + -2^(nb-1) = -2^nb, which is 0
        let (mut us, mut ud) = (Sign::Neg, [1 << (nb - 1)]);
        add_on_help(&Config::CHECKED, S, &mut us, nb, &mut ud, Sign::Neg, &[1 << (nb - 1)]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));
    }

    #[test]
    fn add_wider_operand() {
        // 1 + (2^(2 BITS_PER_DIGIT) - 1) in 8 bits
        let (mut us, mut ud) = (Sign::Pos, [1]);
        add_on_help(&Config::CHECKED, U, &mut us, 8, &mut ud, Sign::Pos, &[M, M]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // 5 - (RADIX + 3) = 2 in 8 bits
        let (mut us, mut ud) = (Sign::Pos, [5]);
        add_on_help(&Config::CHECKED, U, &mut us, 8, &mut ud, Sign::Neg, &[3, 1]).unwrap();
        assert_eq!((us, ud), (Sign::Pos, [2]));

        // 5 - (RADIX + 7) = -2, or 254 in 8 unsigned bits
        let (mut us, mut ud) = (Sign::Pos, [5]);
        add_on_help(&Config::CHECKED, U, &mut us, 8, &mut ud, Sign::Neg, &[7, 1]).unwrap();
        assert_eq!((us, ud), (Sign::Pos, [254]));
    }

    #[test]
    fn add_carry_out_of_short_buffer() {
        // one digit holding a value of two digits' width
        let nb = 2 * BITS_PER_DIGIT;
        let (mut us, mut ud) = (Sign::Pos, [M]);
        assert_eq!(
            add_on_help(&Config::CHECKED, U, &mut us, nb, &mut ud, Sign::Pos, &[1]),
            Err(Error::Wrapped("vec_add_on"))
        );

        let (mut us, mut ud) = (Sign::Pos, [1]);
        assert_eq!(
            add_on_help(&Config::CHECKED, U, &mut us, nb, &mut ud, Sign::Pos, &[0, 1]),
            Err(Error::Wrapped("add_on_help"))
        );

        let (mut us, mut ud) = (Sign::Pos, [M]);
        let wrapping = Config { overflow: Overflow::Wrap };
        add_on_help(&wrapping, U, &mut us, nb, &mut ud, Sign::Pos, &[1]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));
    }

    #[test]
    fn mul() {
        // -3 * 7 = -21
        let (mut us, mut ud) = (Sign::Neg, [3]);
        mul_on_help(S, &mut us, 16, &mut ud, Sign::Pos, &[7]);
        assert_eq!((us, ud), (Sign::Neg, [21]));

        // * 0
        mul_on_help(S, &mut us, 16, &mut ud, Sign::Zero, &[0]);
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // full digits, truncated to two digits
        let nb = 2 * BITS_PER_DIGIT;
        let (mut us, mut ud) = (Sign::Pos, [M, M]);
        mul_on_help(U, &mut us, nb, &mut ud, Sign::Pos, &[M]);
        assert_eq!((us, ud), (Sign::Pos, [1, M]));
    }

    #[test]
    fn div() {
        // -7 / 2 = -3
        let (mut us, mut ud) = (Sign::Neg, [7]);
        div_on_help(S, &mut us, 16, &mut ud, Sign::Pos, &[2]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [3]));

        // 3 / -3 = -1
        let (mut us, mut ud) = (Sign::Pos, [3]);
        div_on_help(S, &mut us, 16, &mut ud, Sign::Neg, &[3]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [1]));

        // 2 / 3 = 0
        let (mut us, mut ud) = (Sign::Pos, [2]);
        div_on_help(S, &mut us, 16, &mut ud, Sign::Pos, &[3]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // by a large divisor
        let nb = 2 * BITS_PER_DIGIT;
        let (mut us, mut ud) = (Sign::Pos, [0, 6]);
        div_on_help(U, &mut us, nb, &mut ud, Sign::Pos, &[0, 3]).unwrap();
        assert_eq!((us, ud), (Sign::Pos, [2, 0]));

        let (mut us, mut ud) = (Sign::Pos, [1]);
        assert_eq!(
            div_on_help(S, &mut us, 16, &mut ud, Sign::Zero, &[0]),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn rem() {
        // -7 % 2 = -1
        let (mut us, mut ud) = (Sign::Neg, [7]);
        mod_on_help(S, &mut us, 16, &mut ud, Sign::Pos, &[2]).unwrap();
        assert_eq!((us, ud), (Sign::Neg, [1]));

        // 7 % -7 = 0
        let (mut us, mut ud) = (Sign::Pos, [7]);
        mod_on_help(S, &mut us, 16, &mut ud, Sign::Neg, &[7]).unwrap();
        assert_eq!((us, ud), (Sign::Zero, [0]));

        // by a large divisor
        let nb = 2 * BITS_PER_DIGIT;
        let (mut us, mut ud) = (Sign::Pos, [5, 7]);
        mod_on_help(U, &mut us, nb, &mut ud, Sign::Pos, &[0, 3]).unwrap();
        assert_eq!((us, ud), (Sign::Pos, [5, 1]));

        let (mut us, mut ud) = (Sign::Pos, [1]);
        assert_eq!(
            mod_on_help(S, &mut us, 16, &mut ud, Sign::Pos, &[0, 0]),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn bitwise() {
        // -1 & 6 = 6
        let (mut us, mut ud) = (Sign::Neg, [1]);
        and_on_help(S, &mut us, 8, &mut ud, Sign::Pos, &[6]);
        assert_eq!((us, ud), (Sign::Pos, [6]));

        // 0b1100 | 0b0011 = 15
        let (mut us, mut ud) = (Sign::Pos, [0b1100]);
        or_on_help(U, &mut us, 8, &mut ud, Sign::Pos, &[0b0011]);
        assert_eq!((us, ud), (Sign::Pos, [15]));

        // 5 ^ -1 = -6
        let (mut us, mut ud) = (Sign::Pos, [5]);
        xor_on_help(S, &mut us, 8, &mut ud, Sign::Neg, &[1]);
        assert_eq!((us, ud), (Sign::Neg, [6]));

        // unsigned: 0xF0 ^ -1 = 0x0F
        let (mut us, mut ud) = (Sign::Pos, [0xF0]);
        xor_on_help(U, &mut us, 8, &mut ud, Sign::Neg, &[1]);
        assert_eq!((us, ud), (Sign::Pos, [0x0F]));
    }
}
