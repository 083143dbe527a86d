use alloc::{vec, vec::Vec};

use zeroize::Zeroizing;

use crate::arithmetic::radix::{vec_from_char, vec_to_char};
use crate::digit::{concat, high_half, low_half, Digit, BYTES_PER_DIGIT, BYTE_MASK, BYTE_RADIX, HALF_DIGIT_RADIX};
use crate::{Error, Result};

/// Divide the digit `u_ab` (with the running remainder `r` on top) by `v`.
///
/// Both halves are divided separately, so every intermediate numerator is
/// `concat(r, half) < DIGIT_RADIX` as long as `v < HALF_DIGIT_RADIX`.
#[inline]
fn div_small_digit(u_ab: Digit, v: Digit, r: &mut Digit) -> Digit {
    let num = concat(*r, high_half(u_ab));
    let q_h = num / v;

    let num = concat(num % v, low_half(u_ab));
    *r = num % v;

    concat(q_h, num / v)
}

/// q = u / v, for a scalar `0 < v < HALF_DIGIT_RADIX`.
///
/// - `q.len() >= u.len()`
pub fn vec_div_small(u: &[Digit], v: Digit, q: &mut [Digit]) {
    debug_assert!(0 < v && v < HALF_DIGIT_RADIX);

    let mut r = 0;
    for i in (0..u.len()).rev() {
        q[i] = div_small_digit(u[i], v, &mut r);
    }
}

/// u % v, for a scalar `0 < v < HALF_DIGIT_RADIX`.
pub fn vec_rem_small(u: &[Digit], v: Digit) -> Digit {
    debug_assert!(0 < v && v < HALF_DIGIT_RADIX);

    let mut r = 0;
    for &u_ab in u.iter().rev() {
        div_small_digit(u_ab, v, &mut r);
    }
    r
}

/// u /= v, returning u % v, for a scalar `0 < v < HALF_DIGIT_RADIX`.
pub fn vec_rem_on_small(u: &mut [Digit], v: Digit) -> Digit {
    debug_assert!(0 < v && v < HALF_DIGIT_RADIX);

    let mut r = 0;
    for u_ab in u.iter_mut().rev() {
        *u_ab = div_small_digit(*u_ab, v, &mut r);
    }
    r
}

/// Quotient and remainder of a long division, both in byte radix.
struct ByteDivision {
    /// the dividend, reduced to the remainder in its low `ylen` bytes
    x: Zeroizing<Vec<u8>>,
    ylen: usize,
    q: Zeroizing<Vec<u8>>,
}

/// `u` in byte radix with one spare zero byte on top, and its trimmed length.
fn to_bytes(u: &[Digit]) -> Result<(Zeroizing<Vec<u8>>, usize)> {
    let mut x = Zeroizing::new(vec![0u8; BYTES_PER_DIGIT * u.len() + 1]);
    let n = vec_to_char(u, &mut x)?;
    let len = x[..n].iter().rposition(|&b| b != 0).map(|i| i + 1).unwrap_or(0);
    Ok((x, len))
}

/// Schoolbook division in base 256.
///
/// Each quotient byte is estimated from the top three bytes of the current
/// window of `x` and the top two bytes of `y`. The estimate is never low and
/// at most one too high, which the add-back step corrects.
fn byte_long_division(u: &[Digit], v: &[Digit]) -> Result<ByteDivision> {
    let (mut x, xlen) = to_bytes(u)?;
    let (y, ylen) = to_bytes(v)?;

    if ylen == 0 {
        error!("Division by zero.");
        return Err(Error::DivisionByZero);
    }

    if xlen < ylen {
        return Ok(ByteDivision { x, ylen, q: Zeroizing::new(vec![]) });
    }

    let mut q = Zeroizing::new(vec![0u8; xlen - ylen + 1]);

    // a one byte divisor is estimated exactly from two dividend bytes
    let y2 = if ylen == 1 {
        y[0] as Digit
    } else {
        ((y[ylen - 1] as Digit) << 8) + y[ylen - 2] as Digit
    };

    for k in (0..=xlen - ylen).rev() {
        let k2 = k + ylen;

        let window = if ylen == 1 {
            ((x[k2] as Digit) << 8) + x[k2 - 1] as Digit
        } else {
            ((x[k2] as Digit) << 16) + ((x[k2 - 1] as Digit) << 8) + x[k2 - 2] as Digit
        };

        let mut qk = core::cmp::min(window / y2, BYTE_MASK);

        if qk != 0 {
            let xk = &mut x[k..];

            // xk -= y * qk
            let mut carry: Digit = 0;
            for i in 0..ylen {
                carry += y[i] as Digit * qk;
                let diff = (xk[i] as Digit + BYTE_RADIX) - (carry & BYTE_MASK);
                xk[i] = (diff & BYTE_MASK) as u8;
                carry = (carry >> 8) + (1 - (diff >> 8));
            }

            if carry != 0 {
                let diff = (xk[ylen] as Digit + BYTE_RADIX) - carry;
                xk[ylen] = (diff & BYTE_MASK) as u8;
                carry = 1 - (diff >> 8);
            }

            // estimate was one too high: xk += y
            if carry != 0 {
                qk -= 1;
                carry = 0;
                for i in 0..ylen {
                    carry += xk[i] as Digit + y[i] as Digit;
                    xk[i] = (carry & BYTE_MASK) as u8;
                    carry >>= 8;
                }
                if carry != 0 {
                    xk[ylen] = ((xk[ylen] as Digit + 1) & BYTE_MASK) as u8;
                }
            }
        }

        q[k] = qk as u8;
    }

    Ok(ByteDivision { x, ylen, q })
}

/// w = u / v, for any non-zero `v`.
///
/// - `w.len() >= u.len()` (or the quotient is cut to `w`)
pub fn vec_div_large(u: &[Digit], v: &[Digit], w: &mut [Digit]) -> Result<()> {
    let division = byte_long_division(u, v)?;
    vec_from_char(&division.q, w);
    Ok(())
}

/// w = u % v, for any non-zero `v`.
///
/// - `w.len() >= v.len()`
pub fn vec_rem_large(u: &[Digit], v: &[Digit], w: &mut [Digit]) -> Result<()> {
    let division = byte_long_division(u, v)?;
    let rlen = core::cmp::min(division.ylen, division.x.len());
    vec_from_char(&division.x[..rlen], w);
    Ok(())
}
