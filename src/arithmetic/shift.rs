use core::cmp::min;

use zeroize::Zeroizing;

use crate::digit::{bit_ord, digit_ord, one_and_ones, one_and_zeros, Digit, BITS_PER_DIGIT};
use crate::{Error, Result};

/// u <<= nsl, truncating at the top of `u`.
///
/// Note that "left" means "higher number".
pub fn vec_shift_left(u: &mut [Digit], nsl: usize) {
    if nsl == 0 {
        return;
    }

    let ulen = u.len();

    // shift whole digits
    let nd = min(digit_ord(nsl), ulen);
    if nd > 0 {
        u.copy_within(..ulen - nd, nd);
        u[..nd].fill(0);
    }

    // shift the sub-digit amount of bits
    let nsl = bit_ord(nsl);
    if nsl == 0 {
        return;
    }

    let nsr = BITS_PER_DIGIT - nsl;
    let mask = one_and_ones(nsr);

    let mut carry = 0;
    for elem in u[nd..].iter_mut() {
        let val = *elem;
        *elem = ((val & mask) << nsl) | carry;
        carry = val >> nsr;
    }
}

/// u >>= nsr, vacated bits set from `fill`.
///
/// `fill` is `0` for a logical shift and `DIGIT_MASK` to extend a set sign
/// bit. Note that "right" means "lower number".
pub fn vec_shift_right(u: &mut [Digit], nsr: usize, fill: Digit) {
    if nsr == 0 {
        return;
    }

    let ulen = u.len();

    let nd = min(digit_ord(nsr), ulen);
    if nd > 0 {
        u.copy_within(nd.., 0);
        u[ulen - nd..].fill(fill);
    }

    let nsr = bit_ord(nsr);
    if nsr == 0 {
        return;
    }

    let nsl = BITS_PER_DIGIT - nsr;
    let mask = one_and_ones(nsr);

    let mut carry = (fill & mask) << nsl;
    for elem in u.iter_mut().rev() {
        let val = *elem;
        *elem = (val >> nsr) | carry;
        carry = (val & mask) << nsl;
    }
}

#[inline]
fn test_bit(u: &[Digit], i: usize) -> bool {
    u[digit_ord(i)] & one_and_zeros(bit_ord(i)) != 0
}

#[inline]
fn set_bit(u: &mut [Digit], i: usize, bit: bool) {
    let mask = one_and_zeros(bit_ord(i));
    if bit {
        u[digit_ord(i)] |= mask;
    } else {
        u[digit_ord(i)] &= !mask;
    }
}

/// Reverse the bits `l` down to `r` of the `nb`-bit value in `d`, in place.
///
/// `l` is clamped to the top bit `nb - 1`.
pub fn vec_reverse(nb: usize, d: &mut [Digit], l: usize, r: usize) -> Result<()> {
    if l < r {
        error!("Ensure that left index {} >= right index {}", l, r);
        return Err(Error::InvalidRange { left: l, right: r });
    }
    if nb == 0 {
        return Ok(());
    }

    let l = min(l, nb - 1);

    let snapshot = Zeroizing::new(d.to_vec());

    for (i, j) in (r..=l).rev().zip(r..) {
        set_bit(d, j, test_bit(&snapshot, i));
    }

    Ok(())
}
