use crate::digit::{Digit, BITS_PER_DIGIT, DIGIT_MASK};

/// Add with carry, the carry living in the digit's head room.
#[inline]
pub fn adc(a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    *carry += a + b;
    let lo = *carry & DIGIT_MASK;
    *carry >>= BITS_PER_DIGIT;
    lo
}

/// w = u + v
///
/// - `u.len() >= v.len()`
/// - `w.len() >= u.len() + 1` whenever the sum can carry out of `u`;
///   the top digit of `w` is only written if it does.
pub fn vec_add(u: &[Digit], v: &[Digit], w: &mut [Digit]) {
    debug_assert!(u.len() >= v.len());

    let mut carry = 0;
    let (u_lo, u_hi) = u.split_at(v.len());

    // add along the shorter v
    for ((w, u), v) in w.iter_mut().zip(u_lo).zip(v) {
        *w = adc(*u, *v, &mut carry);
    }

    // propagate the carry, then copy the rest of u
    for (w, u) in w[v.len()..].iter_mut().zip(u_hi) {
        *w = adc(*u, 0, &mut carry);
    }

    if carry != 0 {
        w[u.len()] = carry;
    }
}

/// u += v, returning the carry out of `u` (zero unless wrapped).
///
/// - `u.len() >= v.len()`
pub fn vec_add_on(u: &mut [Digit], v: &[Digit]) -> Digit {
    debug_assert!(u.len() >= v.len());

    let mut carry = 0;
    let (u_lo, u_hi) = u.split_at_mut(v.len());

    for (u, v) in u_lo.iter_mut().zip(v) {
        *u = adc(*u, *v, &mut carry);
    }

    for u in u_hi {
        if carry == 0 {
            break;
        }
        *u = adc(*u, 0, &mut carry);
    }

    if carry != 0 {
        warn!("Result of addition (in vec_add_on) is wrapped around.");
    }
    carry
}

/// u += v for the shorter accumulator; the digits of `v` above `u` are lost.
///
/// - `u.len() < v.len()`
pub fn vec_add_on2(u: &mut [Digit], v: &[Digit]) -> Digit {
    debug_assert!(u.len() < v.len());

    let mut carry = 0;
    for (u, v) in u.iter_mut().zip(v) {
        *u = adc(*u, *v, &mut carry);
    }

    if carry != 0 {
        warn!("Result of addition (in vec_add_on2) is wrapped around.");
    }
    carry
}

/// w = u + v, for a scalar `v < DIGIT_RADIX`.
///
/// - `u` is not empty
/// - `w.len() >= u.len() + 1` whenever the sum can carry out of `u`
pub fn vec_add_small(u: &[Digit], v: Digit, w: &mut [Digit]) {
    debug_assert!(!u.is_empty());

    let mut carry = v;
    for (w, u) in w.iter_mut().zip(u) {
        *w = adc(*u, 0, &mut carry);
    }

    if carry != 0 {
        w[u.len()] = carry;
    }
}

/// u += v, for a scalar `v < DIGIT_RADIX`, returning the carry out of `u`.
pub fn vec_add_small_on(u: &mut [Digit], v: Digit) -> Digit {
    let mut carry = v;
    for u in u.iter_mut() {
        if carry == 0 {
            break;
        }
        *u = adc(*u, 0, &mut carry);
    }

    if carry != 0 {
        warn!("Result of addition (in vec_add_small_on) is wrapped around.");
    }
    carry
}
