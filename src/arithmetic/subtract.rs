use crate::digit::{Digit, BITS_PER_DIGIT, DIGIT_MASK, DIGIT_RADIX};

/// Subtract with borrow.
///
/// `a + RADIX - b - borrow` never goes negative in the digit type; the bit
/// at `BITS_PER_DIGIT` is set exactly when no borrow was needed.
#[inline]
pub fn sbb(a: Digit, b: Digit, borrow: &mut Digit) -> Digit {
    let diff = (a + DIGIT_RADIX) - b - *borrow;
    *borrow = 1 - (diff >> BITS_PER_DIGIT);
    diff & DIGIT_MASK
}

/// w = u - v
///
/// - `u >= v` as magnitudes, `u.len() >= v.len()`
/// - `w.len() >= u.len()`
pub fn vec_sub(u: &[Digit], v: &[Digit], w: &mut [Digit]) {
    debug_assert!(u.len() >= v.len());

    let mut borrow = 0;
    let (u_lo, u_hi) = u.split_at(v.len());

    for ((w, u), v) in w.iter_mut().zip(u_lo).zip(v) {
        *w = sbb(*u, *v, &mut borrow);
    }

    for (w, u) in w[v.len()..].iter_mut().zip(u_hi) {
        *w = sbb(*u, 0, &mut borrow);
    }

    debug_assert_eq!(borrow, 0);
}

/// u -= v, returning the borrow out of `u` (zero when `u >= v`).
///
/// - `u.len() >= v.len()`
pub fn vec_sub_on(u: &mut [Digit], v: &[Digit]) -> Digit {
    debug_assert!(u.len() >= v.len());

    let mut borrow = 0;
    let (u_lo, u_hi) = u.split_at_mut(v.len());

    for (u, v) in u_lo.iter_mut().zip(v) {
        *u = sbb(*u, *v, &mut borrow);
    }

    for u in u_hi {
        if borrow == 0 {
            break;
        }
        *u = sbb(*u, 0, &mut borrow);
    }

    if borrow != 0 {
        warn!("Result of subtraction (in vec_sub_on) is wrapped around.");
    }
    borrow
}

/// u = v - u, over the digits the two have in common.
///
/// - `v >= u` as magnitudes; either may be the longer
pub fn vec_sub_on2(u: &mut [Digit], v: &[Digit]) -> Digit {
    let mut borrow = 0;
    for (u, v) in u.iter_mut().zip(v) {
        *u = sbb(*v, *u, &mut borrow);
    }

    if borrow != 0 {
        warn!("Result of subtraction (in vec_sub_on2) is wrapped around.");
    }
    borrow
}

/// w = u - v, for a scalar `v <= u`.
///
/// - `u` is not empty, `w.len() >= u.len()`
pub fn vec_sub_small(u: &[Digit], v: Digit, w: &mut [Digit]) {
    debug_assert!(!u.is_empty());

    let mut borrow = 0;
    let mut subtrahend = v;
    for (w, u) in w.iter_mut().zip(u) {
        *w = sbb(*u, subtrahend, &mut borrow);
        subtrahend = 0;
    }

    debug_assert_eq!(borrow, 0);
}

/// u -= v, for a scalar `v`, returning the borrow out of `u`.
pub fn vec_sub_small_on(u: &mut [Digit], v: Digit) -> Digit {
    let mut borrow = v;
    for u in u.iter_mut() {
        if borrow == 0 {
            break;
        }
        let b = borrow;
        borrow = 0;
        *u = sbb(*u, b, &mut borrow);
    }

    if borrow != 0 {
        warn!("Result of subtraction (in vec_sub_small_on) is wrapped around.");
    }
    borrow
}
