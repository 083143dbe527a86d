use crate::digit::{concat, high_half, low_half, Digit, HALF_DIGIT_RADIX, HALF_DIGIT_MASK};

/// w += u * v, schoolbook, on half digits.
///
/// A full digit times a full digit does not fit in a digit, so every digit
/// is split as `A|B` (high and low half) and every product `A|B * C|D`
/// is accumulated as
///
/// ```text
/// prod_l = w + B*D + low(carry)
/// prod_h = A*D + B*C + high(prod_l) + high(carry)
/// w      = low(prod_h)|low(prod_l)
/// carry  = A*C + high(prod_h)
/// ```
///
/// None of `prod_l`, `prod_h`, `carry` exceeds `2 * HALF_DIGIT_RADIX^2`,
/// which the digit's head room holds.
///
/// - `w.len() >= u.len() + v.len()`, zeroed by the caller for a plain product
pub fn vec_mul(u: &[Digit], v: &[Digit], w: &mut [Digit]) {
    debug_assert!(w.len() >= u.len() + v.len());

    for (i, &u_ab) in u.iter().enumerate() {
        let u_l = low_half(u_ab); // B
        let u_h = high_half(u_ab); // A
        debug_assert_eq!(u_h, u_h & HALF_DIGIT_MASK);

        let mut carry: Digit = 0;
        let row = &mut w[i..];

        for (w, &v_cd) in row.iter_mut().zip(v) {
            let v_l = low_half(v_cd); // D
            let v_h = high_half(v_cd); // C
            debug_assert_eq!(v_h, v_h & HALF_DIGIT_MASK);

            let prod_l = *w + u_l * v_l + low_half(carry);
            let prod_h = u_h * v_l + u_l * v_h + high_half(prod_l) + high_half(carry);

            *w = concat(low_half(prod_h), low_half(prod_l));

            carry = u_h * v_h + high_half(prod_h);
        }

        row[v.len()] = carry;
    }
}

/// w = u * v, for a scalar `0 < v < HALF_DIGIT_RADIX`.
///
/// - `w.len() >= u.len() + 1`
pub fn vec_mul_small(u: &[Digit], v: Digit, w: &mut [Digit]) {
    debug_assert!(0 < v && v < HALF_DIGIT_RADIX);

    let mut carry: Digit = 0;
    for (w, &u_ab) in w.iter_mut().zip(u) {
        *w = mul_small_digit(u_ab, v, &mut carry);
    }

    w[u.len()] = carry;
}

/// u *= v, for a scalar `0 < v < HALF_DIGIT_RADIX`, returning the carry out of `u`.
pub fn vec_mul_small_on(u: &mut [Digit], v: Digit) -> Digit {
    debug_assert!(0 < v && v < HALF_DIGIT_RADIX);

    let mut carry: Digit = 0;
    for u in u.iter_mut() {
        *u = mul_small_digit(*u, v, &mut carry);
    }

    if carry != 0 {
        warn!("Result of multiplication (in vec_mul_small_on) is wrapped around.");
    }
    carry
}

#[inline]
fn mul_small_digit(u_ab: Digit, v: Digit, carry: &mut Digit) -> Digit {
    let prod_l = v * low_half(u_ab) + low_half(*carry);
    let prod_h = v * high_half(u_ab) + high_half(prod_l) + high_half(*carry);

    *carry = high_half(prod_h);
    concat(low_half(prod_h), low_half(prod_l))
}
