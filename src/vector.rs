//! Digit buffer primitives.
//!
//! All vec_ functions assume the buffer holding the result is sized by
//! the caller for the worst case; they never grow it.

use core::{cmp::Ordering, fmt};

use ref_cast::RefCast;

use crate::digit::{Digit, DIGIT_MASK, BITS_PER_DIGIT};

/// Set all of `u` to zero.
#[inline]
pub fn vec_zero(u: &mut [Digit]) {
    u.fill(0);
}

/// Set `u[from..to]` to zero.
#[inline]
pub fn vec_zero_range(from: usize, to: usize, u: &mut [Digit]) {
    u[from..to].fill(0);
}

/// Copy `v` into the low digits of `u`.
#[inline]
pub fn vec_copy(u: &mut [Digit], v: &[Digit]) {
    u[..v.len()].copy_from_slice(v);
}

/// Copy `v` into `u`, zeroing the digits of `u` that `v` does not reach.
pub fn vec_copy_and_zero(u: &mut [Digit], v: &[Digit]) {
    let l = core::cmp::min(u.len(), v.len());
    u[..l].copy_from_slice(&v[..l]);
    u[l..].fill(0);
}

#[inline]
pub fn vec_all_zero(u: &[Digit]) -> bool {
    u.iter().all(|&d| d == 0)
}

/// Index of the most significant non-zero digit, `None` if all are zero.
#[inline]
pub fn vec_find_first_nonzero(u: &[Digit]) -> Option<usize> {
    u.iter().rposition(|&d| d != 0)
}

/// Length of `u` without its leading (most significant) zero digits.
#[inline]
pub fn vec_skip_leading_zeros(u: &[Digit]) -> usize {
    vec_find_first_nonzero(u).map(|i| i + 1).unwrap_or(0)
}

/// Compare magnitudes; leading zeros do not count.
pub fn vec_cmp(u: &[Digit], v: &[Digit]) -> Ordering {
    let u = &u[..vec_skip_leading_zeros(u)];
    let v = &v[..vec_skip_leading_zeros(v)];

    match u.len().cmp(&v.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    // little endian, so start at the top
    for (a, b) in u.iter().rev().zip(v.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

/// Replace `u` by its two's complement modulo `DIGIT_RADIX^u.len()`.
pub fn vec_complement(u: &mut [Digit]) {
    let mut carry: Digit = 1;
    for d in u.iter_mut() {
        carry += !*d & DIGIT_MASK;
        *d = carry & DIGIT_MASK;
        carry >>= BITS_PER_DIGIT;
    }
}

/// A digit slice viewed as a magnitude.
///
/// The derived orderings on slices are lexicographic from index 0, which is
/// wrong for little-endian digits; this newtype compares from the top.
#[derive(RefCast)]
#[repr(transparent)]
pub struct Magnitude([Digit]);

impl Magnitude {
    pub fn new(digits: &[Digit]) -> &Self {
        Self::ref_cast(digits)
    }

    pub fn significant_digits(&self) -> &[Digit] {
        &self.0[..vec_skip_leading_zeros(&self.0)]
    }

    pub fn is_zero(&self) -> bool {
        vec_all_zero(&self.0)
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl Eq for Magnitude {}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        vec_cmp(&self.0, &other.0)
    }
}

impl fmt::Debug for Magnitude {
    /// Most significant digit first, in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for d in self.significant_digits().iter().rev() {
            list.entry(&format_args!("{:X}", d));
        }
        list.finish()
    }
}
