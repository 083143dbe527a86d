//! Digit radix <-> byte radix.
//!
//! Byte vectors are little-endian base-256 magnitudes. Digit boundaries do
//! not fall on byte boundaries, so bytes straddling two digits are stitched.

use alloc::{vec, vec::Vec};

use crate::digit::{one_and_ones, Digit, BITS_PER_BYTE, BITS_PER_DIGIT, BYTE_MASK};
use crate::{Error, Result};

/// Number of bytes `vec_to_char` produces for `ulen` digits.
#[inline]
pub const fn bytes_for_digits(ulen: usize) -> usize {
    (ulen * BITS_PER_DIGIT + BITS_PER_BYTE - 1) / BITS_PER_BYTE
}

/// Write `u` to `v` in byte radix, returning the number of bytes written.
pub fn vec_to_char(u: &[Digit], v: &mut [u8]) -> Result<usize> {
    let vlen = bytes_for_digits(u.len());
    if v.len() < vlen {
        return Err(Error::BufferTooSmall { needed: vlen, actual: v.len() });
    }

    write_bytes(u, &mut v[..vlen]);
    Ok(vlen)
}

/// `u` in byte radix, all `bytes_for_digits(u.len())` bytes of it.
pub fn vec_to_bytes(u: &[Digit]) -> Vec<u8> {
    let mut v = vec![0; bytes_for_digits(u.len())];
    write_bytes(u, &mut v);
    v
}

/// - `v.len() == bytes_for_digits(u.len())`
fn write_bytes(u: &[Digit], v: &mut [u8]) {
    debug_assert_eq!(v.len(), bytes_for_digits(u.len()));

    for (k, byte) in v.iter_mut().enumerate() {
        let right = k * BITS_PER_BYTE;
        let left = right + BITS_PER_BYTE - 1;

        let right_digit = right / BITS_PER_DIGIT;
        let left_digit = left / BITS_PER_DIGIT;
        let nsr = right % BITS_PER_DIGIT;

        let mut d = u[right_digit] >> nsr;
        // the byte straddles two digits
        if left_digit != right_digit && left_digit < u.len() {
            d |= u[left_digit] << (BITS_PER_DIGIT - nsr);
        }

        *byte = (d & BYTE_MASK) as u8;
    }
}

/// Read the byte-radix `u` into `v`; bits that do not fit in `v` are lost.
///
/// Bytes are taken from the most significant down, shifting all of `v` up
/// one byte for each.
pub fn vec_from_char(u: &[u8], v: &mut [Digit]) {
    v.fill(0);

    let (top, rest) = match u.split_last() {
        Some(split) => split,
        None => return,
    };
    if v.is_empty() {
        return;
    }

    const NSR: usize = BITS_PER_DIGIT - BITS_PER_BYTE;
    let mask = one_and_ones(NSR);

    v[0] = *top as Digit;

    for &byte in rest.iter().rev() {
        let mut carry = 0;
        for d in v.iter_mut() {
            let val = *d;
            *d = ((val & mask) << BITS_PER_BYTE) | carry;
            carry = val >> NSR;
        }

        v[0] |= byte as Digit;
    }
}
