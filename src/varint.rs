//! LEB128 varint and zigzag primitives.
//!
//! Values are coded in groups of 7 bits, least-significant group first, with
//! the high bit of each output byte set while more groups follow. A u64 never
//! needs more than [`MAX_VARINT_LEN`] bytes.

use bytes::BufMut;

use crate::{DecodeError, MAX_VARINT_LEN};

/// Return the number of bytes required to encode `v` in `[1, MAX_VARINT_LEN]`.
#[inline]
pub const fn uvarint_len(v: u64) -> usize {
    // ceil(bit_length / 7); `v | 1` makes zero one bit long.
    (64 - (v | 1).leading_zeros() as usize + 6) / 7
}

/// Varint code `v` and append it to `buf`.
#[inline]
pub fn put_uvarint<B: BufMut>(buf: &mut B, mut v: u64) {
    while v >= 0x80 {
        buf.put_u8(v as u8 | 0x80);
        v >>= 7;
    }
    buf.put_u8(v as u8);
}

/// Decode a varint from the front of `buf`, returning the value and the
/// number of bytes consumed (always at least 1).
///
/// # Errors
///
/// Returns [`DecodeError::MalformedVarint`] if `buf` is empty, ends before a
/// terminating byte, or no terminator appears within [`MAX_VARINT_LEN`] bytes.
#[inline]
pub fn decode_uvarint(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().take(MAX_VARINT_LEN).enumerate() {
        value |= u64::from(byte & 0x7f) << (i * 7);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::MalformedVarint)
}

/// Maps signed values to unsigned ones, alternating between non-negative and
/// negative: 0, -1, 1, -2, 2, ... This keeps small-magnitude values of either
/// sign small in varint form.
#[inline]
pub const fn zigzag_encode(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// Inverts `zigzag_encode()`.
#[inline]
pub const fn zigzag_decode(v: u64) -> i64 {
    (v >> 1) as i64 ^ -((v & 1) as i64)
}
