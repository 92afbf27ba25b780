//! Field tags: a field number and a wire type packed into one varint.

use crate::{DecodeError, EncodeError};

/// Largest encodable field number; the field number occupies the tag varint
/// above the 3 wire-type bits and protobuf caps it at 29 bits.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How a field's value bytes are framed on the wire.
///
/// The discriminants are the on-wire codes. Codes 3 and 4 (the deprecated
/// group markers) and 6..=7 are not part of the format and decode to
/// [`DecodeError::UnknownWireType`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// LEB128 varint; signed values are zigzag coded first.
    Varint = 0,
    /// 8 bytes, little-endian.
    Fixed64 = 1,
    /// Varint byte length followed by that many raw bytes.
    LengthDelimited = 2,
    /// 4 bytes, little-endian.
    Fixed32 = 5,
}

impl WireType {
    /// Map an on-wire code to a wire type.
    #[inline]
    pub fn from_code(code: u8) -> Result<Self, DecodeError> {
        match code {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(DecodeError::UnknownWireType(other)),
        }
    }
}

/// Pack `field_number` and `wire_type` into a tag value ready for varint
/// coding.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidFieldNumber`] if `field_number` is zero or
/// exceeds [`MAX_FIELD_NUMBER`].
#[inline]
pub fn encode_tag(field_number: u32, wire_type: WireType) -> Result<u64, EncodeError> {
    if field_number == 0 || field_number > MAX_FIELD_NUMBER {
        return Err(EncodeError::InvalidFieldNumber(field_number));
    }
    Ok(u64::from(field_number) << 3 | wire_type as u64)
}

/// Unpack a decoded tag varint into its field number and wire type.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownWireType`] for wire-type codes outside the
/// defined set. A field number too wide for `u32` cannot come from a
/// conforming encoder and is reported as [`DecodeError::MalformedVarint`].
#[inline]
pub fn decode_tag(tag: u64) -> Result<(u32, WireType), DecodeError> {
    let wire_type = WireType::from_code((tag & 0b111) as u8)?;
    let field_number = u32::try_from(tag >> 3).map_err(|_| DecodeError::MalformedVarint)?;
    Ok((field_number, wire_type))
}
