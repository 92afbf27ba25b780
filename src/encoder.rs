//! Message construction: typed, numbered fields appended to one buffer.

use bytes::{BufMut, Bytes, BytesMut};

use crate::varint::{put_uvarint, zigzag_encode};
use crate::wire::{encode_tag, WireType};
use crate::EncodeError;

/// Builds one wire-format message by appending fields in call order.
///
/// Fields may repeat: writing the same field number twice appends two
/// occurrences, which is how repeated values are represented, and occurrence
/// order is preserved. The encoder performs no deduplication and enforces no
/// ordering by field number.
///
/// [`finish`] consumes the encoder, so one instance builds exactly one
/// logical message; two messages can never be mixed into one buffer.
///
/// [`finish`]: MessageEncoder::finish
#[derive(Clone, Debug, Default)]
pub struct MessageEncoder {
    buf: BytesMut,
}

impl MessageEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    fn put_tag(&mut self, field_number: u32, wire_type: WireType) -> Result<(), EncodeError> {
        let tag = encode_tag(field_number, wire_type)?;
        put_uvarint(&mut self.buf, tag);
        Ok(())
    }

    /// Append an unsigned varint field.
    pub fn put_uint64(&mut self, field_number: u32, value: u64) -> Result<(), EncodeError> {
        self.put_tag(field_number, WireType::Varint)?;
        put_uvarint(&mut self.buf, value);
        Ok(())
    }

    /// Append a signed varint field, zigzag coded so small negative values
    /// encode compactly.
    pub fn put_sint64(&mut self, field_number: u32, value: i64) -> Result<(), EncodeError> {
        self.put_uint64(field_number, zigzag_encode(value))
    }

    /// Append a bool field as varint 0 or 1.
    pub fn put_bool(&mut self, field_number: u32, value: bool) -> Result<(), EncodeError> {
        self.put_uint64(field_number, u64::from(value))
    }

    /// Append a 4-byte little-endian field.
    pub fn put_fixed32(&mut self, field_number: u32, value: u32) -> Result<(), EncodeError> {
        self.put_tag(field_number, WireType::Fixed32)?;
        self.buf.put_u32_le(value);
        Ok(())
    }

    /// Append an 8-byte little-endian field.
    pub fn put_fixed64(&mut self, field_number: u32, value: u64) -> Result<(), EncodeError> {
        self.put_tag(field_number, WireType::Fixed64)?;
        self.buf.put_u64_le(value);
        Ok(())
    }

    /// Append an `f32` field through its IEEE-754 bit pattern.
    pub fn put_float(&mut self, field_number: u32, value: f32) -> Result<(), EncodeError> {
        self.put_fixed32(field_number, value.to_bits())
    }

    /// Append an `f64` field through its IEEE-754 bit pattern.
    pub fn put_double(&mut self, field_number: u32, value: f64) -> Result<(), EncodeError> {
        self.put_fixed64(field_number, value.to_bits())
    }

    /// Append a length-delimited field: varint byte length, then the bytes
    /// verbatim.
    pub fn put_bytes(&mut self, field_number: u32, value: &[u8]) -> Result<(), EncodeError> {
        self.put_tag(field_number, WireType::LengthDelimited)?;
        put_uvarint(&mut self.buf, value.len() as u64);
        self.buf.put_slice(value);
        Ok(())
    }

    /// Append a string field as its UTF-8 bytes.
    pub fn put_string(&mut self, field_number: u32, value: &str) -> Result<(), EncodeError> {
        self.put_bytes(field_number, value.as_bytes())
    }

    /// Number of bytes encoded so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The bytes encoded so far. `finish` returns exactly these bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder and return the completed message.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}
