//! Message decoding: a single-pass cursor over one immutable byte buffer.

use crate::varint::{decode_uvarint, zigzag_decode};
use crate::wire::{decode_tag, WireType};
use crate::DecodeError;

/// One decoded value, framed per its wire type.
///
/// The codec does not know field semantics; the caller projects the raw value
/// into its schema's type with the `as_*` accessors (or pattern-matches).
/// Length-delimited payloads borrow from the decoder's input buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Varint(u64),
    Fixed64(u64),
    LengthDelimited(&'a [u8]),
    Fixed32(u32),
}

impl<'a> FieldValue<'a> {
    /// The wire type this value was framed with.
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldValue::Varint(_) => WireType::Varint,
            FieldValue::Fixed64(_) => WireType::Fixed64,
            FieldValue::LengthDelimited(_) => WireType::LengthDelimited,
            FieldValue::Fixed32(_) => WireType::Fixed32,
        }
    }

    /// The value as an unsigned varint integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            FieldValue::Varint(v) => Some(v),
            _ => None,
        }
    }

    /// The value as a zigzag-coded signed integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_u64().map(zigzag_decode)
    }

    /// The value as a bool (varint 0 is false, anything else true).
    pub fn as_bool(&self) -> Option<bool> {
        self.as_u64().map(|v| v != 0)
    }

    pub fn as_fixed32(&self) -> Option<u32> {
        match *self {
            FieldValue::Fixed32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_fixed64(&self) -> Option<u64> {
        match *self {
            FieldValue::Fixed64(v) => Some(v),
            _ => None,
        }
    }

    /// The value as an `f32` read from a fixed32 bit pattern.
    pub fn as_f32(&self) -> Option<f32> {
        self.as_fixed32().map(f32::from_bits)
    }

    /// The value as an `f64` read from a fixed64 bit pattern.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_fixed64().map(f64::from_bits)
    }

    /// The raw bytes of a length-delimited value.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            FieldValue::LengthDelimited(b) => Some(b),
            _ => None,
        }
    }

    /// A length-delimited value as UTF-8 text; `None` if it is not
    /// length-delimited or not valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// One field read event: the field number and its framed value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Field<'a> {
    pub number: u32,
    pub value: FieldValue<'a>,
}

/// Walks the fields of one wire-format message, strictly forward.
///
/// The cursor only ever advances; there is no rewind and no lookahead past
/// the current field. Reaching the end of the buffer between fields is the
/// normal end of message, not an error. The decoder borrows the input and
/// never mutates it, so independent decoders may read the same buffer from
/// separate threads.
///
/// ```
/// use tagwire::{MessageDecoder, MessageEncoder};
///
/// let mut enc = MessageEncoder::new();
/// enc.put_uint64(1, 42)?;
/// enc.put_uint64(1, 43)?;
/// let wire = enc.finish();
///
/// let occurrences: Result<Vec<_>, _> = MessageDecoder::new(&wire)
///     .map(|f| f.map(|f| f.value.as_u64().unwrap()))
///     .collect();
/// assert_eq!(occurrences?, vec![42, 43]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct MessageDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> MessageDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to decode.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_uvarint(&mut self) -> Result<u64, DecodeError> {
        let (value, consumed) = decode_uvarint(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::UnexpectedEndOfInput {
                needed: n,
                available: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read the next field's tag, or `None` at end of message.
    pub fn read_tag(&mut self) -> Result<Option<(u32, WireType)>, DecodeError> {
        if self.remaining() == 0 {
            return Ok(None);
        }
        let tag = self.read_uvarint()?;
        decode_tag(tag).map(Some)
    }

    /// Read one value framed as `wire_type`, advancing past it.
    pub fn read_value(&mut self, wire_type: WireType) -> Result<FieldValue<'a>, DecodeError> {
        match wire_type {
            WireType::Varint => self.read_uvarint().map(FieldValue::Varint),
            WireType::Fixed64 => {
                let bytes = self.take(8)?;
                Ok(FieldValue::Fixed64(u64::from_le_bytes(
                    bytes.try_into().unwrap(),
                )))
            }
            WireType::Fixed32 => {
                let bytes = self.take(4)?;
                Ok(FieldValue::Fixed32(u32::from_le_bytes(
                    bytes.try_into().unwrap(),
                )))
            }
            WireType::LengthDelimited => {
                let length = self.read_uvarint()?;
                if length > self.remaining() as u64 {
                    return Err(DecodeError::TruncatedMessage {
                        length,
                        remaining: self.remaining(),
                    });
                }
                self.take(length as usize).map(FieldValue::LengthDelimited)
            }
        }
    }

    /// Consume exactly one value framed as `wire_type` without materializing
    /// it.
    ///
    /// This is the forward-compatibility primitive: after [`read_tag`] yields
    /// a field number the caller does not recognize, skipping by wire type
    /// leaves the cursor exactly at the next tag, so the rest of the message
    /// decodes unharmed.
    ///
    /// [`read_tag`]: MessageDecoder::read_tag
    pub fn skip_value(&mut self, wire_type: WireType) -> Result<(), DecodeError> {
        match wire_type {
            WireType::Varint => self.read_uvarint().map(|_| ()),
            WireType::Fixed64 => self.take(8).map(|_| ()),
            WireType::Fixed32 => self.take(4).map(|_| ()),
            WireType::LengthDelimited => {
                let length = self.read_uvarint()?;
                if length > self.remaining() as u64 {
                    return Err(DecodeError::TruncatedMessage {
                        length,
                        remaining: self.remaining(),
                    });
                }
                self.take(length as usize).map(|_| ())
            }
        }
    }

    /// Decode the next field, or `Ok(None)` at end of message.
    ///
    /// This is the sole iteration primitive; callers loop until `None`. Any
    /// sub-codec error bubbles through unchanged.
    pub fn next_field(&mut self) -> Result<Option<Field<'a>>, DecodeError> {
        let (number, wire_type) = match self.read_tag()? {
            Some(tag) => tag,
            None => return Ok(None),
        };
        let value = self.read_value(wire_type)?;
        Ok(Some(Field { number, value }))
    }
}

impl<'a> Iterator for MessageDecoder<'a> {
    type Item = Result<Field<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field().transpose()
    }
}
