//! This crate implements a schema-less, forward-compatible binary message
//! codec using the [protobuf wire format](https://protobuf.dev/programming-guides/encoding/).
//!
//! A message is a flat concatenation of fields. Each field is a varint tag
//! packing a field number together with a [`WireType`], followed by the value
//! bytes framed the way that wire type dictates: LEB128 varints (zigzag coded
//! for signed values so small negative numbers stay small), little-endian
//! fixed 32/64-bit values (including float bit patterns), or a varint length
//! prefix followed by raw bytes.
//!
//! The codec carries no schema. [`MessageEncoder`] appends typed, numbered
//! fields in call order; [`MessageDecoder`] walks the buffer one field at a
//! time and hands back `(field number, value)` pairs for the caller to
//! interpret. Field numbers the receiver does not recognize can be skipped
//! exactly, by wire type alone, which is what lets an old reader consume a
//! message written by a newer producer.
//!
//! ```
//! use tagwire::{MessageDecoder, MessageEncoder, FieldValue};
//!
//! let mut enc = MessageEncoder::new();
//! enc.put_uint64(1, 300)?;
//! enc.put_string(2, "hello")?;
//! enc.put_float(3, 3.14)?;
//! let wire = enc.finish();
//!
//! let mut dec = MessageDecoder::new(&wire);
//! let field = dec.next_field()?.unwrap();
//! assert_eq!((field.number, field.value.as_u64()), (1, Some(300)));
//! let field = dec.next_field()?.unwrap();
//! assert_eq!(field.value.as_str(), Some("hello"));
//! let field = dec.next_field()?.unwrap();
//! assert_eq!(field.value.as_f32(), Some(3.14));
//! assert!(dec.next_field()?.is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
mod decoder;
mod encoder;
mod error;
mod varint;
mod wire;

pub use crate::decoder::{Field, FieldValue, MessageDecoder};
pub use crate::encoder::MessageEncoder;
pub use crate::error::{DecodeError, EncodeError};
pub use crate::varint::{decode_uvarint, put_uvarint, uvarint_len, zigzag_decode, zigzag_encode};
pub use crate::wire::{decode_tag, encode_tag, WireType, MAX_FIELD_NUMBER};

/// Maximum number of bytes a single encoded uvarint will occupy.
pub const MAX_VARINT_LEN: usize = 10;
