use thiserror::Error;

/// Errors that may occur when decoding wire-format bytes.
///
/// All sub-codec failures surface through [`MessageDecoder::next_field`]
/// unchanged; malformed input always yields an error rather than a partial
/// read.
///
/// [`MessageDecoder::next_field`]: crate::MessageDecoder::next_field
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// A varint ran past 10 bytes, or the input ended before a byte with the
    /// continuation bit clear.
    #[error("malformed varint: no terminating byte within {max} bytes of input", max = crate::MAX_VARINT_LEN)]
    MalformedVarint,
    /// A fixed-width read needed more bytes than remain in the buffer.
    #[error("unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEndOfInput { needed: usize, available: usize },
    /// A length-delimited field declared a length that extends past the end
    /// of the buffer.
    #[error("truncated message: field claims {length} bytes, {remaining} remain")]
    TruncatedMessage { length: u64, remaining: usize },
    /// A tag carried a wire-type code outside the defined set.
    #[error("unknown wire type code {0}")]
    UnknownWireType(u8),
}

/// Errors that may occur when encoding a field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum EncodeError {
    /// Field numbers are 1-based and capped at [`MAX_FIELD_NUMBER`].
    ///
    /// [`MAX_FIELD_NUMBER`]: crate::MAX_FIELD_NUMBER
    #[error("invalid field number {0}: must be in 1..=536870911")]
    InvalidFieldNumber(u32),
}
