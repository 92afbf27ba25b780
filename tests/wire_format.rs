//! Byte-exact wire vectors and adversarial inputs.

use tagwire::{DecodeError, FieldValue, MessageDecoder, MessageEncoder, WireType};

#[test]
fn reference_message_bytes() {
    // field 1 varint 300, field 2 string "hello", field 3 fixed32 3.14f
    let mut enc = MessageEncoder::new();
    enc.put_uint64(1, 300).unwrap();
    enc.put_string(2, "hello").unwrap();
    enc.put_float(3, 3.14).unwrap();
    let wire = enc.finish();

    let mut expected = vec![0x08, 0xac, 0x02, 0x12, 0x05];
    expected.extend_from_slice(b"hello");
    expected.push(0x1d);
    expected.extend_from_slice(&3.14f32.to_bits().to_le_bytes());
    assert_eq!(&wire[..], expected);

    let mut dec = MessageDecoder::new(&wire);
    let f = dec.next_field().unwrap().unwrap();
    assert_eq!((f.number, f.value), (1, FieldValue::Varint(300)));
    let f = dec.next_field().unwrap().unwrap();
    assert_eq!(f.number, 2);
    assert_eq!(f.value.as_str(), Some("hello"));
    let f = dec.next_field().unwrap().unwrap();
    assert_eq!((f.number, f.value.as_f32()), (3, Some(3.14)));
    assert_eq!(dec.next_field(), Ok(None));
}

#[test]
fn fixed_values_are_little_endian() {
    let mut enc = MessageEncoder::new();
    enc.put_fixed32(1, 0x0403_0201).unwrap();
    enc.put_fixed64(2, 1).unwrap();
    let wire = enc.finish();
    assert_eq!(
        &wire[..],
        [0x0d, 0x01, 0x02, 0x03, 0x04, 0x11, 1, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn skip_unknown_field_leaves_no_byte_drift() {
    // Writer is "newer": field 99 is unknown to the reader.
    let mut enc = MessageEncoder::new();
    enc.put_uint64(1, 7).unwrap();
    enc.put_bytes(99, b"future payload").unwrap();
    enc.put_fixed64(99, 0xdead_beef).unwrap();
    enc.put_uint64(99, u64::MAX).unwrap();
    enc.put_fixed32(99, 5).unwrap();
    enc.put_string(2, "kept").unwrap();
    let wire = enc.finish();

    let mut dec = MessageDecoder::new(&wire);
    let mut known = Vec::new();
    while let Some((number, wire_type)) = dec.read_tag().unwrap() {
        if number > 2 {
            dec.skip_value(wire_type).unwrap();
        } else {
            known.push((number, dec.read_value(wire_type).unwrap()));
        }
    }
    assert_eq!(
        known,
        [
            (1, FieldValue::Varint(7)),
            (2, FieldValue::LengthDelimited(b"kept")),
        ]
    );
    assert_eq!(dec.remaining(), 0);
}

#[test]
fn truncated_length_delimited_field() {
    // field 1, length-delimited, claims 5 bytes but only 2 follow
    let data = [0x0a, 0x05, b'h', b'i'];
    assert_eq!(
        MessageDecoder::new(&data).next_field(),
        Err(DecodeError::TruncatedMessage {
            length: 5,
            remaining: 2
        })
    );
}

#[test]
fn truncated_fixed_field() {
    let data = [0x0d, 0x01, 0x02];
    assert_eq!(
        MessageDecoder::new(&data).next_field(),
        Err(DecodeError::UnexpectedEndOfInput {
            needed: 4,
            available: 2
        })
    );
}

#[test]
fn unterminated_tag_varint() {
    assert_eq!(
        MessageDecoder::new(&[0x80]).next_field(),
        Err(DecodeError::MalformedVarint)
    );
}

#[test]
fn group_wire_types_are_unknown() {
    // tags with wire type codes 3 and 4 (deprecated protobuf groups)
    for code in [3u8, 4] {
        let data = [1 << 3 | code];
        assert_eq!(
            MessageDecoder::new(&data).next_field(),
            Err(DecodeError::UnknownWireType(code)),
            "{}",
            code
        );
    }
}

#[test]
fn skip_propagates_truncation() {
    let data = [0x0a, 0x7f, 0x00];
    let mut dec = MessageDecoder::new(&data);
    let (_, wire_type) = dec.read_tag().unwrap().unwrap();
    assert_eq!(wire_type, WireType::LengthDelimited);
    assert_eq!(
        dec.skip_value(wire_type),
        Err(DecodeError::TruncatedMessage {
            length: 127,
            remaining: 1
        })
    );
}

#[test]
fn decode_does_not_read_past_declared_length() {
    // Two back-to-back length-delimited fields; the first must not bleed
    // into the second.
    let mut enc = MessageEncoder::new();
    enc.put_bytes(1, &[0xff; 3]).unwrap();
    enc.put_bytes(2, &[0x00; 2]).unwrap();
    let wire = enc.finish();

    let mut dec = MessageDecoder::new(&wire);
    let f = dec.next_field().unwrap().unwrap();
    assert_eq!(f.value.as_bytes(), Some(&[0xff, 0xff, 0xff][..]));
    let f = dec.next_field().unwrap().unwrap();
    assert_eq!((f.number, f.value.as_bytes()), (2, Some(&[0x00, 0x00][..])));
}

#[test]
fn concurrent_decoders_share_one_buffer() {
    let mut enc = MessageEncoder::new();
    for i in 1..=64 {
        enc.put_uint64(i, u64::from(i) * 3).unwrap();
    }
    let wire = enc.finish();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let total: u64 = MessageDecoder::new(&wire)
                    .map(|f| f.unwrap().value.as_u64().unwrap())
                    .sum();
                assert_eq!(total, (1..=64u64).sum::<u64>() * 3);
            });
        }
    });
}
