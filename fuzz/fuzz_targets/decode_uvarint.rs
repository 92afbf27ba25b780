#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwire::{decode_uvarint, put_uvarint};

fuzz_target!(|data: &[u8]| {
    let mut rest = data;
    while let Ok((v, n)) = decode_uvarint(rest) {
        // whatever decodes must re-encode to at most the bytes consumed
        let mut buf = Vec::new();
        put_uvarint(&mut buf, v);
        assert!(buf.len() <= n);
        rest = &rest[n..];
    }
});
