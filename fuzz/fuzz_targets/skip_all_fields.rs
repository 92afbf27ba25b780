#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwire::MessageDecoder;

fuzz_target!(|data: &[u8]| {
    // skipping every field must consume exactly the same bytes as decoding
    let mut skipper = MessageDecoder::new(data);
    let skipped = loop {
        match skipper.read_tag() {
            Ok(Some((_, wire_type))) => {
                if skipper.skip_value(wire_type).is_err() {
                    break Err(());
                }
            }
            Ok(None) => break Ok(skipper.position()),
            Err(_) => break Err(()),
        }
    };

    let mut reader = MessageDecoder::new(data);
    let read = loop {
        match reader.next_field() {
            Ok(Some(_)) => {}
            Ok(None) => break Ok(reader.position()),
            Err(_) => break Err(()),
        }
    };

    assert_eq!(skipped.is_ok(), read.is_ok());
    if let (Ok(a), Ok(b)) = (skipped, read) {
        assert_eq!(a, b);
    }
});
