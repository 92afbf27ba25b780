#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwire::MessageDecoder;

fuzz_target!(|data: &[u8]| {
    // walk the whole buffer as a field stream; errors are ok, panics are not
    let mut dec = MessageDecoder::new(data);
    loop {
        match dec.next_field() {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => break,
        }
    }
});
