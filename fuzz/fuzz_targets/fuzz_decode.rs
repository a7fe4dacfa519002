#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic, only decode or fail cleanly.
    let _ = bmp24::decode(data);
    let _ = bmp24::decode_header(data);
});
