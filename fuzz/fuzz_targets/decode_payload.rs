#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full BcbpDecoder::decode pipeline.
//
// Catches bugs in:
// - Leg count / item 6 control field parsing
// - Conditional block window arithmetic
// - Security length clamping
// - Any panic on arbitrary printable or non-printable input
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = bcbp_decoder::BcbpDecoder::decode(text);
    }
});
