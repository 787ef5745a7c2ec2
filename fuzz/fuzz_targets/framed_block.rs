#![no_main]

use bcbp_types::fields::{ConditionalRepeated, ConditionalUnique};
use bcbp_wire::{read_framed_block, Cursor, FrameRule};
use libfuzzer_sys::fuzz_target;

// Fuzz target: length-framed block walking under both framing rules.
//
// Catches bugs in:
// - Hex length announcement parsing
// - Window-end arithmetic (overflow, off-by-one at the boundary)
// - Boundary validation for the exact-boundary rule
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(mut cursor) = Cursor::new(text) {
        let _ = read_framed_block(
            &mut cursor,
            ConditionalUnique::UniqueSize,
            FrameRule::ExactBoundary,
        );
    }
    if let Ok(mut cursor) = Cursor::new(text) {
        let _ = read_framed_block(
            &mut cursor,
            ConditionalRepeated::RepeatedSize,
            FrameRule::Truncate,
        );
    }
});
