#![no_main]

use bcbp_types::fields::{MandatoryRepeated, MandatoryUnique};
use bcbp_wire::{read_fixed_block, Cursor};
use libfuzzer_sys::fuzz_target;

// Fuzz target: fixed-width block walking over both mandatory catalogs.
//
// Catches bugs in:
// - Width bookkeeping / slicing past the end of the input
// - Non-ASCII rejection in the cursor constructor
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(mut cursor) = Cursor::new(text) {
        let _ = read_fixed_block::<MandatoryUnique>(&mut cursor);
    }
    if let Ok(mut cursor) = Cursor::new(text) {
        let _ = read_fixed_block::<MandatoryRepeated>(&mut cursor);
    }
});
