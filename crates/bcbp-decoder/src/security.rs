//! Security block and trailer handling.
//!
//! Runs once, after the last leg. Whatever remains is either a
//! structured security block (opened by the `^` marker), one opaque
//! security value (any other residue), or nothing at all. Characters
//! left over after a structured block are captured as unknown trailing
//! data — a sign of a malformed or extended payload, but not a failure.

use bcbp_types::fields::{Security, SECURITY_BEGIN_MARKER};
use bcbp_types::SecuritySection;
use bcbp_wire::{control, Cursor, FieldBlock, FieldSpec, FieldWidth};

use crate::error::DecodeError;

/// Decode the optional security section and any trailing unknown data.
pub(crate) fn read_security(
    cursor: &mut Cursor<'_>,
) -> Result<(Option<SecuritySection>, Option<String>), DecodeError> {
    if cursor.is_at_end() {
        return Ok((None, None));
    }

    if cursor.peek() != Some(SECURITY_BEGIN_MARKER) {
        let section = SecuritySection::Opaque(cursor.take_remaining().to_string());
        return Ok((Some(section), None));
    }

    let mut block = FieldBlock::new();
    for field in [Security::BeginMarker, Security::TypeOfData, Security::DataLength] {
        let FieldWidth::Fixed(width) = field.width() else {
            unreachable!("security prefix fields are fixed-width");
        };
        block.push(field, cursor.take(width)?);
    }

    let raw_length = block.get(Security::DataLength).unwrap_or_default();
    let announced = control::parse_hex(raw_length)?;
    // An announcement larger than what is actually present is clamped
    // to the remaining input, never an out-of-range read.
    let length = announced.min(cursor.remaining());
    block.push(Security::Data, cursor.take(length)?);

    let trailing = if cursor.is_at_end() {
        None
    } else {
        Some(cursor.take_remaining().to_string())
    };

    Ok((Some(SecuritySection::Structured(block)), trailing))
}
