//! Per-leg assembly.
//!
//! Each leg is decoded by a short fixed pipeline driven by the leg's own
//! item 6 (the conditional + airline section size, hex):
//!
//! ```text
//!   mandatory repeated (37)
//!   │
//!   ├─ size == 0 ──────────────────────────────▶ leg complete
//!   │
//!   ├─ leg 0 only: conditional unique (framed)
//!   │              └─ lands on leg end ────────▶ leg complete
//!   │
//!   ├─ conditional repeated (framed)
//!   │
//!   └─ residue up to leg end ──▶ airline use (item 4, verbatim)
//! ```
//!
//! The window `[end-of-mandatory, end-of-mandatory + size)` bounds
//! everything after the mandatory block: running past it is a
//! [`DecodeError::LegWindowOverrun`], and the cursor always finishes
//! exactly on the boundary, so legs never overlap or leave gaps.

use bcbp_types::fields::{ConditionalRepeated, ConditionalUnique, MandatoryRepeated};
use bcbp_types::Leg;
use bcbp_wire::{control, Cursor, FieldBlock, FrameRule, read_fixed_block, read_framed_block};

use crate::error::DecodeError;

/// Decode one leg starting at the cursor.
///
/// Returns the leg and, for leg index 0 with a populated conditional
/// section, the itinerary-wide conditional unique block. A failure
/// anywhere in the pipeline is fatal for the whole decode.
pub(crate) fn read_leg(
    cursor: &mut Cursor<'_>,
    leg_index: usize,
) -> Result<(Leg, Option<FieldBlock<ConditionalUnique>>), DecodeError> {
    let mandatory = read_fixed_block::<MandatoryRepeated>(cursor)?;

    let raw_size = mandatory
        .get(MandatoryRepeated::ConditionalSize)
        .unwrap_or_default();
    let conditional_size = control::parse_hex(raw_size)?;
    let leg_end = cursor.offset() + conditional_size;

    if conditional_size == 0 {
        let leg = Leg {
            mandatory,
            conditional: None,
            airline_data: None,
        };
        return Ok((leg, None));
    }

    let mut conditional_unique = None;
    if leg_index == 0 {
        let framed =
            read_framed_block(cursor, ConditionalUnique::UniqueSize, FrameRule::ExactBoundary)?;
        conditional_unique = Some(framed.fields);
        check_window(cursor, leg_index, leg_end)?;
        if cursor.offset() == leg_end {
            let leg = Leg {
                mandatory,
                conditional: None,
                airline_data: None,
            };
            return Ok((leg, conditional_unique));
        }
    }

    let framed = read_framed_block(cursor, ConditionalRepeated::RepeatedSize, FrameRule::Truncate)?;
    check_window(cursor, leg_index, leg_end)?;

    let airline_data = if cursor.offset() < leg_end {
        Some(cursor.take(leg_end - cursor.offset())?.to_string())
    } else {
        None
    };

    let leg = Leg {
        mandatory,
        conditional: Some(framed.fields),
        airline_data,
    };
    Ok((leg, conditional_unique))
}

/// The declared-window invariant: after the mandatory block, the cursor
/// may never pass the leg's own end offset.
fn check_window(cursor: &Cursor<'_>, leg: usize, end: usize) -> Result<(), DecodeError> {
    if cursor.offset() > end {
        return Err(DecodeError::LegWindowOverrun {
            leg,
            offset: cursor.offset(),
            end,
        });
    }
    Ok(())
}
