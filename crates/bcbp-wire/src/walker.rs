//! The generic block walkers.
//!
//! Both BCBP block shapes reduce to one offset-accumulating walk over a
//! declared field list:
//!
//! ```text
//! fixed block          f1 │ f2 │ f3 │ ...          span = Σ widths
//!
//! length-framed block  f1 │ ref │ f2 │ f3 │ ...
//!                           │    └──── window ────┘
//!                           └ announces window size (hex)
//! ```
//!
//! A fixed block's span is the sum of its field widths. A length-framed
//! block carries a *reference field* whose hexadecimal value announces
//! how many characters follow it within the same block; fields after
//! the reference are bounded by that window, and the block always
//! consumes end-of-reference + announced characters exactly.

use crate::block::{FieldBlock, FieldSpec, FieldWidth};
use crate::control;
use crate::cursor::Cursor;
use crate::error::WireError;

/// How a framed block treats its announced window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRule {
    /// Read fields until the window is exhausted, truncating the final
    /// field to fit. Used for the conditional repeated block, whose
    /// window may also cut a field short.
    Truncate,

    /// Additionally require the announced length to land exactly on a
    /// cumulative boundary of the declared fields after the reference.
    /// Used for the conditional unique block, whose field set is closed
    /// and enumerable, making any other length structurally inconsistent.
    ExactBoundary,
}

/// A parsed length-framed block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramedBlock<F: FieldSpec> {
    pub fields: FieldBlock<F>,
    /// The window size announced by the reference field.
    pub announced: usize,
}

/// Read a block of back-to-back fixed-width fields.
///
/// Walks `F::FIELDS` in declared order, reading each field by its
/// width. Every declared field ends up in the returned block.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if the input ends before the block does.
pub fn read_fixed_block<F: FieldSpec>(cursor: &mut Cursor<'_>) -> Result<FieldBlock<F>, WireError> {
    let mut block = FieldBlock::new();
    for &field in F::FIELDS {
        block.push(field, cursor.take(fixed_width(field))?);
    }
    Ok(block)
}

/// Read a length-framed block whose size is announced by `reference`.
///
/// Fields before and including the reference are read by their declared
/// widths. Decoding the reference's hexadecimal value establishes the
/// window; fields after it are read only while the window has room, with
/// the last one truncated to fit. The cursor finishes at the end of the
/// window regardless of how much of it the declared fields covered, so
/// an over-announced window is skipped rather than re-interpreted.
///
/// # Errors
///
/// - [`WireError::InvalidHex`] if the reference value is not hexadecimal.
/// - [`WireError::InconsistentLength`] under [`FrameRule::ExactBoundary`]
///   if the announced length is off every declared field boundary.
/// - [`WireError::UnexpectedEof`] if the window runs past the input.
pub fn read_framed_block<F: FieldSpec>(
    cursor: &mut Cursor<'_>,
    reference: F,
    rule: FrameRule,
) -> Result<FramedBlock<F>, WireError> {
    let mut fields = FieldBlock::new();
    let mut window_end: Option<usize> = None;
    let mut announced = 0;

    for (index, &field) in F::FIELDS.iter().enumerate() {
        let mut width = fixed_width(field);
        if let Some(end) = window_end {
            if cursor.offset() >= end {
                break;
            }
            width = width.min(end - cursor.offset());
        }

        let raw = cursor.take(width)?;
        fields.push(field, raw);

        if field == reference {
            announced = control::parse_hex(raw)?;
            if rule == FrameRule::ExactBoundary && !on_boundary::<F>(index, announced) {
                return Err(WireError::InconsistentLength { announced });
            }
            window_end = Some(cursor.offset() + announced);
        }
    }

    if let Some(end) = window_end {
        cursor.seek_to(end)?;
    }

    Ok(FramedBlock { fields, announced })
}

fn fixed_width<F: FieldSpec>(field: F) -> usize {
    match field.width() {
        FieldWidth::Fixed(width) => width,
        // The walked catalogs declare fixed widths only; variable fields
        // (airline use, security data) are read by the decoder directly.
        FieldWidth::Variable => unreachable!("variable-width field {field:?} in a walked catalog"),
    }
}

/// Whether `announced` equals a cumulative width boundary of the fields
/// after index `reference_index` (0 and the full sum included).
fn on_boundary<F: FieldSpec>(reference_index: usize, announced: usize) -> bool {
    let mut sum = 0;
    if announced == 0 {
        return true;
    }
    for &field in &F::FIELDS[reference_index + 1..] {
        sum += fixed_width(field);
        if sum >= announced {
            return sum == announced;
        }
    }
    false
}
