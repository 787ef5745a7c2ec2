//! Control-field parsing.
//!
//! BCBP is self-describing: a handful of designated fields are read as
//! numbers and drive the rest of the parse (the leg count, each leg's
//! conditional + airline section size, the framed-block reference
//! fields, the security data length). Everything else stays an opaque
//! string. These are the only two numeric readings in the format.

use crate::error::WireError;

/// Parse a hexadecimal size control field.
///
/// The field must be non-empty and consist solely of ASCII hex digits;
/// `usize::from_str_radix` alone would also accept a leading sign.
///
/// # Errors
///
/// [`WireError::InvalidHex`] carrying the offending text.
pub fn parse_hex(raw: &str) -> Result<usize, WireError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WireError::InvalidHex {
            value: raw.to_string(),
        });
    }
    usize::from_str_radix(raw, 16).map_err(|_| WireError::InvalidHex {
        value: raw.to_string(),
    })
}

/// Parse a single-decimal-digit control field.
///
/// # Errors
///
/// [`WireError::InvalidDigit`] unless `raw` is exactly one ASCII digit.
pub fn parse_decimal_digit(raw: &str) -> Result<usize, WireError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Ok(c as usize - '0' as usize),
        _ => Err(WireError::InvalidDigit {
            value: raw.to_string(),
        }),
    }
}
