#![warn(clippy::pedantic)]

//! Shared payload builders for the integration tests and benchmarks.
//!
//! BCBP payloads are printable ASCII, so fixtures are assembled from
//! string fragments rather than binary golden files. The builders keep
//! the fixed widths and markers in one place; tests compose them and
//! append conditional-repeated, airline, and security sections as raw
//! literals.

use bcbp_types::VERSION_BEGIN_MARKER;

/// The canonical single-leg example payload: one leg, item 6 = `00`,
/// nothing after the mandatory blocks.
pub const MINIMAL_SINGLE_LEG: &str =
    "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 100";

/// Build a 23-character mandatory unique block.
///
/// `name` is padded to the 20-character passenger name field.
///
/// # Panics
///
/// If `name` does not fit its field. The builders assert their fixture
/// invariants eagerly so a malformed payload fails at the call site,
/// not as a confusing decode error later.
pub fn mandatory_unique(leg_count: char, name: &str) -> String {
    assert!(name.len() <= 20, "passenger name wider than its field");
    format!("M{leg_count}{name:<20}E")
}

/// Build a 37-character mandatory repeated block for a leg from
/// `from` to `to`, closed by the given item 6 value.
///
/// # Panics
///
/// If any argument deviates from its declared field width.
pub fn mandatory_repeated(from: &str, to: &str, size_hex: &str) -> String {
    assert_eq!(from.len(), 3);
    assert_eq!(to.len(), 3);
    assert_eq!(size_hex.len(), 2);
    format!("ABC123 {from}{to}AC 0834 226F001A0025 1{size_hex}")
}

/// Build a conditional unique block: the `>` marker, a version digit,
/// the item 10 size announcement, and the announced body.
///
/// # Panics
///
/// If the size field is not two characters wide.
pub fn conditional_unique(version: char, size_hex: &str, body: &str) -> String {
    assert_eq!(size_hex.len(), 2);
    format!("{VERSION_BEGIN_MARKER}{version}{size_hex}{body}")
}
