/// Wire-level parsing errors.
///
/// Every variant is an input-data condition, never a programming fault:
/// reads that would run past the end of the payload surface as
/// `UnexpectedEof`, and malformed control fields carry the offending
/// text so the caller can report exactly what was found.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read would pass the end of the input.
    #[error("unexpected end of input at offset {offset}: {needed} more character(s) required")]
    UnexpectedEof { offset: usize, needed: usize },

    /// The payload contains a byte outside the ASCII range.
    ///
    /// BCBP payloads are ASCII by contract; rejecting other input up
    /// front keeps character offsets identical to byte offsets for the
    /// rest of the decode.
    #[error("non-ASCII character at offset {offset}")]
    NonAscii { offset: usize },

    /// A control field expected to be hexadecimal failed to parse.
    #[error("invalid hexadecimal control field: {value:?}")]
    InvalidHex { value: String },

    /// A control field expected to be a single decimal digit failed to
    /// parse.
    #[error("invalid decimal control field: {value:?}")]
    InvalidDigit { value: String },

    /// A length-framed block announced a size that does not land on any
    /// boundary of its declared field set.
    #[error("announced length {announced} does not fall on a declared field boundary")]
    InconsistentLength { announced: usize },
}
