use bcbp_wire::WireError;

/// Errors that can occur while decoding a BCBP payload.
///
/// Every variant is a decode-time, input-data condition — never a
/// programming fault. Out-of-range reads surface as `InputTruncated`
/// rather than a panic, and no partial record accompanies any of them.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidLegCount          ← item 5 not a single decimal digit
///   ├── InvalidHexLength         ← a hex control field failed to parse
///   ├── InconsistentBlockLength  ← conditional-unique size off-boundary
///   ├── LegWindowOverrun         ← leg content past its declared end
///   ├── InputTruncated           ← read past the end of the payload
///   └── NonAscii                 ← payload violates the ASCII contract
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The leg-count control field (item 5) is not a single decimal
    /// digit. Without it the number of repeated blocks is unknowable.
    #[error("leg count is not a single decimal digit: {value:?}")]
    InvalidLegCount { value: String },

    /// A control field expected to be hexadecimal failed to parse:
    /// item 6 (conditional + airline size), a framed block's reference
    /// field (items 10 and 17), or item 29 (security data length).
    #[error("hexadecimal length field failed to parse: {value:?}")]
    InvalidHexLength { value: String },

    /// The conditional unique block announced a size that matches no
    /// cumulative boundary of its closed field set.
    #[error(
        "conditional unique block announced {announced} following character(s), \
         which is not a declared field boundary"
    )]
    InconsistentBlockLength { announced: usize },

    /// A leg's structured content ran past the end offset its own
    /// item 6 declared.
    #[error("leg {leg} content reached offset {offset}, past its declared end {end}")]
    LegWindowOverrun { leg: usize, offset: usize, end: usize },

    /// A fixed-width read or a declared window would pass the end of
    /// the input.
    #[error("input truncated at offset {offset}: {needed} more character(s) required")]
    InputTruncated { offset: usize, needed: usize },

    /// The payload contains a byte outside the ASCII range.
    #[error("payload contains a non-ASCII character at offset {offset}")]
    NonAscii { offset: usize },
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::UnexpectedEof { offset, needed } => Self::InputTruncated { offset, needed },
            WireError::NonAscii { offset } => Self::NonAscii { offset },
            WireError::InvalidHex { value } => Self::InvalidHexLength { value },
            // The only decimal control field in the format is the leg count.
            WireError::InvalidDigit { value } => Self::InvalidLegCount { value },
            WireError::InconsistentLength { announced } => {
                Self::InconsistentBlockLength { announced }
            }
        }
    }
}
