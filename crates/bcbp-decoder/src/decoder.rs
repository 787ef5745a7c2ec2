use bcbp_types::fields::MandatoryUnique;
use bcbp_types::BoardingPass;
use bcbp_wire::{control, Cursor, read_fixed_block};

use crate::error::DecodeError;
use crate::{leg, security};

/// Synchronous BCBP decoder — parses a complete in-memory payload.
///
/// The decoder is a pure function of its input string: it performs no
/// I/O, holds no state between calls, and yields identical output for
/// identical input. Decoding proceeds in three steps:
///
///   1. **Mandatory unique**: read the 23-character header block and
///      decode the leg count (a single decimal digit).
///   2. **Legs**: run the leg assembler once per declared leg. Leg 0
///      may additionally surface the itinerary-wide conditional unique
///      block.
///   3. **Security & trailer**: classify whatever remains after the
///      last leg as a structured security block, one opaque security
///      value, or nothing.
///
/// Any sub-parser failure aborts the whole decode immediately; no
/// partial record is ever returned.
///
/// # Example
///
/// ```rust
/// use bcbp_decoder::BcbpDecoder;
///
/// let pass = BcbpDecoder::decode(
///     "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 100",
/// )
/// .unwrap();
///
/// assert_eq!(pass.leg_count(), 1);
/// assert_eq!(pass.legs[0].from_city(), Some("YUL"));
/// assert_eq!(pass.legs[0].to_city(), Some("FRA"));
/// ```
pub struct BcbpDecoder;

impl BcbpDecoder {
    /// Decode a complete BCBP payload.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NonAscii`] if the payload is not ASCII.
    /// - [`DecodeError::InvalidLegCount`] if item 5 is not a decimal digit.
    /// - [`DecodeError::InvalidHexLength`] if a hex control field is
    ///   malformed.
    /// - [`DecodeError::InconsistentBlockLength`] if the conditional
    ///   unique block announces an off-boundary size.
    /// - [`DecodeError::LegWindowOverrun`] if a leg's content runs past
    ///   its declared end.
    /// - [`DecodeError::InputTruncated`] if any read would pass the end
    ///   of the payload.
    pub fn decode(input: &str) -> Result<BoardingPass, DecodeError> {
        let mut cursor = Cursor::new(input)?;

        let mandatory = read_fixed_block::<MandatoryUnique>(&mut cursor)?;
        let raw_count = mandatory.get(MandatoryUnique::LegCount).unwrap_or_default();
        let leg_count = control::parse_decimal_digit(raw_count)?;

        let mut legs = Vec::with_capacity(leg_count);
        let mut conditional = None;
        for leg_index in 0..leg_count {
            let (leg, conditional_unique) = leg::read_leg(&mut cursor, leg_index)?;
            // Populated from leg 0 only; the assembler never yields one
            // for a later leg.
            if let Some(unique) = conditional_unique {
                conditional = Some(unique);
            }
            legs.push(leg);
        }

        let (security, unknown) = security::read_security(&mut cursor)?;

        Ok(BoardingPass {
            mandatory,
            conditional,
            legs,
            security,
            unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcbp_types::fields::{ConditionalRepeated, ConditionalUnique, MandatoryRepeated};
    use bcbp_types::SecuritySection;

    /// The canonical single-leg example: one leg, item 6 = 00, nothing
    /// after the mandatory blocks.
    const MINIMAL: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 100";

    fn header(leg_count: char) -> String {
        format!("M{leg_count}DESMARAIS/LUC       E")
    }

    fn mandatory_leg(size_hex: &str) -> String {
        format!("ABC123 YULFRAAC 0834 226F001A0025 1{size_hex}")
    }

    #[test]
    fn minimal_pass_has_only_mandatory_sections() {
        let pass = BcbpDecoder::decode(MINIMAL).unwrap();

        assert_eq!(pass.format_code(), Some("M"));
        assert_eq!(pass.passenger_name(), Some("DESMARAIS/LUC       "));
        assert_eq!(pass.electronic_ticket_indicator(), Some("E"));
        assert_eq!(pass.leg_count(), 1);

        let leg = &pass.legs[0];
        assert_eq!(leg.operating_carrier_pnr(), Some("ABC123 "));
        assert_eq!(leg.operating_carrier(), Some("AC "));
        assert_eq!(leg.date_of_flight(), Some("226"));
        assert_eq!(leg.seat_number(), Some("001A"));
        assert_eq!(
            leg.mandatory.get(MandatoryRepeated::ConditionalSize),
            Some("00")
        );

        assert!(pass.conditional.is_none());
        assert!(leg.conditional.is_none());
        assert!(leg.airline_data.is_none());
        assert!(pass.security.is_none());
        assert!(pass.unknown.is_none());
    }

    #[test]
    fn decoding_is_idempotent() {
        let input = format!(
            "{}{}>507MWO622503014XY12^108ABCDEFGH",
            header('1'),
            mandatory_leg("14")
        );
        assert_eq!(
            BcbpDecoder::decode(&input).unwrap(),
            BcbpDecoder::decode(&input).unwrap()
        );
    }

    #[test]
    fn full_featured_single_leg() {
        let input = format!(
            "{}{}>507MWO622503014XY12^108ABCDEFGH",
            header('1'),
            mandatory_leg("14")
        );
        let pass = BcbpDecoder::decode(&input).unwrap();

        let unique = pass.conditional.as_ref().expect("conditional unique");
        assert_eq!(unique.get(ConditionalUnique::VersionBeginMarker), Some(">"));
        assert_eq!(unique.get(ConditionalUnique::VersionNumber), Some("5"));
        assert_eq!(unique.get(ConditionalUnique::UniqueSize), Some("07"));
        assert_eq!(
            unique.get(ConditionalUnique::PassengerDescription),
            Some("M")
        );
        assert_eq!(unique.get(ConditionalUnique::DateOfIssue), Some("6225"));
        // Fields past the announced window stay absent.
        assert_eq!(unique.get(ConditionalUnique::BaggageTag), None);

        let leg = &pass.legs[0];
        let repeated = leg.conditional.as_ref().expect("conditional repeated");
        assert_eq!(
            repeated.get(ConditionalRepeated::AirlineNumericCode),
            Some("014")
        );
        assert_eq!(leg.airline_data.as_deref(), Some("XY12"));

        let section = pass.security.as_ref().expect("security section");
        assert_eq!(section.security_type(), Some("1"));
        assert_eq!(section.data(), Some("ABCDEFGH"));
        assert!(pass.unknown.is_none());
    }

    #[test]
    fn leg_count_drives_the_number_of_legs() {
        let input = format!(
            "{}{}{}03123ZZ",
            header('2'),
            mandatory_leg("00"),
            mandatory_leg("07")
        );
        let pass = BcbpDecoder::decode(&input).unwrap();

        assert_eq!(pass.leg_count(), 2);
        assert!(pass.legs[0].conditional.is_none());
        // The conditional unique block attaches only from leg 0, which
        // declared no conditional section here.
        assert!(pass.conditional.is_none());

        let repeated = pass.legs[1].conditional.as_ref().unwrap();
        assert_eq!(
            repeated.get(ConditionalRepeated::AirlineNumericCode),
            Some("123")
        );
        assert_eq!(pass.legs[1].airline_data.as_deref(), Some("ZZ"));
    }

    #[test]
    fn zero_legs_is_a_valid_record() {
        let pass = BcbpDecoder::decode(&header('0')).unwrap();
        assert!(pass.legs.is_empty());
        assert!(pass.security.is_none());
    }

    #[test]
    fn residue_after_zero_legs_is_security_data() {
        let input = format!("{}NOT-A-MARKER", header('0'));
        let pass = BcbpDecoder::decode(&input).unwrap();
        assert_eq!(
            pass.security,
            Some(SecuritySection::Opaque("NOT-A-MARKER".to_string()))
        );
    }

    #[test]
    fn leg_count_must_be_a_decimal_digit() {
        let input = format!("MXDESMARAIS/LUC       E{}", mandatory_leg("00"));
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLegCount {
                value: "X".to_string()
            }
        );
    }

    #[test]
    fn missing_second_leg_is_truncation() {
        let input = format!("{}{}", header('2'), mandatory_leg("00"));
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert!(matches!(err, DecodeError::InputTruncated { .. }));
    }

    #[test]
    fn non_hex_item_6_rejected() {
        let input = format!("{}{}", header('1'), mandatory_leg("ZZ"));
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidHexLength {
                value: "ZZ".to_string()
            }
        );
    }

    #[test]
    fn off_boundary_conditional_unique_rejected() {
        // Item 10 announces 5 following characters; the declared
        // boundaries around it are 3 and 7.
        let input = format!("{}{}>505MWO62", header('1'), mandatory_leg("0F"));
        let err = BcbpDecoder::decode(&input).unwrap_err();
        assert_eq!(err, DecodeError::InconsistentBlockLength { announced: 5 });
    }

    #[test]
    fn truncated_header_rejected() {
        let err = BcbpDecoder::decode("M1DES").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InputTruncated {
                offset: 2,
                needed: 17
            }
        );
    }

    #[test]
    fn non_ascii_payload_rejected() {
        let err = BcbpDecoder::decode("M1DÉSMARAIS/LUC      E").unwrap_err();
        assert_eq!(err, DecodeError::NonAscii { offset: 3 });
    }

    #[test]
    fn empty_payload_rejected() {
        let err = BcbpDecoder::decode("").unwrap_err();
        assert!(matches!(err, DecodeError::InputTruncated { .. }));
    }
}
