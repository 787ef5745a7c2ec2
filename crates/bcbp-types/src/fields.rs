//! The BCBP field catalogs.
//!
//! One enum per block kind, each implementing [`FieldSpec`]. Variants
//! carry their IATA Resolution 792 item number and declared width, and
//! `FIELDS` fixes the on-wire order. The enums are the field
//! identifiers throughout the workspace — an undeclared field cannot be
//! referenced, and a block kind cannot be confused with another.
//!
//! ```text
//! ┌──────────────────────┬────────┬───────────────────────────────┐
//! │ Block kind           │ Span   │ Framing                       │
//! ├──────────────────────┼────────┼───────────────────────────────┤
//! │ Mandatory unique     │ 23     │ fixed                         │
//! │ Mandatory repeated   │ 37     │ fixed (item 6 sizes the rest) │
//! │ Conditional unique   │ varies │ framed by item 10             │
//! │ Conditional repeated │ varies │ framed by item 17             │
//! │ Airline use          │ varies │ leg window residue            │
//! │ Security             │ varies │ sized by item 29              │
//! └──────────────────────┴────────┴───────────────────────────────┘
//! ```

use bcbp_wire::{FieldSpec, FieldWidth};

/// First character of a structured security block.
pub const SECURITY_BEGIN_MARKER: char = '^';

/// Conventional first character of a conditional unique block (item 8).
/// Captured verbatim, never validated — field values are opaque.
pub const VERSION_BEGIN_MARKER: char = '>';

/// Header fields appearing exactly once per boarding pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MandatoryUnique {
  /// Item 1 — Format Code.
  FormatCode,
  /// Item 5 — Number of Legs Encoded (decimal control field).
  LegCount,
  /// Item 11 — Passenger Name.
  PassengerName,
  /// Item 253 — Electronic Ticket Indicator.
  ElectronicTicketIndicator,
}

impl FieldSpec for MandatoryUnique {
  const FIELDS: &'static [Self] = &[
    Self::FormatCode,
    Self::LegCount,
    Self::PassengerName,
    Self::ElectronicTicketIndicator,
  ];

  fn item(self) -> u16 {
    match self {
      Self::FormatCode => 1,
      Self::LegCount => 5,
      Self::PassengerName => 11,
      Self::ElectronicTicketIndicator => 253,
    }
  }

  fn width(self) -> FieldWidth {
    FieldWidth::Fixed(match self {
      Self::PassengerName => 20,
      _ => 1,
    })
  }
}

/// Fixed-width per-leg fields, appearing once per leg.
///
/// Item 6 closes the block: its hexadecimal value is the combined size
/// of the leg's conditional and airline-use sections, which is what
/// lets the decoder frame everything that follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MandatoryRepeated {
  /// Item 7 — Operating Carrier PNR Code.
  OperatingCarrierPnr,
  /// Item 26 — From City Airport Code.
  FromCity,
  /// Item 38 — To City Airport Code.
  ToCity,
  /// Item 42 — Operating Carrier Designator.
  OperatingCarrier,
  /// Item 43 — Flight Number.
  FlightNumber,
  /// Item 46 — Date of Flight (Julian date).
  DateOfFlight,
  /// Item 71 — Compartment Code.
  CompartmentCode,
  /// Item 104 — Seat Number.
  SeatNumber,
  /// Item 107 — Check-in Sequence Number.
  CheckInSequence,
  /// Item 113 — Passenger Status.
  PassengerStatus,
  /// Item 6 — Size of the conditional + airline section (hex control
  /// field).
  ConditionalSize,
}

impl FieldSpec for MandatoryRepeated {
  const FIELDS: &'static [Self] = &[
    Self::OperatingCarrierPnr,
    Self::FromCity,
    Self::ToCity,
    Self::OperatingCarrier,
    Self::FlightNumber,
    Self::DateOfFlight,
    Self::CompartmentCode,
    Self::SeatNumber,
    Self::CheckInSequence,
    Self::PassengerStatus,
    Self::ConditionalSize,
  ];

  fn item(self) -> u16 {
    match self {
      Self::OperatingCarrierPnr => 7,
      Self::FromCity => 26,
      Self::ToCity => 38,
      Self::OperatingCarrier => 42,
      Self::FlightNumber => 43,
      Self::DateOfFlight => 46,
      Self::CompartmentCode => 71,
      Self::SeatNumber => 104,
      Self::CheckInSequence => 107,
      Self::PassengerStatus => 113,
      Self::ConditionalSize => 6,
    }
  }

  fn width(self) -> FieldWidth {
    FieldWidth::Fixed(match self {
      Self::OperatingCarrierPnr => 7,
      Self::FromCity | Self::ToCity | Self::OperatingCarrier | Self::DateOfFlight => 3,
      Self::FlightNumber | Self::CheckInSequence => 5,
      Self::CompartmentCode | Self::PassengerStatus => 1,
      Self::SeatNumber => 4,
      Self::ConditionalSize => 2,
    })
  }
}

/// Optional itinerary-wide fields, attached only from leg 0.
///
/// Item 10 is the reference field: its hexadecimal value announces the
/// size of the structured message that follows it within this block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionalUnique {
  /// Item 8 — Beginning of Version Number (conventionally `>`).
  VersionBeginMarker,
  /// Item 9 — Version Number.
  VersionNumber,
  /// Item 10 — Size of following structured message, unique (hex).
  UniqueSize,
  /// Item 15 — Passenger Description.
  PassengerDescription,
  /// Item 12 — Source of Check-in.
  CheckInSource,
  /// Item 14 — Source of Boarding Pass Issuance.
  IssuanceSource,
  /// Item 22 — Date of Issue of Boarding Pass (Julian date).
  DateOfIssue,
  /// Item 16 — Document Type.
  DocumentType,
  /// Item 21 — Airline Designator of Boarding Pass Issuer.
  IssuerDesignator,
  /// Item 23 — Baggage Tag Licence Plate Number.
  BaggageTag,
  /// Item 31 — 1st Non-Consecutive Baggage Tag Licence Plate Number.
  FirstNonConsecutiveBaggageTag,
  /// Item 32 — 2nd Non-Consecutive Baggage Tag Licence Plate Number.
  SecondNonConsecutiveBaggageTag,
}

impl FieldSpec for ConditionalUnique {
  const FIELDS: &'static [Self] = &[
    Self::VersionBeginMarker,
    Self::VersionNumber,
    Self::UniqueSize,
    Self::PassengerDescription,
    Self::CheckInSource,
    Self::IssuanceSource,
    Self::DateOfIssue,
    Self::DocumentType,
    Self::IssuerDesignator,
    Self::BaggageTag,
    Self::FirstNonConsecutiveBaggageTag,
    Self::SecondNonConsecutiveBaggageTag,
  ];

  fn item(self) -> u16 {
    match self {
      Self::VersionBeginMarker => 8,
      Self::VersionNumber => 9,
      Self::UniqueSize => 10,
      Self::PassengerDescription => 15,
      Self::CheckInSource => 12,
      Self::IssuanceSource => 14,
      Self::DateOfIssue => 22,
      Self::DocumentType => 16,
      Self::IssuerDesignator => 21,
      Self::BaggageTag => 23,
      Self::FirstNonConsecutiveBaggageTag => 31,
      Self::SecondNonConsecutiveBaggageTag => 32,
    }
  }

  fn width(self) -> FieldWidth {
    FieldWidth::Fixed(match self {
      Self::UniqueSize => 2,
      Self::DateOfIssue => 4,
      Self::IssuerDesignator => 3,
      Self::BaggageTag
      | Self::FirstNonConsecutiveBaggageTag
      | Self::SecondNonConsecutiveBaggageTag => 13,
      _ => 1,
    })
  }
}

/// Optional per-leg fields; same framing mechanism as the conditional
/// unique block with item 17 as the reference field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionalRepeated {
  /// Item 17 — Size of following structured message, repeated (hex).
  RepeatedSize,
  /// Item 142 — Airline Numeric Code.
  AirlineNumericCode,
  /// Item 143 — Document Form / Serial Number.
  DocumentSerialNumber,
  /// Item 18 — Selectee Indicator.
  SelecteeIndicator,
  /// Item 108 — International Documentation Verification.
  InternationalDocumentVerification,
  /// Item 19 — Marketing Carrier Designator.
  MarketingCarrier,
  /// Item 20 — Frequent Flyer Airline Designator.
  FrequentFlyerCarrier,
  /// Item 236 — Frequent Flyer Number.
  FrequentFlyerNumber,
  /// Item 89 — ID/AD Indicator.
  IdAdIndicator,
  /// Item 118 — Free Baggage Allowance.
  FreeBaggageAllowance,
  /// Item 254 — Fast Track.
  FastTrack,
}

impl FieldSpec for ConditionalRepeated {
  const FIELDS: &'static [Self] = &[
    Self::RepeatedSize,
    Self::AirlineNumericCode,
    Self::DocumentSerialNumber,
    Self::SelecteeIndicator,
    Self::InternationalDocumentVerification,
    Self::MarketingCarrier,
    Self::FrequentFlyerCarrier,
    Self::FrequentFlyerNumber,
    Self::IdAdIndicator,
    Self::FreeBaggageAllowance,
    Self::FastTrack,
  ];

  fn item(self) -> u16 {
    match self {
      Self::RepeatedSize => 17,
      Self::AirlineNumericCode => 142,
      Self::DocumentSerialNumber => 143,
      Self::SelecteeIndicator => 18,
      Self::InternationalDocumentVerification => 108,
      Self::MarketingCarrier => 19,
      Self::FrequentFlyerCarrier => 20,
      Self::FrequentFlyerNumber => 236,
      Self::IdAdIndicator => 89,
      Self::FreeBaggageAllowance => 118,
      Self::FastTrack => 254,
    }
  }

  fn width(self) -> FieldWidth {
    FieldWidth::Fixed(match self {
      Self::RepeatedSize => 2,
      Self::AirlineNumericCode | Self::MarketingCarrier | Self::FrequentFlyerCarrier
      | Self::FreeBaggageAllowance => 3,
      Self::DocumentSerialNumber => 10,
      Self::FrequentFlyerNumber => 16,
      Self::SelecteeIndicator
      | Self::InternationalDocumentVerification
      | Self::IdAdIndicator
      | Self::FastTrack => 1,
    })
  }
}

/// Carrier-proprietary raw data filling the rest of a leg's window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirlineUse {
  /// Item 4 — For Individual Airline Use. Content is never interpreted.
  Data,
}

impl FieldSpec for AirlineUse {
  const FIELDS: &'static [Self] = &[Self::Data];

  fn item(self) -> u16 {
    4
  }

  fn width(self) -> FieldWidth {
    FieldWidth::Variable
  }
}

/// Trailing boarding-pass authenticity data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Security {
  /// Item 25 — Beginning of Security Data (`^`).
  BeginMarker,
  /// Item 28 — Type of Security Data.
  TypeOfData,
  /// Item 29 — Length of Security Data (hex control field).
  DataLength,
  /// Item 30 — Security Data.
  Data,
}

impl FieldSpec for Security {
  const FIELDS: &'static [Self] = &[
    Self::BeginMarker,
    Self::TypeOfData,
    Self::DataLength,
    Self::Data,
  ];

  fn item(self) -> u16 {
    match self {
      Self::BeginMarker => 25,
      Self::TypeOfData => 28,
      Self::DataLength => 29,
      Self::Data => 30,
    }
  }

  fn width(self) -> FieldWidth {
    match self {
      Self::DataLength => FieldWidth::Fixed(2),
      Self::Data => FieldWidth::Variable,
      _ => FieldWidth::Fixed(1),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixed_span<F: FieldSpec>() -> usize {
    F::FIELDS
      .iter()
      .map(|f| match f.width() {
        FieldWidth::Fixed(w) => w,
        FieldWidth::Variable => 0,
      })
      .sum()
  }

  #[test]
  fn mandatory_spans_match_the_format() {
    assert_eq!(fixed_span::<MandatoryUnique>(), 23);
    assert_eq!(fixed_span::<MandatoryRepeated>(), 37);
  }

  #[test]
  fn reference_fields_sit_where_framing_expects_them() {
    // Item 10 is the third conditional-unique field (after marker and
    // version), item 17 opens the conditional repeated block.
    assert_eq!(ConditionalUnique::FIELDS[2], ConditionalUnique::UniqueSize);
    assert_eq!(
      ConditionalRepeated::FIELDS[0],
      ConditionalRepeated::RepeatedSize
    );
  }

  #[test]
  fn control_fields_are_two_characters() {
    for width in [
      MandatoryRepeated::ConditionalSize.width(),
      ConditionalUnique::UniqueSize.width(),
      ConditionalRepeated::RepeatedSize.width(),
      Security::DataLength.width(),
    ] {
      assert_eq!(width, FieldWidth::Fixed(2));
    }
  }

  #[test]
  fn only_airline_use_and_security_data_are_variable() {
    assert_eq!(AirlineUse::Data.width(), FieldWidth::Variable);
    assert_eq!(AirlineUse::Data.item(), 4);
    assert_eq!(Security::Data.width(), FieldWidth::Variable);

    let fixed_only = MandatoryUnique::FIELDS
      .iter()
      .map(|f| f.width())
      .chain(MandatoryRepeated::FIELDS.iter().map(|f| f.width()))
      .chain(ConditionalUnique::FIELDS.iter().map(|f| f.width()))
      .chain(ConditionalRepeated::FIELDS.iter().map(|f| f.width()));
    for width in fixed_only {
      assert!(matches!(width, FieldWidth::Fixed(_)));
    }
  }

  #[test]
  fn item_numbers_are_unique_within_each_catalog() {
    fn assert_unique<F: FieldSpec>() {
      let mut items: Vec<u16> = F::FIELDS.iter().map(|f| f.item()).collect();
      items.sort_unstable();
      items.dedup();
      assert_eq!(items.len(), F::FIELDS.len());
    }
    assert_unique::<MandatoryUnique>();
    assert_unique::<MandatoryRepeated>();
    assert_unique::<ConditionalUnique>();
    assert_unique::<ConditionalRepeated>();
    assert_unique::<Security>();
  }
}
