use bcbp_wire::FieldBlock;

use crate::fields::{ConditionalRepeated, MandatoryRepeated};

/// One flight leg of a boarding pass, in itinerary order.
///
/// The mandatory block is always present. The conditional block and the
/// airline-use slice exist only when the leg's item 6 declared room for
/// them; both sit inside the leg's declared window and never overlap
/// the next leg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
  pub mandatory: FieldBlock<MandatoryRepeated>,
  pub conditional: Option<FieldBlock<ConditionalRepeated>>,
  /// Item 4 — carrier-proprietary residue of the leg window, verbatim.
  pub airline_data: Option<String>,
}

impl Leg {
  /// Item 7 — Operating Carrier PNR Code.
  pub fn operating_carrier_pnr(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::OperatingCarrierPnr)
  }

  /// Item 26 — From City Airport Code.
  pub fn from_city(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::FromCity)
  }

  /// Item 38 — To City Airport Code.
  pub fn to_city(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::ToCity)
  }

  /// Item 42 — Operating Carrier Designator.
  pub fn operating_carrier(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::OperatingCarrier)
  }

  /// Item 43 — Flight Number.
  pub fn flight_number(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::FlightNumber)
  }

  /// Item 46 — Date of Flight (Julian date).
  pub fn date_of_flight(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::DateOfFlight)
  }

  /// Item 104 — Seat Number.
  pub fn seat_number(&self) -> Option<&str> {
    self.mandatory.get(MandatoryRepeated::SeatNumber)
  }
}
