use bcbp_wire::FieldBlock;

use crate::fields::{ConditionalUnique, MandatoryUnique};
use crate::leg::Leg;
use crate::security::SecuritySection;

/// A fully decoded boarding pass.
///
/// Produced in one pass over the payload and never mutated afterward.
/// The structure mirrors the format itself:
///
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │ BoardingPass                                           │
/// │   mandatory    ← header block, exactly once            │
/// │   conditional  ← itinerary-wide block, from leg 0 only │
/// │   legs         ← one entry per encoded leg             │
/// │   security     ← optional trailing block               │
/// │   unknown      ← residue after a structured security   │
/// │                  block; signals a non-standard payload │
/// └────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardingPass {
  pub mandatory: FieldBlock<MandatoryUnique>,
  pub conditional: Option<FieldBlock<ConditionalUnique>>,
  pub legs: Vec<Leg>,
  pub security: Option<SecuritySection>,
  /// Characters left over after every declared section. Not itself a
  /// decode failure, but well-formed payloads never produce it.
  pub unknown: Option<String>,
}

impl BoardingPass {
  /// Item 1 — Format Code.
  pub fn format_code(&self) -> Option<&str> {
    self.mandatory.get(MandatoryUnique::FormatCode)
  }

  /// Item 11 — Passenger Name, as encoded (padding included).
  pub fn passenger_name(&self) -> Option<&str> {
    self.mandatory.get(MandatoryUnique::PassengerName)
  }

  /// Item 253 — Electronic Ticket Indicator.
  pub fn electronic_ticket_indicator(&self) -> Option<&str> {
    self.mandatory.get(MandatoryUnique::ElectronicTicketIndicator)
  }

  /// Number of decoded legs. Always equals the leg-count digit of the
  /// mandatory unique block.
  pub fn leg_count(&self) -> usize {
    self.legs.len()
  }
}
