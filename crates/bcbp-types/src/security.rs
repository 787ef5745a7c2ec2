use bcbp_wire::FieldBlock;

use crate::fields::Security;

/// The optional trailing security block.
///
/// Two shapes exist on the wire. When the residue after the last leg
/// opens with the `^` marker, the block is structured: begin marker,
/// type, a hexadecimal length, and that many characters of data. Any
/// other residue is carried as one opaque security value with no
/// sub-fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecuritySection {
  Structured(FieldBlock<Security>),
  Opaque(String),
}

impl SecuritySection {
  /// Item 28 — Type of Security Data. Absent for opaque sections.
  pub fn security_type(&self) -> Option<&str> {
    match self {
      Self::Structured(block) => block.get(Security::TypeOfData),
      Self::Opaque(_) => None,
    }
  }

  /// Item 30 — the security data itself.
  pub fn data(&self) -> Option<&str> {
    match self {
      Self::Structured(block) => block.get(Security::Data),
      Self::Opaque(data) => Some(data.as_str()),
    }
  }
}
