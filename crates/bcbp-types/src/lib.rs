#![warn(clippy::pedantic)]

pub mod boarding_pass;
pub mod fields;
pub mod leg;
pub mod security;

pub use boarding_pass::BoardingPass;
pub use fields::{
  AirlineUse, ConditionalRepeated, ConditionalUnique, MandatoryRepeated, MandatoryUnique,
  Security, SECURITY_BEGIN_MARKER, VERSION_BEGIN_MARKER,
};
pub use leg::Leg;
pub use security::SecuritySection;
