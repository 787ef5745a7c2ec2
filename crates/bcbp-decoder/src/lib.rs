#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;

mod leg;
mod security;

pub use decoder::BcbpDecoder;
pub use error::DecodeError;
