#![warn(clippy::pedantic)]

pub mod block;
pub mod control;
pub mod cursor;
pub mod error;
pub mod walker;

pub use block::{FieldBlock, FieldSpec, FieldWidth};
pub use cursor::Cursor;
pub use error::WireError;
pub use walker::{FrameRule, FramedBlock, read_fixed_block, read_framed_block};
