//! Compact token decoding (no signature verification).

mod decoder;
mod error;

pub use decoder::{decode, DecodedToken};
pub use error::DecodeError;
