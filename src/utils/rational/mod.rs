mod extended;
mod rounding;

pub use extended::{Extended, PRECISION};
pub use rounding::RoundBinary;
