pub mod bits;
pub mod rational;

pub use bits::{BitCast, bits_of, float_of};
pub use rational::{Extended, RoundBinary};
