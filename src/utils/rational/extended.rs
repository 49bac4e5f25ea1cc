//! Extended-precision scalars.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use malachite::num::arithmetic::traits::{Abs, PowerOf2, Sign};
use malachite::num::basic::traits::{One, Zero};
use malachite::num::conversion::traits::RoundingFrom;
use malachite::Rational;
use malachite::rounding_modes::RoundingMode;

use super::RoundBinary;

/// Significant bits retained by every [`Extended`] operation.
pub const PRECISION: u32 = 128;

/// A binary floating-point number with [`PRECISION`] significant bits and an
/// unbounded exponent.
///
/// Every arithmetic operation is computed exactly and then rounded to nearest,
/// so a chain of operations behaves like IEEE arithmetic at a much wider
/// significand.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Extended(Rational);

impl Extended {
    pub const ZERO: Extended = Extended(Rational::ZERO);
    pub const ONE: Extended = Extended(Rational::ONE);

    fn rounded(value: Rational, bits: u32) -> Extended {
        if value.sign() == Ordering::Equal {
            return Extended(value);
        }

        let position = value.floor_log_base_2_abs() + 1 - i64::from(bits);

        Extended(value.nearest(position))
    }

    /// Converts a finite double exactly, returning `None` for infinities and
    /// NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::utils::Extended;
    /// #
    /// let x = Extended::from_f64(0.1).unwrap();
    ///
    /// assert_eq!(x.to_f64(), 0.1);
    /// assert_eq!(Extended::from_f64(f64::NAN), None);
    /// ```
    pub fn from_f64(value: f64) -> Option<Extended> {
        Rational::try_from(value).ok().map(Extended)
    }

    /// Rounds to the nearest double.
    pub fn to_f64(&self) -> f64 {
        f64::rounding_from(&self.0, RoundingMode::Nearest).0
    }

    /// Rounds to `bits` significant bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::utils::Extended;
    /// #
    /// let x = Extended::from_f64(0.6875).unwrap();
    ///
    /// assert_eq!(x.round_to(2).to_f64(), 0.75);
    /// assert_eq!(x.round_to(4).to_f64(), 0.6875);
    /// ```
    pub fn round_to(&self, bits: u32) -> Extended {
        Extended::rounded(self.0.clone(), bits)
    }

    pub fn abs(&self) -> Extended {
        Extended((&self.0).abs())
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Ordering::Equal
    }

    pub fn signum(&self) -> Ordering {
        self.0.sign()
    }

    /// Computes `2^exponent` exactly.
    pub fn power_of_2(exponent: i64) -> Extended {
        Extended(Rational::power_of_2(exponent))
    }
}

impl From<i64> for Extended {
    fn from(value: i64) -> Self {
        Extended(Rational::from(value))
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:e}", self.to_f64())
    }
}

impl Neg for Extended {
    type Output = Self;

    fn neg(self) -> Extended {
        Extended(-self.0)
    }
}

impl Neg for &Extended {
    type Output = Extended;

    fn neg(self) -> Extended {
        Extended(-&self.0)
    }
}

macro_rules! rounded_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&Extended> for &Extended {
            type Output = Extended;

            fn $method(self, rhs: &Extended) -> Extended {
                Extended::rounded((&self.0).$method(&rhs.0), PRECISION)
            }
        }

        impl $trait<&Extended> for Extended {
            type Output = Extended;

            fn $method(self, rhs: &Extended) -> Extended {
                (&self).$method(rhs)
            }
        }

        impl $trait<Extended> for &Extended {
            type Output = Extended;

            fn $method(self, rhs: Extended) -> Extended {
                self.$method(&rhs)
            }
        }

        impl $trait for Extended {
            type Output = Extended;

            fn $method(self, rhs: Extended) -> Extended {
                (&self).$method(&rhs)
            }
        }
    };
}

rounded_binop!(Add, add);
rounded_binop!(Sub, sub);
rounded_binop!(Mul, mul);
rounded_binop!(Div, div);
