//! Floating-point types supported by the runtime functions.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::tables::{self, Constants};
use super::{Approximant, Table};
use crate::utils::BitCast;

/// An IEEE 754 binary format with its approximant tables and constants.
pub trait Real:
    BitCast
    + PartialOrd
    + fmt::Debug
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const INFINITY: Self;
    const NAN: Self;
    const MIN_POSITIVE: Self;

    /// Explicitly stored significand bits.
    const MANTISSA_BITS: u32;

    /// Significant bits, counting the implicit leading bit.
    const DIGITS: u32;

    const EXPONENT_BIAS: i32;

    const CONSTANTS: Constants<Self>;

    fn table(approximant: Approximant) -> &'static Table<Self>;

    fn from_i32(value: i32) -> Self;

    /// Converts exactly to `f64`.
    fn widen(self) -> f64;

    /// Converts from `f64`, rounding to nearest.
    fn narrow(value: f64) -> Self;

    /// Converts an integral value.
    fn to_i32(self) -> i32;

    /// Computes `self·a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    fn abs(self) -> Self;

    fn floor(self) -> Self;

    fn sqrt(self) -> Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_sign_negative(self) -> bool;

    /// Computes `2^exponent` for exponents in the normal range.
    fn pow2i(exponent: i32) -> Self;

    /// Splits a positive finite value into a significand in `[0.5, 1)` and a
    /// power of two. Subnormal inputs are normalized first.
    fn frexp(self) -> (Self, i32);

    /// Clears all but the leading `digits` significant bits.
    fn truncate(self, digits: u32) -> Self;

    /// Multiplies by `2^exponent`, rounding once if the result is subnormal.
    #[inline]
    fn scale2(self, exponent: i32) -> Self {
        let shift = 2 * Self::MANTISSA_BITS as i32;

        if exponent >= 1 - Self::EXPONENT_BIAS {
            self * Self::pow2i(exponent)
        } else {
            self * Self::pow2i(exponent + shift) * Self::pow2i(-shift)
        }
    }

    #[inline]
    fn negate_if(self, negative: bool) -> Self {
        if negative {
            -self
        } else {
            self
        }
    }
}

macro_rules! impl_real {
    ($float:ident, $bits:ident, $tables:ident, $constants:ident) => {
        impl Real for $float {
            const ZERO: $float = 0.0;
            const ONE: $float = 1.0;
            const TWO: $float = 2.0;
            const HALF: $float = 0.5;
            const INFINITY: $float = $float::INFINITY;
            const NAN: $float = $float::NAN;
            const MIN_POSITIVE: $float = $float::MIN_POSITIVE;

            const MANTISSA_BITS: u32 = $float::MANTISSA_DIGITS - 1;
            const DIGITS: u32 = $float::MANTISSA_DIGITS;
            const EXPONENT_BIAS: i32 = $float::MAX_EXP - 1;

            const CONSTANTS: Constants<$float> = tables::$constants;

            fn table(approximant: Approximant) -> &'static Table<$float> {
                match approximant {
                    Approximant::Exp2 => &tables::$tables::EXP2,
                    Approximant::Log2 => &tables::$tables::LOG2,
                    Approximant::Sin => &tables::$tables::SIN,
                    Approximant::Cos => &tables::$tables::COS,
                    Approximant::AtanZero => &tables::$tables::ATAN_ZERO,
                    Approximant::AtanOne => &tables::$tables::ATAN_ONE,
                    Approximant::Expm1 => &tables::$tables::EXPM1,
                    Approximant::Erf => &tables::$tables::ERF,
                    Approximant::ErfcMid => &tables::$tables::ERFC_MID,
                    Approximant::ErfcTail => &tables::$tables::ERFC_TAIL,
                }
            }

            #[inline]
            fn from_i32(value: i32) -> $float {
                value as $float
            }

            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn narrow(value: f64) -> $float {
                value as $float
            }

            #[inline]
            fn to_i32(self) -> i32 {
                self as i32
            }

            #[inline]
            fn mul_add(self, a: $float, b: $float) -> $float {
                $float::mul_add(self, a, b)
            }

            #[inline]
            fn abs(self) -> $float {
                $float::abs(self)
            }

            #[inline]
            fn floor(self) -> $float {
                $float::floor(self)
            }

            #[inline]
            fn sqrt(self) -> $float {
                $float::sqrt(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $float::is_nan(self)
            }

            #[inline]
            fn is_infinite(self) -> bool {
                $float::is_infinite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                $float::is_sign_negative(self)
            }

            #[inline]
            fn pow2i(exponent: i32) -> $float {
                debug_assert!(
                    (1 - Self::EXPONENT_BIAS..=Self::EXPONENT_BIAS)
                        .contains(&exponent)
                );

                let biased = (exponent + Self::EXPONENT_BIAS) as $bits;

                Self::float_of(biased << Self::MANTISSA_BITS)
            }

            fn frexp(self) -> ($float, i32) {
                let shift = Self::MANTISSA_BITS as i32 + 2;

                let (x, adjust) = if self < Self::MIN_POSITIVE {
                    (self * Self::pow2i(shift), shift)
                } else {
                    (self, 0)
                };

                let exponent_mask: $bits =
                    (1 << ($bits::BITS - 1 - Self::MANTISSA_BITS)) - 1;
                let mantissa_mask: $bits = (1 << Self::MANTISSA_BITS) - 1;

                let bits = x.bits_of();
                let biased = ((bits >> Self::MANTISSA_BITS) & exponent_mask)
                    as i32;
                let half = ((Self::EXPONENT_BIAS - 1) as $bits)
                    << Self::MANTISSA_BITS;

                let significand = Self::float_of((bits & mantissa_mask) | half);

                (significand, biased - (Self::EXPONENT_BIAS - 1) - adjust)
            }

            #[inline]
            fn truncate(self, digits: u32) -> $float {
                let cleared = Self::MANTISSA_BITS + 1 - digits;

                Self::float_of(self.bits_of() & !((1 << cleared) - 1))
            }
        }
    };
}

impl_real!(f32, u32, single, SINGLE);
impl_real!(f64, u64, double, DOUBLE);
