//! Numeric formats.

use std::fmt;
use std::str::FromStr;

use itertools::PeekingNext;

use crate::utils::Extended;

/// A binary floating-point output format, identified by its significand
/// width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Bfloat16,
    Half,
    Single,
    Double,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Bfloat16,
        Precision::Half,
        Precision::Single,
        Precision::Double,
    ];

    /// Number of significant bits, counting the implicit leading bit.
    pub const fn digits(self) -> u32 {
        match self {
            Precision::Bfloat16 => 8,
            Precision::Half => 11,
            Precision::Single => 24,
            Precision::Double => 53,
        }
    }

    /// Bits of the bound given up to rounding in the double-precision error
    /// measurement, which cannot resolve errors near `2⁻⁵³`.
    const fn measurement_slack(self) -> u32 {
        match self {
            Precision::Double => 4,
            _ => 0,
        }
    }

    /// Largest approximation error accepted for this format: `2⁻ᵖ` for a
    /// class with `p` bits, and `2⁻⁴⁹` for doubles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::format::Precision;
    /// #
    /// assert_eq!(Precision::Half.bound(), 2f64.powi(-11));
    /// assert_eq!(Precision::Double.bound(), 8.0 * f64::EPSILON);
    /// ```
    pub fn bound(self) -> f64 {
        let bits = self.digits() - self.measurement_slack();

        Extended::power_of_2(-i64::from(bits)).to_f64()
    }

    /// Rounds `value` to this format's significand width, then to the
    /// nearest double. The exponent range is not limited.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::format::Precision;
    /// # use approx_libm::utils::Extended;
    /// #
    /// let third = Extended::ONE / Extended::from(3);
    ///
    /// assert_eq!(Precision::Single.round(&third), f64::from(1.0f32 / 3.0));
    /// assert_eq!(Precision::Double.round(&third), 1.0 / 3.0);
    /// ```
    pub fn round(self, value: &Extended) -> f64 {
        value.round_to(self.digits()).to_f64()
    }

    pub fn name(self) -> &'static str {
        match self {
            Precision::Bfloat16 => "bfloat16",
            Precision::Half => "half",
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = ParsePrecisionError;

    /// Parses a format by name (`single`), by type (`f32`), or by
    /// significand width (`p24`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let mut iter = lower.chars();

        if iter.peeking_next(|&c| c == 'p').is_some() {
            let digits: u32 = iter.as_str().parse()?;

            return Precision::ALL
                .into_iter()
                .find(|precision| precision.digits() == digits)
                .ok_or(ParsePrecisionError);
        }

        match lower.as_str() {
            "bfloat16" | "bf16" => Ok(Precision::Bfloat16),
            "half" | "f16" => Ok(Precision::Half),
            "single" | "f32" => Ok(Precision::Single),
            "double" | "f64" => Ok(Precision::Double),
            _ => Err(ParsePrecisionError),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePrecisionError;

impl From<std::num::ParseIntError> for ParsePrecisionError {
    fn from(_: std::num::ParseIntError) -> Self {
        ParsePrecisionError
    }
}

impl fmt::Display for ParsePrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid precision")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("single".parse(), Ok(Precision::Single));
        assert_eq!("BF16".parse(), Ok(Precision::Bfloat16));
        assert_eq!("p53".parse(), Ok(Precision::Double));
        assert_eq!("p11".parse(), Ok(Precision::Half));
        assert_eq!("p12".parse::<Precision>(), Err(ParsePrecisionError));
        assert_eq!("quad".parse::<Precision>(), Err(ParsePrecisionError));
        assert_eq!("px".parse::<Precision>(), Err(ParsePrecisionError));
    }

    #[test]
    fn display_round_trips() {
        for precision in Precision::ALL {
            assert_eq!(precision.to_string().parse(), Ok(precision));
        }
    }

    #[test]
    fn rounding_matches_native_single() {
        for x in [1.0 / 3.0, -2.718281828459045, 1e-30, 123456.789] {
            let Some(value) = Extended::from_f64(x) else {
                panic!("{x} is not finite");
            };

            assert_eq!(Precision::Single.round(&value), x as f32 as f64);
            assert_eq!(Precision::Double.round(&value), x);
        }

        let Some(value) = Extended::from_f64(1.0 + 1.0 / 512.0) else {
            unreachable!();
        };

        assert_eq!(Precision::Bfloat16.round(&value), 1.0);
        assert_eq!(Precision::Half.round(&value), 1.0 + 1.0 / 512.0);
    }

    #[test]
    fn double_bound_is_measurable() {
        assert_eq!(Precision::Single.bound(), 2f64.powi(-24));
        assert_eq!(Precision::Double.bound(), 2f64.powi(-49));
        assert!(Precision::Double.bound() > 4.0 * f64::EPSILON);
    }

    #[test]
    fn classes_ascend() {
        assert!(Precision::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Precision::ALL
            .windows(2)
            .all(|w| w[0].bound() > w[1].bound()));
    }
}
