use malachite::num::arithmetic::traits::RoundToMultipleOfPowerOf2;
use malachite::rounding_modes::RoundingMode;

/// Rounding to an integer multiple of a power of two.
pub trait RoundBinary: Sized {
    type Output;

    /// Rounds to a multiple of `2^position` in the direction given by `mode`.
    fn round(self, position: i64, mode: RoundingMode) -> Self::Output;

    /// Rounds to the nearest multiple of `2^position`. A value halfway
    /// between two multiples goes to the one whose quotient by
    /// `2^position` is even, as in IEEE 754 round-to-nearest.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::utils::RoundBinary;
    /// # use malachite::Rational;
    /// #
    /// let x = Rational::from_signeds(5, 8);
    ///
    /// assert_eq!(x.nearest(-2), Rational::from_signeds(1, 2));
    /// ```
    #[inline]
    fn nearest(self, position: i64) -> Self::Output {
        self.round(position, RoundingMode::Nearest)
    }
}

impl<T> RoundBinary for T
where
    T: RoundToMultipleOfPowerOf2<i64>,
{
    type Output = T::Output;

    fn round(self, position: i64, mode: RoundingMode) -> Self::Output {
        self.round_to_multiple_of_power_of_2(position, mode).0
    }
}

#[cfg(test)]
mod tests {
    use malachite::Rational;

    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_signeds(n, d)
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(q(5, 8).nearest(-2), q(1, 2));
        assert_eq!(q(7, 8).nearest(-2), q(1, 1));
        assert_eq!(q(-5, 8).nearest(-2), q(-1, 2));
        assert_eq!(q(3, 1).nearest(1), q(4, 1));
        assert_eq!(q(5, 1).nearest(1), q(4, 1));
    }

    #[test]
    fn off_ties_go_to_nearest() {
        assert_eq!(q(5, 8).nearest(-1), q(1, 2));
        assert_eq!(q(11, 16).nearest(-2), q(3, 4));
        assert_eq!((&q(1, 3)).nearest(-3), q(3, 8));
    }

    #[test]
    fn directed_modes() {
        assert_eq!(q(5, 8).round(-2, RoundingMode::Floor), q(1, 2));
        assert_eq!(q(5, 8).round(-2, RoundingMode::Ceiling), q(3, 4));
        assert_eq!(q(-5, 8).round(-2, RoundingMode::Down), q(-1, 2));
    }
}
