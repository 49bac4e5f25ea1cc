//! Hyperbolic functions, built on [`exp`] and [`expm1`].

use super::{Real, exp, expm1};

/// Computes `sinh x`.
pub fn sinh<T: Real>(x: T) -> T {
    let c = T::CONSTANTS;
    let a = x.abs();

    if x.is_nan() || a < c.sinh_tiny {
        return x;
    }

    let v = if a <= c.hyperbolic_large {
        let e = expm1(a);

        T::HALF * (e + e / (e + T::ONE))
    } else if a <= c.sinh_overflow {
        let h = exp(T::HALF * a);

        (T::HALF * h) * h
    } else {
        T::INFINITY
    };

    v.negate_if(x.is_sign_negative())
}

/// Computes `cosh x`.
pub fn cosh<T: Real>(x: T) -> T {
    let c = T::CONSTANTS;
    let a = x.abs();

    if x.is_nan() {
        x
    } else if a <= c.hyperbolic_large {
        let e = exp(a);

        T::HALF * (e + T::ONE / e)
    } else if a <= c.sinh_overflow {
        let h = exp(T::HALF * a);

        (T::HALF * h) * h
    } else {
        T::INFINITY
    }
}

/// Computes `tanh x`.
pub fn tanh<T: Real>(x: T) -> T {
    let a = x.abs();

    if x.is_nan() {
        return x;
    }

    let v = if a > T::CONSTANTS.hyperbolic_large {
        T::ONE
    } else {
        let e = expm1(T::TWO * a);

        e / (e + T::TWO)
    };

    v.negate_if(x.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_zero() {
        assert_eq!(sinh(0.0f64), 0.0);
        assert!(sinh(-0.0f32).is_sign_negative());
        assert_eq!(cosh(0.0f64), 1.0);
        assert_eq!(tanh(0.0f32), 0.0);
        assert_eq!(sinh(1e-20f64), 1e-20);
    }

    #[test]
    fn saturation() {
        assert_eq!(tanh(30.0f64), 1.0);
        assert_eq!(tanh(-10.0f32), -1.0);
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(sinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(cosh(f32::NEG_INFINITY), f32::INFINITY);
    }

    #[test]
    fn near_overflow() {
        let value = sinh(710.0f64);
        let expected = 1.1169973830808555e308;

        assert!(value.is_finite());
        assert!((value - expected).abs() <= 1e-14 * expected);
        assert_eq!(cosh(711.0f64), f64::INFINITY);
        assert!(cosh(89.0f32).is_finite());
    }

    #[test]
    fn nan_propagates() {
        assert!(sinh(f64::NAN).is_nan());
        assert!(cosh(f32::NAN).is_nan());
        assert!(tanh(f64::NAN).is_nan());
    }
}
