//! Logarithms.

use super::{Approximant, Real};

fn special<T: Real>(x: T) -> Option<T> {
    if x.is_nan() || x < T::ZERO {
        Some(T::NAN)
    } else if x == T::ZERO {
        Some(-T::INFINITY)
    } else if x.is_infinite() {
        Some(x)
    } else {
        None
    }
}

/// Splits `log₂ x` into an integer part and a fraction in
/// `[−1/2, 1/2]`, for positive finite `x`.
///
/// With `x = m·2ᵉ` and `m ∈ [√½, √2)`, `log₂ m` is computed from
/// `s = (m − 1)/(m + 1)`, which keeps the approximant's argument small and
/// its structure odd.
fn log2_parts<T: Real>(x: T) -> (T, T) {
    let (m, e) = x.frexp();

    let (m, e) = if m < T::CONSTANTS.sqrt_half {
        (m + m, e - 1)
    } else {
        (m, e)
    };

    let t = m - T::ONE;
    let s = t / (t + T::TWO);

    (T::from_i32(e), s * T::table(Approximant::Log2).eval(s * s))
}

/// Computes `log₂ x`.
pub fn log2<T: Real>(x: T) -> T {
    special(x).unwrap_or_else(|| {
        let (e, f) = log2_parts(x);

        e + f
    })
}

/// Computes `ln x`.
pub fn log<T: Real>(x: T) -> T {
    let ln2 = T::CONSTANTS.ln2;

    special(x).unwrap_or_else(|| {
        let (e, f) = log2_parts(x);

        e.mul_add(ln2, f * ln2)
    })
}

/// Computes `log₁₀ x`.
pub fn log10<T: Real>(x: T) -> T {
    let log10_2 = T::CONSTANTS.log10_2;

    special(x).unwrap_or_else(|| {
        let (e, f) = log2_parts(x);

        e.mul_add(log10_2, f * log10_2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two() {
        for e in -30..30 {
            assert_eq!(log2(2f64.powi(e)), f64::from(e));
            assert_eq!(log2(2f32.powi(e)), e as f32);
        }

        assert_eq!(log(1.0f64), 0.0);
        assert_eq!(log10(1.0f32), 0.0);
    }

    #[test]
    fn subnormal_inputs() {
        assert_eq!(log2(5e-324f64), -1074.0);
        assert_eq!(log2(f32::from_bits(1)), -149.0);
        assert_eq!(log2(f64::MIN_POSITIVE / 4.0), -1024.0);
    }

    #[test]
    fn special_values() {
        assert_eq!(log2(0.0f64), f64::NEG_INFINITY);
        assert_eq!(log(-0.0f32), f32::NEG_INFINITY);
        assert_eq!(log10(f64::INFINITY), f64::INFINITY);
        assert!(log(-1.0f64).is_nan());
        assert!(log2(f32::NEG_INFINITY).is_nan());
        assert!(log10(f64::NAN).is_nan());
    }

    #[test]
    fn decimal_powers() {
        for (x, expected) in [(10.0f64, 1.0f64), (1000.0, 3.0), (1e-5, -5.0)] {
            assert!((log10(x) - expected).abs() <= 1e-15 * expected.abs());
        }
    }
}
