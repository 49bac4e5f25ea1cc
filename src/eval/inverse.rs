//! Inverse trigonometric functions.
//!
//! Everything funnels into `atan(n/d)` for nonnegative `n` and `d`, so that
//! `asin` and `acos` never divide by a small difference.

use super::{Approximant, Real};

/// Arctangent of `a ∈ [0, 1.5]`.
fn atan_core<T: Real>(a: T) -> T {
    if a < T::HALF {
        a * T::table(Approximant::AtanZero).eval(a * a)
    } else {
        T::table(Approximant::AtanOne).eval(a - T::ONE)
    }
}

/// Arctangent of `num/den` for nonnegative operands, not both zero.
fn atan_ratio<T: Real>(num: T, den: T) -> T {
    if num > (T::ONE + T::HALF) * den {
        T::CONSTANTS.frac_pi_2 - atan_core(den / num)
    } else {
        atan_core(num / den)
    }
}

/// Computes `atan x`.
pub fn atan<T: Real>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    atan_ratio(x.abs(), T::ONE).negate_if(x.is_sign_negative())
}

/// Computes `√(1 − a²)` without cancellation for `a` near 1.
fn cofactor<T: Real>(a: T) -> T {
    ((T::ONE - a) * (T::ONE + a)).sqrt()
}

/// Computes `asin x`, or NaN outside `[−1, 1]`.
pub fn asin<T: Real>(x: T) -> T {
    let a = x.abs();

    if x.is_nan() || a > T::ONE {
        return T::NAN;
    }

    atan_ratio(a, cofactor(a)).negate_if(x.is_sign_negative())
}

/// Computes `acos x`, or NaN outside `[−1, 1]`.
pub fn acos<T: Real>(x: T) -> T {
    let a = x.abs();

    if x.is_nan() || a > T::ONE {
        return T::NAN;
    }

    let r = atan_ratio(cofactor(a), a);

    if x < T::ZERO {
        T::CONSTANTS.pi - r
    } else {
        r
    }
}

/// Computes the angle of the point `(x, y)`, following the IEEE 754
/// conventions for zeros and infinities.
pub fn atan2<T: Real>(y: T, x: T) -> T {
    if x.is_nan() || y.is_nan() {
        return T::NAN;
    }

    let c = T::CONSTANTS;

    let r = if y == T::ZERO {
        T::ZERO
    } else if y.is_infinite() && x.is_infinite() {
        c.frac_pi_4
    } else {
        atan_ratio(y.abs(), x.abs())
    };

    let r = if x.is_sign_negative() { c.pi - r } else { r };

    r.negate_if(y.is_sign_negative())
}
