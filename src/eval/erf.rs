//! The error function and its complement.
//!
//! Beyond `|x| = 1` both are derived from `erfc(x) = exp(−x²)·g(1/x²)/x`,
//! where `g` is tabulated in two pieces. The factor `exp(−x²)` is evaluated
//! as `exp(−z²)·exp((z − x)(z + x))` with `z` a truncated copy of `x`, so that
//! `z²` is exact and neither factor overflows before the result underflows.

use super::{Approximant, Real, exp};

fn erfc_large<T: Real>(a: T) -> T {
    let c = T::CONSTANTS;
    let u = T::ONE / (a * a);

    let table = if a <= T::TWO {
        Approximant::ErfcMid
    } else {
        Approximant::ErfcTail
    };

    let g = T::table(table).eval(u);

    let z = a.truncate(c.erfc_split);
    let scale = exp(-(z * z)) * exp((z - a) * (z + a));

    (g / a) * scale
}

/// Computes `erf x`.
pub fn erf<T: Real>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let a = x.abs();

    let v = if a <= T::ONE {
        a * T::table(Approximant::Erf).eval(a * a)
    } else if a < T::CONSTANTS.erf_saturation {
        T::ONE - erfc_large(a)
    } else {
        T::ONE
    };

    v.negate_if(x.is_sign_negative())
}

/// Computes `erfc x = 1 − erf x` without cancellation for large `x`.
pub fn erfc<T: Real>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let a = x.abs();
    let cutoff = T::CONSTANTS.erfc_cutoff;

    if a <= T::ONE {
        T::ONE - x * T::table(Approximant::Erf).eval(x * x)
    } else if x > T::ZERO {
        if x >= cutoff {
            T::ZERO
        } else {
            erfc_large(x)
        }
    } else if a >= cutoff {
        T::TWO
    } else {
        T::TWO - erfc_large(a)
    }
}
