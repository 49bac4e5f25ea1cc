//! Exponentials.
//!
//! All bases reduce to `2ʳ` with `r ∈ [0, 1)` and rebuild the result by
//! scaling with an exact power of two.

use super::{Approximant, Real};

/// Computes `2ˣ`.
pub fn exp2<T: Real>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let bias = T::EXPONENT_BIAS;

    if x >= T::from_i32(bias + 1) {
        return T::INFINITY;
    }

    if x < T::from_i32(-(bias - 1 + T::MANTISSA_BITS as i32) - 1) {
        return T::ZERO;
    }

    let e = x.floor();
    let r = x - e;

    T::table(Approximant::Exp2).eval(r).scale2(e.to_i32())
}

/// Computes `bˣ`, given `log₂ b` and `1 / log₂ b` split into a short leading
/// part and a correction.
fn exp_base<T: Real>(x: T, log2_base: T, split: [T; 2], range: [T; 2]) -> T {
    if x.is_nan() {
        return x;
    }

    let [low, high] = range;

    if x > high {
        return T::INFINITY;
    }

    if x < low {
        return T::ZERO;
    }

    let e = (x * log2_base).floor();
    let [hi, lo] = split;

    let y = (x - e * hi) - e * lo;
    let r = y * log2_base;

    T::table(Approximant::Exp2).eval(r).scale2(e.to_i32())
}

/// Computes `eˣ`.
pub fn exp<T: Real>(x: T) -> T {
    let c = T::CONSTANTS;

    exp_base(x, c.log2_e, c.ln2_split, c.exp_range)
}

/// Computes `10ˣ`.
pub fn exp10<T: Real>(x: T) -> T {
    let c = T::CONSTANTS;

    exp_base(x, c.log2_10, c.log10_2_split, c.exp10_range)
}

/// Computes `eˣ − 1` without cancellation near zero.
pub fn expm1<T: Real>(x: T) -> T {
    if x.is_nan() {
        x
    } else if x.abs() <= T::CONSTANTS.frac_ln2_2 {
        x * T::table(Approximant::Expm1).eval(x)
    } else {
        exp(x) - T::ONE
    }
}
