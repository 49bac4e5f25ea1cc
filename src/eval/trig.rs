//! Sine, cosine and tangent.

use super::tables::TWO_OVER_PI;
use super::{Approximant, Real};

/// Reduces a nonnegative finite argument to `branch·π/2 + r (mod 2π)` with
/// `|r| ≤ π/4`.
///
/// Arguments already within `[−π/4, π/4]` are returned unchanged in branch 0.
/// Moderate arguments are first reduced modulo 2π using a three-part
/// splitting of 2π, then the quadrant is chosen against exact bounds and π/2
/// is removed in two parts, keeping `r` accurate near the zeros of sine and
/// cosine. Beyond `trig_large` the reduction multiplies by a 192-bit window
/// of 2/π in integer arithmetic instead.
///
/// # Examples
///
/// ```
/// # use approx_libm::eval::reduce_trig;
/// #
/// assert_eq!(reduce_trig(0.5f64), (0, 0.5));
///
/// let (branch, r) = reduce_trig(std::f64::consts::PI);
///
/// assert_eq!(branch % 4, 2);
/// assert!(r.abs() < 1e-15);
/// ```
pub fn reduce_trig<T: Real>(x: T) -> (u32, T) {
    let c = T::CONSTANTS;

    if x.abs() <= c.frac_pi_4 {
        return (0, x);
    }

    if x > c.trig_large {
        let (branch, r) = reduce_large(x.widen());

        return (branch, T::narrow(r));
    }

    let k = (x / c.two_pi).floor();
    let [p1, p2, p3] = c.two_pi_split;

    let head = x - k * p1;
    let y = (head - k * p2) - k * p3;

    let branch = c.quadrant_bounds.iter().filter(|&&b| y >= b).count() as u32;
    let j = T::from_i32(branch as i32);
    let [h1, h2] = c.frac_pi_2_split;

    let r = ((head - j * h1) - k * p2) - (k * p3 + j * h2);

    (branch, r)
}

/// Sixty-four bits of 2/π starting at bit `start`, counting the first bit
/// after the binary point as 1.
fn two_over_pi_bits(start: usize) -> u64 {
    let word = (start - 1) / 64;
    let offset = (start - 1) % 64;

    if offset == 0 {
        TWO_OVER_PI[word]
    } else {
        (TWO_OVER_PI[word] << offset) | (TWO_OVER_PI[word + 1] >> (64 - offset))
    }
}

/// Reduces a finite `x ≥ 1` to `branch·π/2 + r` with `branch < 4`.
///
/// Writing `x = m·2^e`, only the bits of 2/π from position `e − 1` onwards
/// affect `x·2/π` modulo 4, so the product of `m` with a 192-bit window of
/// 2/π carries the quadrant and 128 fraction bits.
fn reduce_large(x: f64) -> (u32, f64) {
    const MASK: u128 = u64::MAX as u128;
    const FRAC_PI_2_HI: f64 = 1.5707963267948966;
    const FRAC_PI_2_LO: f64 = 6.123233995736766e-17;

    let bits = x.to_bits();
    let m = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
    let e = ((bits >> 52) & 0x7ff) as i32 - 1075;

    let start = (e - 1).max(1);
    let point = (start + 191 - e) as u32;
    let start = start as usize;

    let t0 = m * u128::from(two_over_pi_bits(start + 128));
    let t1 = m * u128::from(two_over_pi_bits(start + 64)) + (t0 >> 64);
    let t2 = m * u128::from(two_over_pi_bits(start)) + (t1 >> 64);

    let lo = (t0 & MASK) | (t1 << 64);
    let hi = t2;

    let shift = point - 128;
    let fraction = (lo >> shift) | (hi << (128 - shift));
    let quadrant = ((hi >> shift) & 3) as u32 + (fraction >> 127) as u32;

    // Centred on zero: the upper half of the fraction rounds up a quadrant.
    let f = fraction as i128;
    let f_hi = f as f64;
    let f_lo = (f - f_hi as i128) as f64;

    let head = f_hi * FRAC_PI_2_HI;
    let tail = f_hi.mul_add(FRAC_PI_2_HI, -head)
        + f_hi.mul_add(FRAC_PI_2_LO, f_lo * FRAC_PI_2_HI);

    (quadrant & 3, (head + tail) * 2f64.powi(-128))
}

/// Computes `sin x` and `cos x` together.
pub fn sincos<T: Real>(x: T) -> (T, T) {
    if x.is_nan() || x.is_infinite() {
        return (T::NAN, T::NAN);
    }

    let (branch, r) = reduce_trig(x.abs());

    let r2 = r * r;
    let s = r * T::table(Approximant::Sin).eval(r2);
    let c = T::table(Approximant::Cos).eval(r2);

    let (s, c) = match branch % 4 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };

    (s.negate_if(x.is_sign_negative()), c)
}

/// Computes `sin x`.
pub fn sin<T: Real>(x: T) -> T {
    sincos(x).0
}

/// Computes `cos x`.
pub fn cos<T: Real>(x: T) -> T {
    sincos(x).1
}

/// Computes `tan x`.
pub fn tan<T: Real>(x: T) -> T {
    let (s, c) = sincos(x);

    s / c
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::eval::Family;

    #[test]
    fn reduction_is_identity_on_reduced_inputs() {
        for x in [0.0, 1e-300, 0.1, -0.5, FRAC_PI_4, -FRAC_PI_4] {
            assert_eq!(reduce_trig(x), (0, x));
        }

        assert_eq!(reduce_trig(0.75f32), (0, 0.75));
    }

    #[test]
    fn reduction_quadrants() {
        assert_eq!(reduce_trig(FRAC_PI_2).0, 1);
        assert_eq!(reduce_trig(PI).0, 2);
        assert_eq!(reduce_trig(3.0 * FRAC_PI_2).0, 3);
        assert_eq!(reduce_trig(2.0 * PI).0, 0);
        assert_eq!(reduce_trig(2.0 * PI - 0.1).0, 4);

        let (_, r) = reduce_trig(2.0 * PI + 0.25);

        assert!((r - 0.25).abs() < 1e-15);
    }

    #[test]
    fn exact_points() {
        assert_eq!(sin(0.0f64), 0.0);
        assert!(sin(-0.0f32).is_sign_negative());
        assert_eq!(cos(0.0f64), 1.0);
        assert_eq!(tan(0.0f32), 0.0);
    }

    #[test]
    fn symmetry() {
        for x in [0.3, 1.0, 2.5, 4.0, 100.0] {
            assert_eq!(sin(-x), -sin(x));
            assert_eq!(cos(-x), cos(x));
            assert_eq!(tan(-x), -tan(x));
        }
    }

    #[test]
    fn non_finite() {
        assert!(sin(f64::INFINITY).is_nan());
        assert!(cos(f32::NEG_INFINITY).is_nan());
        assert!(tan(f64::NAN).is_nan());
    }

    #[test]
    fn near_zeros() {
        let s = sin(PI);
        let relative = (s - 1.2246467991473532e-16).abs() / 1.2246467991473532e-16;

        assert!(relative < 1e-12);
        assert!(cos(FRAC_PI_2).abs() < 1e-16);
    }

    #[test]
    fn large_arguments() {
        let tolerance = Family::Trigonometric.tolerance::<f64>();

        for x in [1e17, 1e20, 1e100, 1e300, f64::MAX, 1048577.0] {
            let (branch, r) = reduce_trig(x);

            assert!(branch < 4);
            assert!(r.abs() <= FRAC_PI_4 * (1.0 + 1e-12));

            let (s, c) = sincos(x);

            assert!((s - x.sin()).abs() <= tolerance, "sin({x:e}) = {s}");
            assert!((c - x.cos()).abs() <= tolerance, "cos({x:e}) = {c}");
        }

        let tolerance = Family::Trigonometric.tolerance::<f32>();

        for x in [1e5f32, 1e8, 1e10, 1e20, 4097.0, f32::MAX] {
            let (s, c) = sincos(x);
            let expected = f64::from(x);

            assert!((f64::from(s) - expected.sin()).abs() <= tolerance);
            assert!((f64::from(c) - expected.cos()).abs() <= tolerance);
            assert_eq!(sin(-x), -s);
        }
    }

    #[test]
    fn large_reduction_matches_moderate_reduction() {
        for x in [4096.5f64, 10000.25, 524288.0, 1048575.75] {
            let (branch, r) = reduce_trig(x);
            let (large, s) = reduce_large(x);

            assert_eq!(branch % 4, large);
            assert!((r - s).abs() < 1e-12, "{x}: {r} against {s}");
        }
    }
}
