//! Runtime evaluation of elementary functions.
//!
//! Every function reduces its argument to a small interval, evaluates a fixed
//! rational approximant there, and reconstructs the result. The approximants'
//! coefficients live in [`tables`]; the code here is generic over [`Real`] so
//! that `f32` and `f64` share one implementation.
//!
//! Relative error bounds per family, verified by the test suite:
//!
//! | family              | `f32` | `f64` |
//! |---------------------|-------|-------|
//! | exponential         | 2⁻²⁰  | 2⁻⁴⁹  |
//! | logarithmic         | 2⁻²¹  | 2⁻⁵⁰  |
//! | trigonometric       | 2⁻²¹  | 2⁻⁵⁰  |
//! | inverse trig        | 2⁻²¹  | 2⁻⁵⁰  |
//! | hyperbolic          | 2⁻²⁰  | 2⁻⁴⁹  |
//! | error function      | 2⁻¹⁹  | 2⁻⁴⁸  |
//!
//! Trigonometric bounds are relative away from the zeros of each function and
//! absolute near them and for large arguments.

mod erf;
mod exp;
mod hyperbolic;
mod inverse;
mod log;
mod real;
pub mod tables;
mod trig;

use strum_macros::{
    Display, EnumCount, EnumString, IntoStaticStr, VariantArray,
};

pub use erf::{erf, erfc};
pub use exp::{exp, exp2, exp10, expm1};
pub use hyperbolic::{cosh, sinh, tanh};
pub use inverse::{acos, asin, atan, atan2};
pub use log::{log, log2, log10};
pub use real::Real;
pub use tables::Constants;
pub use trig::{cos, reduce_trig, sin, sincos, tan};

use crate::order::Order;

/// A coefficient table for one approximant, numerator first.
#[derive(Debug)]
pub struct Table<T: 'static> {
    pub order: Order,
    pub coeffs: &'static [T],
}

impl<T> Table<T> {
    pub const fn new(order: Order, coeffs: &'static [T]) -> Table<T> {
        assert!(coeffs.len() == order.len());

        Table { order, coeffs }
    }
}

impl<T: Real> Table<T> {
    #[inline]
    pub fn eval(&self, u: T) -> T {
        rational(self.coeffs, self.order, u)
    }
}

/// Evaluates `c₀ + c₁u + … + cₖuᵏ` by Horner's scheme with fused steps.
///
/// # Examples
///
/// ```
/// # use approx_libm::eval::polynomial;
/// #
/// assert_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
/// assert_eq!(polynomial::<f32>(&[], 2.0), 0.0);
/// ```
#[inline]
pub fn polynomial<T: Real>(coeffs: &[T], u: T) -> T {
    match coeffs.split_last() {
        Some((&last, rest)) => {
            rest.iter().rev().fold(last, |acc, &c| acc.mul_add(u, c))
        }
        None => T::ZERO,
    }
}

/// Evaluates `P(u) / (1 + u·Q(u))`, where `P` takes the first
/// `order.numer + 1` coefficients and `Q` the rest.
#[inline]
pub fn rational<T: Real>(coeffs: &[T], order: Order, u: T) -> T {
    let (numer, denom) = coeffs.split_at(order.numer as usize + 1);
    let p = polynomial(numer, u);

    if order.is_polynomial() {
        p
    } else {
        p / polynomial(denom, u).mul_add(u, T::ONE)
    }
}

/// The fixed approximants used by the runtime functions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Approximant {
    /// `2ʳ` for `r ∈ [0, 1]`.
    Exp2,
    /// `log₂((1 + s)/(1 − s)) / s` in `s²`.
    Log2,
    /// `sin(r)/r` in `r²` for `r ∈ [0, π/4]`.
    Sin,
    /// `cos(r)` in `r²` for `r ∈ [0, π/4]`.
    Cos,
    /// `atan(a)/a` in `a²` for `a ∈ [0, 1/2]`.
    AtanZero,
    /// `atan(1 + t)` for `t ∈ [−1/2, 1/2]`.
    AtanOne,
    /// `(eˣ − 1)/x` for `|x| ≤ ln(2)/2`.
    Expm1,
    /// `erf(x)/x` in `x²` for `x ∈ [0, 1]`.
    Erf,
    /// `x·exp(x²)·erfc(x)` in `1/x²` for `x ∈ [1, 2]`.
    ErfcMid,
    /// `x·exp(x²)·erfc(x)` in `1/x²` from `x = 2` to the underflow point.
    ErfcTail,
}

/// Groups of functions sharing an accuracy bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Family {
    Exponential,
    Logarithmic,
    Trigonometric,
    InverseTrigonometric,
    Hyperbolic,
    ErrorFunction,
}

impl Family {
    /// Bits of accuracy given up relative to the type's precision.
    const fn slack(self) -> u32 {
        match self {
            Family::Logarithmic
            | Family::Trigonometric
            | Family::InverseTrigonometric => 3,
            Family::Exponential | Family::Hyperbolic => 4,
            Family::ErrorFunction => 5,
        }
    }

    /// Relative error bound for results of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::eval::Family;
    /// #
    /// assert_eq!(Family::Exponential.tolerance::<f32>(), 2f64.powi(-20));
    /// assert_eq!(Family::ErrorFunction.tolerance::<f64>(), 2f64.powi(-48));
    /// ```
    pub fn tolerance<T: Real>(self) -> f64 {
        let bits = T::DIGITS - self.slack();

        2f64.powi(-(bits as i32))
    }
}

/// Name-based access to the runtime functions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "snake_case")]
pub enum Function {
    Exp2,
    Exp,
    Exp10,
    Expm1,
    Log2,
    Log,
    Log10,
    Sin,
    Cos,
    Tan,
    Atan,
    Asin,
    Acos,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Erf,
    Erfc,
}

impl Function {
    pub fn family(self) -> Family {
        match self {
            Function::Exp2 | Function::Exp | Function::Exp10 | Function::Expm1 => {
                Family::Exponential
            }
            Function::Log2 | Function::Log | Function::Log10 => {
                Family::Logarithmic
            }
            Function::Sin | Function::Cos | Function::Tan => {
                Family::Trigonometric
            }
            Function::Atan | Function::Asin | Function::Acos | Function::Atan2 => {
                Family::InverseTrigonometric
            }
            Function::Sinh | Function::Cosh | Function::Tanh => {
                Family::Hyperbolic
            }
            Function::Erf | Function::Erfc => Family::ErrorFunction,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Function::Atan2 => 2,
            _ => 1,
        }
    }

    pub fn unary<T: Real>(self) -> Option<fn(T) -> T> {
        let f: fn(T) -> T = match self {
            Function::Exp2 => exp2,
            Function::Exp => exp,
            Function::Exp10 => exp10,
            Function::Expm1 => expm1,
            Function::Log2 => log2,
            Function::Log => log,
            Function::Log10 => log10,
            Function::Sin => sin,
            Function::Cos => cos,
            Function::Tan => tan,
            Function::Atan => atan,
            Function::Asin => asin,
            Function::Acos => acos,
            Function::Sinh => sinh,
            Function::Cosh => cosh,
            Function::Tanh => tanh,
            Function::Erf => erf,
            Function::Erfc => erfc,
            Function::Atan2 => return None,
        };

        Some(f)
    }

    pub fn binary<T: Real>(self) -> Option<fn(T, T) -> T> {
        match self {
            Function::Atan2 => Some(atan2),
            _ => None,
        }
    }

    /// Applies the function to `args`, returning `None` on an arity
    /// mismatch. Binary functions take `(y, x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::eval::Function;
    /// #
    /// let log2: Function = "log2".parse().unwrap();
    ///
    /// assert_eq!(log2.eval(&[8.0f64]), Some(3.0));
    /// assert_eq!(log2.eval(&[8.0f64, 1.0]), None);
    /// ```
    pub fn eval<T: Real>(self, args: &[T]) -> Option<T> {
        match *args {
            [x] => self.unary().map(|f| f(x)),
            [y, x] => self.binary().map(|f| f(y, x)),
            _ => None,
        }
    }

    pub fn eval_f32(self, args: &[f32]) -> Option<f32> {
        self.eval(args)
    }

    pub fn eval_f64(self, args: &[f64]) -> Option<f64> {
        self.eval(args)
    }
}

macro_rules! exports {
    ($($(#[$attr:meta])* $single:ident, $double:ident => $func:path;)*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $single(x: f32) -> f32 {
                $func(x)
            }

            $(#[$attr])*
            #[inline]
            pub fn $double(x: f64) -> f64 {
                $func(x)
            }
        )*
    };
}

exports! {
    /// Base-2 exponential.
    f32_exp2, f64_exp2 => exp2;
    /// Natural exponential.
    f32_exp, f64_exp => exp;
    /// Base-10 exponential.
    f32_exp10, f64_exp10 => exp10;
    /// `eˣ − 1`, accurate near zero.
    f32_expm1, f64_expm1 => expm1;
    /// Base-2 logarithm.
    f32_log2, f64_log2 => log2;
    /// Natural logarithm.
    f32_log, f64_log => log;
    /// Base-10 logarithm.
    f32_log10, f64_log10 => log10;
    f32_sin, f64_sin => sin;
    f32_cos, f64_cos => cos;
    f32_tan, f64_tan => tan;
    f32_atan, f64_atan => atan;
    f32_asin, f64_asin => asin;
    f32_acos, f64_acos => acos;
    f32_sinh, f64_sinh => sinh;
    f32_cosh, f64_cosh => cosh;
    f32_tanh, f64_tanh => tanh;
    /// Error function.
    f32_erf, f64_erf => erf;
    /// Complementary error function.
    f32_erfc, f64_erfc => erfc;
}

/// Four-quadrant arctangent of `y/x`.
#[inline]
pub fn f32_atan2(y: f32, x: f32) -> f32 {
    atan2(y, x)
}

/// Four-quadrant arctangent of `y/x`.
#[inline]
pub fn f64_atan2(y: f64, x: f64) -> f64 {
    atan2(y, x)
}

/// Sine and cosine sharing one argument reduction.
#[inline]
pub fn f32_sincos(x: f32) -> (f32, f32) {
    sincos(x)
}

/// Sine and cosine sharing one argument reduction.
#[inline]
pub fn f64_sincos(x: f64) -> (f64, f64) {
    sincos(x)
}
