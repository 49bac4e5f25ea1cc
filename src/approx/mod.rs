//! Offline derivation of approximant coefficients.
//!
//! A target function is sampled at equally spaced nodes and a rational
//! approximant is fitted through them by solving a dense linear system in
//! extended precision. The order search then picks, per output precision, the
//! cheapest order whose rounded coefficients stay within the precision's error
//! bound.

mod catalog;
pub mod export;
mod fit;
mod search;
mod solver;

use smallvec::SmallVec;

pub use catalog::{Derivation, derive};
pub use fit::{FitError, fit};
pub use search::{
    DEFAULT_CEILING, DEFAULT_SAMPLES, ErrorReport, Outcome, Search,
};
pub use solver::{LinearSystem, SolveError};

use crate::eval;
use crate::format::Precision;
use crate::order::Order;
use crate::utils::Extended;

/// Symmetry exploited by an approximant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// `f(x) ≈ R(x)`.
    General,
    /// `f(x) ≈ R(x²)`.
    Even,
    /// `f(x) ≈ x·R(x²)`.
    Odd,
}

impl Parity {
    /// Maps an input to the variable the approximant is evaluated at.
    pub fn variable(self, x: f64) -> f64 {
        match self {
            Parity::General => x,
            Parity::Even | Parity::Odd => x * x,
        }
    }

    /// Applies the outer factor to the approximant's value.
    pub fn restore(self, x: f64, value: f64) -> f64 {
        match self {
            Parity::General | Parity::Even => value,
            Parity::Odd => x * value,
        }
    }
}

/// A closed interval `[left, right]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub left: f64,
    pub right: f64,
}

impl Domain {
    pub const fn new(left: f64, right: f64) -> Domain {
        Domain { left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns `count` equally spaced points covering the interval, including
    /// both endpoints. A single point is placed at the midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::approx::Domain;
    /// #
    /// let nodes: Vec<_> = Domain::new(0.0, 1.0).nodes(5).collect();
    ///
    /// assert_eq!(nodes, [0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn nodes(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let steps = count.saturating_sub(1);

        (0..count).map(move |i| {
            if steps == 0 {
                self.left + self.width() / 2.0
            } else if i == steps {
                self.right
            } else {
                self.left + self.width() * (i as f64) / (steps as f64)
            }
        })
    }
}

/// How the deviation from the reference is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorMetric {
    Absolute,
    /// Relative to the reference, falling back to absolute error where the
    /// reference vanishes.
    Relative,
}

/// Everything needed to fit one coefficient table.
#[derive(Clone, Copy, Debug)]
pub struct ApproximationSpec {
    pub name: &'static str,
    /// High-accuracy reference for the function being approximated.
    pub target: fn(f64) -> f64,
    /// Interval of the approximant's argument, before the shift is applied.
    pub domain: Domain,
    /// Center of the expansion: the approximant in `t` models
    /// `target(shift + t)`.
    pub shift: f64,
    pub parity: Parity,
    pub metric: ErrorMetric,
}

impl ApproximationSpec {
    pub fn new(
        name: &'static str,
        target: fn(f64) -> f64,
        domain: Domain,
    ) -> ApproximationSpec {
        ApproximationSpec {
            name,
            target,
            domain,
            shift: 0.0,
            parity: Parity::General,
            metric: ErrorMetric::Relative,
        }
    }

    pub fn with_parity(self, parity: Parity) -> ApproximationSpec {
        ApproximationSpec { parity, ..self }
    }

    pub fn with_shift(self, shift: f64) -> ApproximationSpec {
        ApproximationSpec { shift, ..self }
    }

    pub fn with_metric(self, metric: ErrorMetric) -> ApproximationSpec {
        ApproximationSpec { metric, ..self }
    }

    /// Evaluates the reference at a point of the domain.
    pub fn reference(&self, x: f64) -> f64 {
        (self.target)(self.shift + x)
    }
}

/// Fitted coefficients, numerator first, in extended precision.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientTable {
    order: Order,
    parity: Parity,
    coeffs: SmallVec<[Extended; 16]>,
}

impl CoefficientTable {
    pub fn new(
        order: Order,
        parity: Parity,
        coeffs: impl IntoIterator<Item = Extended>,
    ) -> CoefficientTable {
        let coeffs: SmallVec<_> = coeffs.into_iter().collect();

        assert_eq!(coeffs.len(), order.len());

        CoefficientTable {
            order,
            parity,
            coeffs,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn coeffs(&self) -> &[Extended] {
        &self.coeffs
    }

    pub fn to_f64s(&self) -> Vec<f64> {
        self.coeffs.iter().map(Extended::to_f64).collect()
    }

    /// Rounds every coefficient to the significand width of `precision`.
    pub fn round_to(&self, precision: Precision) -> Vec<f64> {
        self.coeffs
            .iter()
            .map(|c| precision.round(c))
            .collect()
    }

    /// Evaluates the approximant in double precision.
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(self.parity, self.order, &self.to_f64s(), x)
    }
}

/// Evaluates an approximant with the given coefficients at `x`, using the
/// same nested evaluation as the runtime functions.
pub fn evaluate(parity: Parity, order: Order, coeffs: &[f64], x: f64) -> f64 {
    let u = parity.variable(x);

    parity.restore(x, eval::rational(coeffs, order, u))
}
