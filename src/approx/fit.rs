//! Interpolating rational fits.

use std::cmp::Ordering;
use std::{fmt, iter};

use super::{
    ApproximationSpec, CoefficientTable, LinearSystem, Parity, SolveError,
};
use crate::order::Order;
use crate::utils::Extended;

/// Distance, relative to the node spacing, by which a node at the origin is
/// moved for odd targets.
const ORIGIN_OFFSET: i32 = -40;

/// Fits an approximant of the given order through equally spaced samples of
/// the target.
///
/// With `P(u) = c₀ + … + cₘuᵐ` and `Q(u) = d₁ + … + dₙuⁿ⁻¹`, each node
/// contributes the linearized equation `P(u) − y·u·Q(u) = y`, so a table of
/// `m + n + 1` coefficients interpolates the target at `m + n + 1` nodes.
pub fn fit(
    spec: &ApproximationSpec,
    order: Order,
) -> Result<CoefficientTable, FitError> {
    let domain = spec.domain;

    if domain.left.partial_cmp(&domain.right) != Some(Ordering::Less) {
        return Err(FitError::EmptyDomain);
    }

    let count = order.len();
    let numer = order.numer as usize;
    let denom = order.denom as usize;

    let spacing = domain.width() / count.saturating_sub(1).max(1) as f64;
    let offset = spacing * 2f64.powi(ORIGIN_OFFSET);

    let mut system = LinearSystem::new(count);

    for (row, x) in domain.nodes(count).enumerate() {
        let x = if spec.parity == Parity::Odd && x == 0.0 {
            offset
        } else {
            x
        };

        let (u, y) = sample(spec, x)?;

        let powers: Vec<_> = iter::successors(Some(Extended::ONE), |p| {
            Some(p * &u)
        })
        .take(numer.max(denom) + 1)
        .collect();

        for (col, power) in powers[..=numer].iter().enumerate() {
            system.set(row, col, power.clone());
        }

        for (k, power) in powers.iter().enumerate().take(denom + 1).skip(1) {
            system.set(row, numer + k, -(&y * power));
        }

        system.set_rhs(row, y);
    }

    let coeffs = system.solve()?;

    Ok(CoefficientTable::new(order, spec.parity, coeffs))
}

/// Returns the approximant's variable and the value it must take at `x`.
fn sample(
    spec: &ApproximationSpec,
    x: f64,
) -> Result<(Extended, Extended), FitError> {
    let value = spec.reference(x);

    let (Some(point), Some(value)) =
        (Extended::from_f64(x), Extended::from_f64(value))
    else {
        return Err(FitError::NonFinite { x });
    };

    let (u, y) = match spec.parity {
        Parity::General => (point, value),
        Parity::Even => (&point * &point, value),
        Parity::Odd => (&point * &point, value / &point),
    };

    Ok((u, y))
}

/// An error from fitting an approximant.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    EmptyDomain,
    /// The reference is infinite or NaN at a node.
    NonFinite { x: f64 },
    Solve(SolveError),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::EmptyDomain => write!(f, "empty domain"),
            FitError::NonFinite { x } => {
                write!(f, "reference is not finite at {x:e}")
            }
            FitError::Solve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FitError {}

impl From<SolveError> for FitError {
    fn from(err: SolveError) -> Self {
        FitError::Solve(err)
    }
}
