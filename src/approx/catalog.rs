//! Reference targets for the runtime approximants.

use std::f64::consts::{FRAC_PI_4, LN_2, LOG2_E, PI, SQRT_2};

use itertools::Itertools;

use super::{ApproximationSpec, Domain, Outcome, Parity, Search};
use crate::eval::Approximant;
use crate::format::Precision;

/// Terms of the continued fraction used for the complementary error function.
const FRACTION_TERMS: u32 = 200;

/// Below this point the complementary error function is taken from `libm`.
const FRACTION_START: f64 = 3.0;

impl Approximant {
    /// Describes the fit behind this approximant's table at `precision`.
    pub fn spec(self, precision: Precision) -> ApproximationSpec {
        match self {
            Approximant::Exp2 => ApproximationSpec::new(
                "exp2",
                f64::exp2,
                Domain::new(0.0, 1.0),
            ),
            Approximant::Log2 => ApproximationSpec::new(
                "log2",
                log2_of_quotient,
                Domain::new(0.0, 3.0 - 2.0 * SQRT_2),
            )
            .with_parity(Parity::Odd),
            Approximant::Sin => ApproximationSpec::new(
                "sin",
                f64::sin,
                Domain::new(0.0, FRAC_PI_4),
            )
            .with_parity(Parity::Odd),
            Approximant::Cos => ApproximationSpec::new(
                "cos",
                f64::cos,
                Domain::new(0.0, FRAC_PI_4),
            )
            .with_parity(Parity::Even),
            Approximant::AtanZero => ApproximationSpec::new(
                "atan_zero",
                f64::atan,
                Domain::new(0.0, 0.5),
            )
            .with_parity(Parity::Odd),
            Approximant::AtanOne => ApproximationSpec::new(
                "atan_one",
                f64::atan,
                Domain::new(-0.5, 0.5),
            )
            .with_shift(1.0),
            Approximant::Expm1 => ApproximationSpec::new(
                "expm1",
                expm1_quotient,
                Domain::new(-LN_2 / 2.0, LN_2 / 2.0),
            ),
            Approximant::Erf => {
                ApproximationSpec::new("erf", libm::erf, Domain::new(0.0, 1.0))
                    .with_parity(Parity::Odd)
            }
            Approximant::ErfcMid => ApproximationSpec::new(
                "erfc_mid",
                erfc_scaled,
                Domain::new(0.25, 1.0),
            ),
            Approximant::ErfcTail => {
                let cutoff = erfc_cutoff(precision);

                ApproximationSpec::new(
                    "erfc_tail",
                    erfc_scaled,
                    Domain::new((cutoff * cutoff).recip(), 0.25),
                )
            }
        }
    }
}

/// Point beyond which the complementary error function underflows the
/// runtime type used for `precision`.
fn erfc_cutoff(precision: Precision) -> f64 {
    match precision {
        Precision::Double => 27.226017111108362,
        _ => 10.1276245,
    }
}

/// `log2((1 + s) / (1 - s))`.
fn log2_of_quotient(s: f64) -> f64 {
    2.0 * s.atanh() * LOG2_E
}

/// `(eˣ − 1) / x`, extended continuously to the origin.
fn expm1_quotient(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.exp_m1() / x
    }
}

/// `x·exp(x²)·erfc(x)` at `x = 1/√u`.
fn erfc_scaled(u: f64) -> f64 {
    let x = u.sqrt().recip();

    if x < FRACTION_START {
        x * (x * x).exp() * libm::erfc(x)
    } else {
        erfc_fraction(x)
    }
}

/// Evaluates `x·exp(x²)·erfc(x)` from the Laplace continued fraction.
fn erfc_fraction(x: f64) -> f64 {
    let tail = (1..=FRACTION_TERMS)
        .rev()
        .fold(x, |t, k| x + f64::from(k) / 2.0 / t);

    x / (PI.sqrt() * tail)
}

/// Search results for one approximant over a group of precision classes that
/// share a domain.
#[derive(Clone, Debug)]
pub struct Derivation {
    pub approximant: Approximant,
    pub spec: ApproximationSpec,
    pub outcomes: Vec<Outcome>,
}

/// Runs the order search for each approximant at each precision class.
///
/// Classes are searched together whenever they share a domain, so most
/// approximants take a single pass over the candidate orders.
pub fn derive(
    approximants: &[Approximant],
    classes: &[Precision],
    search: &Search,
) -> Vec<Derivation> {
    let classes: Vec<_> = classes.iter().copied().sorted().dedup().collect();
    let mut derivations = Vec::new();

    for &approximant in approximants {
        let groups = classes
            .iter()
            .copied()
            .group_by(|&precision| approximant.spec(precision).domain);

        for (_, group) in &groups {
            let group: Vec<_> = group.collect();
            let spec = approximant.spec(group[0]);

            log::info!("{}: searching {} class(es)", spec.name, group.len());

            derivations.push(Derivation {
                approximant,
                spec,
                outcomes: search.run(&spec, &group),
            });
        }
    }

    derivations
}
