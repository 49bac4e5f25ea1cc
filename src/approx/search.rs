//! Search for the cheapest adequate order.

use std::iter;

use smallvec::SmallVec;

use super::{
    ApproximationSpec, CoefficientTable, ErrorMetric, evaluate, fit,
};
use crate::format::Precision;
use crate::order::Order;

/// Highest total order tried by default.
pub const DEFAULT_CEILING: u32 = 42;

/// Number of interior points at which errors are measured by default.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// The worst deviation of an approximant from its reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorReport {
    /// Signed error at the worst point, under the approximation's metric.
    pub error: f64,
    pub at: f64,
}

impl ErrorReport {
    /// Measures the error at both endpoints of the domain and at `samples`
    /// equally spaced interior points. A NaN result counts as an infinite
    /// error.
    pub fn measure(
        spec: &ApproximationSpec,
        order: Order,
        coeffs: &[f64],
        samples: usize,
    ) -> ErrorReport {
        let left = spec.domain.left;
        let right = spec.domain.right;
        let step = spec.domain.width() / (samples + 1) as f64;

        iter::once(left)
            .chain((1..=samples).map(|i| left + step * i as f64))
            .chain(iter::once(right))
            .map(|x| ErrorReport {
                error: deviation(spec, order, coeffs, x),
                at: x,
            })
            .fold(ErrorReport { error: 0.0, at: left }, |worst, report| {
                if report.magnitude() > worst.magnitude() {
                    report
                } else {
                    worst
                }
            })
    }

    pub fn magnitude(&self) -> f64 {
        self.error.abs()
    }
}

fn deviation(
    spec: &ApproximationSpec,
    order: Order,
    coeffs: &[f64],
    x: f64,
) -> f64 {
    let reference = spec.reference(x);
    let error = evaluate(spec.parity, order, coeffs, x) - reference;

    let error = match spec.metric {
        ErrorMetric::Relative if reference != 0.0 => error / reference.abs(),
        _ => error,
    };

    if error.is_nan() {
        f64::INFINITY
    } else {
        error
    }
}

/// The search result for one precision class.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub precision: Precision,
    pub order: Order,
    pub table: CoefficientTable,
    /// Coefficients rounded to the class's significand width.
    pub coeffs: Vec<f64>,
    pub report: ErrorReport,
    /// Whether the error is within the class's bound. When the ceiling is
    /// reached first, the outcome holds the best order seen instead.
    pub converged: bool,
}

/// Parameters of the order search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    pub ceiling: u32,
    pub samples: usize,
}

impl Default for Search {
    fn default() -> Self {
        Search {
            ceiling: DEFAULT_CEILING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Search {
    /// Walks [`Order::candidates`] once, settling the precision classes from
    /// loosest to tightest. Each class takes the first order whose rounded
    /// coefficients meet its bound; orders whose fit fails are skipped.
    ///
    /// Outcomes are returned in ascending precision.
    pub fn run(
        &self,
        spec: &ApproximationSpec,
        classes: &[Precision],
    ) -> Vec<Outcome> {
        let mut pending: SmallVec<[Precision; 4]> =
            classes.iter().copied().collect();

        pending.sort_unstable_by(|a, b| b.cmp(a));
        pending.dedup();

        let mut outcomes = Vec::with_capacity(pending.len());
        let mut best: Option<Outcome> = None;

        for order in Order::candidates(self.ceiling) {
            if pending.is_empty() {
                break;
            }

            let table = match fit(spec, order) {
                Ok(table) => table,
                Err(err) => {
                    log::debug!("{}: skipping order {order}: {err}", spec.name);
                    continue;
                }
            };

            while let Some(&precision) = pending.last() {
                let outcome = self.assess(spec, &table, precision);

                log::trace!(
                    "{}: order {order} has error {:e} at {:e} ({precision})",
                    spec.name,
                    outcome.report.error,
                    outcome.report.at,
                );

                if outcome.converged {
                    log::info!(
                        "{}: {precision} met by order {order} (error {:e})",
                        spec.name,
                        outcome.report.error,
                    );

                    outcomes.push(outcome);
                    pending.pop();
                    best = None;
                } else {
                    if best.as_ref().map_or(true, |best| {
                        outcome.report.magnitude() < best.report.magnitude()
                    }) {
                        best = Some(outcome);
                    }

                    break;
                }
            }
        }

        while let Some(precision) = pending.pop() {
            let Some(best) = &best else {
                log::warn!(
                    "{}: no order up to {} could be fitted for {precision}",
                    spec.name,
                    self.ceiling,
                );

                continue;
            };

            let outcome = self.assess(spec, &best.table, precision);

            log::warn!(
                "{}: no order up to {} meets {precision}; best is {} \
                 with error {:e}",
                spec.name,
                self.ceiling,
                outcome.order,
                outcome.report.error,
            );

            outcomes.push(outcome);
        }

        outcomes
    }

    fn assess(
        &self,
        spec: &ApproximationSpec,
        table: &CoefficientTable,
        precision: Precision,
    ) -> Outcome {
        let coeffs = table.round_to(precision);
        let report =
            ErrorReport::measure(spec, table.order(), &coeffs, self.samples);

        Outcome {
            precision,
            order: table.order(),
            table: table.clone(),
            coeffs,
            report,
            converged: report.magnitude() <= precision.bound(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{Domain, Parity};
    use crate::eval::Approximant;

    fn sine() -> ApproximationSpec {
        ApproximationSpec::new(
            "sin",
            f64::sin,
            Domain::new(0.0, std::f64::consts::FRAC_PI_4),
        )
        .with_parity(Parity::Odd)
    }

    #[test]
    fn absolute_report() {
        let spec = ApproximationSpec::new("id", |x| x, Domain::new(-1.0, 1.0))
            .with_metric(ErrorMetric::Absolute);

        let report =
            ErrorReport::measure(&spec, Order::polynomial(1), &[0.5, 1.0], 99);

        assert_eq!(report, ErrorReport { error: 0.5, at: -1.0 });
    }

    #[test]
    fn relative_report_falls_back_at_zeros() {
        let spec = ApproximationSpec::new("id", |x| x, Domain::new(0.0, 1.0));

        let report =
            ErrorReport::measure(&spec, Order::polynomial(1), &[0.5, 1.0], 0);

        assert_eq!(report.magnitude(), 0.5);
    }

    #[test]
    fn poles_count_as_infinite() {
        let spec = ApproximationSpec::new("one", |_| 1.0, Domain::new(-2.0, 0.0));

        let report =
            ErrorReport::measure(&spec, Order::new(0, 1), &[0.0, 1.0], 3);

        assert_eq!(report.magnitude(), f64::INFINITY);
        assert_eq!(report.at, -1.0);
    }

    #[test]
    fn single_class() {
        let search = Search {
            samples: 2000,
            ..Search::default()
        };

        let outcomes = search.run(&sine(), &[Precision::Single]);

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].converged);
        assert!(outcomes[0].order.total() <= 4);
        assert!(outcomes[0].report.magnitude() <= Precision::Single.bound());
    }

    #[test]
    fn classes_settle_in_ascending_order() {
        let search = Search {
            samples: 2000,
            ..Search::default()
        };

        let classes = [Precision::Double, Precision::Bfloat16, Precision::Single];
        let outcomes = search.run(&sine(), &classes);

        let settled: Vec<_> = outcomes.iter().map(|o| o.precision).collect();

        assert_eq!(
            settled,
            [Precision::Bfloat16, Precision::Single, Precision::Double]
        );
        assert!(outcomes.iter().all(|o| o.converged));
        assert!(outcomes
            .windows(2)
            .all(|w| w[0].order.total() <= w[1].order.total()));
    }

    #[test]
    fn double_class_converges() {
        let search = Search {
            samples: 2000,
            ..Search::default()
        };

        let spec = Approximant::Exp2.spec(Precision::Double);
        let outcomes = search.run(&spec, &[Precision::Double]);

        assert!(outcomes[0].converged);
        assert!(outcomes[0].report.magnitude() <= Precision::Double.bound());
        assert!(outcomes[0].report.magnitude() > 0.0);
    }

    #[test]
    fn exhausted_ceiling_reports_best() {
        let search = Search {
            ceiling: 1,
            samples: 500,
        };

        let outcomes = search.run(&sine(), &[Precision::Single]);

        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].converged);
        assert!(outcomes[0].order.total() <= 1);
        assert!(outcomes[0].report.magnitude() > Precision::Single.bound());
    }
}
