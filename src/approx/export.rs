//! Rendering of search results as Rust table definitions.

use std::io;

use super::{Derivation, Outcome};
use crate::format::Precision;

/// Writes every outcome of a derivation as a `static` table definition.
pub fn write_derivation<W: io::Write>(
    out: &mut W,
    derivation: &Derivation,
) -> io::Result<()> {
    for outcome in &derivation.outcomes {
        write_outcome(out, derivation, outcome)?;
    }

    Ok(())
}

fn write_outcome<W: io::Write>(
    out: &mut W,
    derivation: &Derivation,
    outcome: &Outcome,
) -> io::Result<()> {
    let domain = derivation.spec.domain;
    let status = if outcome.converged {
        ""
    } else {
        ", not converged"
    };

    writeln!(
        out,
        "// {} on [{:e}, {:e}] for {}: error {:e} at {:e}{status}",
        derivation.spec.name,
        domain.left,
        domain.right,
        outcome.precision,
        outcome.report.error,
        outcome.report.at,
    )?;

    let element = match outcome.precision {
        Precision::Double => "f64",
        _ => "f32",
    };

    let name = match outcome.precision {
        Precision::Single | Precision::Double => {
            derivation.approximant.to_string()
        }
        precision => format!(
            "{}_{}",
            derivation.approximant,
            precision.name().to_ascii_uppercase()
        ),
    };

    writeln!(out, "pub static {name}: Table<{element}> = Table::new(")?;
    writeln!(
        out,
        "    Order::new({}, {}),",
        outcome.order.numer, outcome.order.denom
    )?;
    writeln!(out, "    &[")?;

    for &coeff in &outcome.coeffs {
        writeln!(out, "        {},", literal(coeff, outcome.precision))?;
    }

    writeln!(out, "    ],")?;
    writeln!(out, ");")?;
    writeln!(out)
}

/// Formats a coefficient as the shortest literal that reads back exactly.
fn literal(value: f64, precision: Precision) -> String {
    match precision {
        Precision::Double => format!("{value:?}"),
        _ => format!("{:?}", value as f32),
    }
}
