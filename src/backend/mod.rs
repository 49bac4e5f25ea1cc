//! Generation of vectorized approximant evaluators.
//!
//! Each approximant order has one expression tree ([`GeneratedUnit`]); a
//! [`BackendDescriptor`] supplies the textual idioms that turn its nodes into
//! source code for one instruction set and element type.

mod descriptor;
mod emit;
mod unit;

pub use descriptor::{BackendDescriptor, DESCRIPTORS, ElementType, Isa};
pub use emit::{
    DEFAULT_CEILING, Emitter, emit_polynomial, emit_rational, render_backend,
    write_all, write_backend,
};
pub use unit::{Expr, GeneratedUnit, MAX_ORDER, Slice, UnitKind};
