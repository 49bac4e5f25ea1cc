//! Nested-Horner expression trees.

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::eval::Real;
use crate::order::Order;

/// Largest total order the generator accepts.
pub const MAX_ORDER: u32 = 42;

/// A range of the coefficient slice passed to a callee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slice {
    From(usize),
    Through(usize),
}

impl Slice {
    fn apply<T>(self, coeffs: &[T]) -> &[T] {
        match self {
            Slice::From(start) => &coeffs[start..],
            Slice::Through(end) => &coeffs[..=end],
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slice::From(start) => write!(f, "&c[{start}..]"),
            Slice::Through(end) => write!(f, "&c[..={end}]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// The argument vector.
    Input,
    /// A scalar coefficient.
    Coefficient(usize),
    One,
    /// Replicates a scalar across all lanes.
    Broadcast(Box<Expr>),
    /// `a·b + c`, rounded once.
    MulAdd(Box<Expr>, Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
    /// A call to another generated unit on a subslice of the coefficients.
    Call { callee: UnitKind, slice: Slice },
}

impl Expr {
    fn broadcast(scalar: Expr) -> Expr {
        Expr::Broadcast(Box::new(scalar))
    }

    fn mul_add(a: Expr, b: Expr, c: Expr) -> Expr {
        Expr::MulAdd(Box::new(a), Box::new(b), Box::new(c))
    }

    fn divide(a: Expr, b: Expr) -> Expr {
        Expr::Divide(Box::new(a), Box::new(b))
    }

    fn uses_input(&self) -> bool {
        match self {
            Expr::Input | Expr::Call { .. } => true,
            Expr::Coefficient(_) | Expr::One => false,
            Expr::Broadcast(a) => a.uses_input(),
            Expr::MulAdd(a, b, c) => {
                a.uses_input() || b.uses_input() || c.uses_input()
            }
            Expr::Divide(a, b) => a.uses_input() || b.uses_input(),
        }
    }

    fn evaluate<T: Real>(&self, x: T, coeffs: &[T]) -> T {
        match self {
            Expr::Input => x,
            Expr::Coefficient(index) => coeffs[*index],
            Expr::One => T::ONE,
            Expr::Broadcast(a) => a.evaluate(x, coeffs),
            Expr::MulAdd(a, b, c) => a
                .evaluate(x, coeffs)
                .mul_add(b.evaluate(x, coeffs), c.evaluate(x, coeffs)),
            Expr::Divide(a, b) => a.evaluate(x, coeffs) / b.evaluate(x, coeffs),
            Expr::Call { callee, slice } => {
                GeneratedUnit::new(*callee).evaluate(x, slice.apply(coeffs))
            }
        }
    }
}

/// Identifies a generated function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Polynomial(u32),
    /// A quotient with a nonempty denominator.
    Rational(Order),
}

impl UnitKind {
    pub fn name(self) -> String {
        match self {
            UnitKind::Polynomial(degree) => format!("polynomial_{degree}"),
            UnitKind::Rational(order) => {
                format!("rational_{}_{}", order.numer, order.denom)
            }
        }
    }

    fn total(self) -> u32 {
        match self {
            UnitKind::Polynomial(degree) => degree,
            UnitKind::Rational(order) => order.total(),
        }
    }
}

impl From<Order> for UnitKind {
    fn from(order: Order) -> UnitKind {
        if order.is_polynomial() {
            UnitKind::Polynomial(order.numer)
        } else {
            UnitKind::Rational(order)
        }
    }
}

/// The definition of one generated function: a body over the argument `x`
/// and the coefficient slice `c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub kind: UnitKind,
    pub body: Expr,
}

impl GeneratedUnit {
    /// Builds the unit for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the total order of `kind` exceeds [`MAX_ORDER`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::backend::{GeneratedUnit, UnitKind};
    /// #
    /// let unit = GeneratedUnit::new(UnitKind::Polynomial(2));
    ///
    /// assert_eq!(unit.evaluate(2.0, &[1.0, 2.0, 3.0]), 17.0);
    /// ```
    pub fn new(kind: UnitKind) -> GeneratedUnit {
        assert!(
            kind.total() <= MAX_ORDER,
            "order {} exceeds the generated range",
            kind.total()
        );

        let body = match kind {
            UnitKind::Polynomial(0) => Expr::broadcast(Expr::Coefficient(0)),
            UnitKind::Polynomial(degree) => Expr::mul_add(
                Expr::Call {
                    callee: UnitKind::Polynomial(degree - 1),
                    slice: Slice::From(1),
                },
                Expr::Input,
                Expr::broadcast(Expr::Coefficient(0)),
            ),
            UnitKind::Rational(order) => {
                let m = order.numer as usize;

                Expr::divide(
                    Expr::Call {
                        callee: UnitKind::Polynomial(order.numer),
                        slice: Slice::Through(m),
                    },
                    Expr::mul_add(
                        Expr::Call {
                            callee: UnitKind::Polynomial(order.denom - 1),
                            slice: Slice::From(m + 1),
                        },
                        Expr::Input,
                        Expr::broadcast(Expr::One),
                    ),
                )
            }
        };

        GeneratedUnit { kind, body }
    }

    pub fn polynomial(degree: u32) -> GeneratedUnit {
        GeneratedUnit::new(UnitKind::Polynomial(degree))
    }

    pub fn rational(order: Order) -> GeneratedUnit {
        GeneratedUnit::new(order.into())
    }

    pub fn name(&self) -> String {
        self.kind.name()
    }

    /// Units called by this one.
    pub fn dependencies(&self) -> SmallVec<[UnitKind; 2]> {
        match self.kind {
            UnitKind::Polynomial(0) => SmallVec::new(),
            UnitKind::Polynomial(degree) => {
                smallvec![UnitKind::Polynomial(degree - 1)]
            }
            UnitKind::Rational(order) => {
                let numer = UnitKind::Polynomial(order.numer);
                let denom = UnitKind::Polynomial(order.denom - 1);

                if numer == denom {
                    smallvec![numer]
                } else {
                    smallvec![numer, denom]
                }
            }
        }
    }

    pub fn uses_input(&self) -> bool {
        self.body.uses_input()
    }

    /// Interprets the tree on one lane.
    pub fn evaluate<T: Real>(&self, x: T, coeffs: &[T]) -> T {
        self.body.evaluate(x, coeffs)
    }
}
