//! Approximant orders.

use std::fmt;

/// Degrees of a rational approximant `P(u) / (1 + u·Q(u))`, where `P` has
/// degree `numer` and the denominator carries `denom` free coefficients.
///
/// Coefficients are stored numerator first, lowest degree first, so a table
/// for an order holds [`Order::len`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order {
    pub numer: u32,
    pub denom: u32,
}

impl Order {
    pub const fn new(numer: u32, denom: u32) -> Order {
        Order { numer, denom }
    }

    pub const fn polynomial(degree: u32) -> Order {
        Order::new(degree, 0)
    }

    pub const fn total(self) -> u32 {
        self.numer + self.denom
    }

    /// Number of coefficients in a table of this order.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.total() as usize + 1
    }

    pub const fn is_polynomial(self) -> bool {
        self.denom == 0
    }

    /// Enumerates orders by ascending total degree and, within a total, by
    /// ascending denominator degree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::order::Order;
    /// #
    /// let orders: Vec<_> = Order::candidates(1).collect();
    ///
    /// assert_eq!(
    ///     orders,
    ///     [Order::new(0, 0), Order::new(1, 0), Order::new(0, 1)]
    /// );
    /// ```
    pub fn candidates(ceiling: u32) -> impl Iterator<Item = Order> {
        (0..=ceiling).flat_map(|total| {
            (0..=total).map(move |denom| Order::new(total - denom, denom))
        })
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_count() {
        assert_eq!(Order::candidates(0).count(), 1);
        assert_eq!(Order::candidates(42).count(), 43 * 44 / 2);
    }

    #[test]
    fn candidates_ascend_by_total() {
        let orders: Vec<_> = Order::candidates(5).collect();

        assert!(orders.windows(2).all(|w| w[0].total() <= w[1].total()));
        assert_eq!(orders[3], Order::polynomial(2));
        assert_eq!(orders.last(), Some(&Order::new(0, 5)));
    }

    #[test]
    fn table_length() {
        assert_eq!(Order::new(4, 1).len(), 6);
        assert_eq!(Order::polynomial(0).len(), 1);
        assert_eq!(Order::new(3, 2).to_string(), "(3, 2)");
    }
}
