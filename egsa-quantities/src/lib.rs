pub mod cost;
pub mod rate;
pub mod usage;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Floating-point quantity tagged with its dimension exponents.
///
/// `USAGE` counts metered units (kilowatt-hours, cubic meters, pounds of steam),
/// `COST` counts currency units.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const USAGE: isize, const COST: isize>(pub OrderedFloat<f64>);

impl<const USAGE: isize, const COST: isize> Quantity<USAGE, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn abs(mut self) -> Self {
        self.0 = OrderedFloat(self.0.0.abs());
        self
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    /// Round half away from zero to the given number of decimal places.
    ///
    /// Rounding happens on the decimal value the float stands for, so `1.005` becomes `1.01`
    /// even though its binary representation is slightly below the midpoint.
    pub fn round_to(self, decimal_places: u32) -> Self {
        to_decimal(self.0.0)
            .map(|value| {
                value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
            })
            .as_ref()
            .and_then(Decimal::to_f64)
            .map_or(self, |value| Self(OrderedFloat(value)))
    }
}

/// Shortest decimal that round-trips to the float, or `None` for values out of decimal range.
fn to_decimal(value: f64) -> Option<Decimal> {
    if value.is_finite() { value.to_string().parse().ok() } else { None }
}

/// Multiply in decimal arithmetic, falling back to floats outside of the decimal range.
pub(crate) fn decimal_mul(lhs: f64, rhs: f64) -> f64 {
    to_decimal(lhs)
        .zip(to_decimal(rhs))
        .and_then(|(lhs, rhs)| lhs.checked_mul(rhs))
        .as_ref()
        .and_then(Decimal::to_f64)
        .unwrap_or(lhs * rhs)
}

impl<const USAGE: isize, const COST: isize> Mul<f64> for Quantity<USAGE, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const USAGE: isize, const COST: isize> Div<f64> for Quantity<USAGE, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const USAGE: isize, const COST: isize> Div<Self> for Quantity<USAGE, COST> {
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1.0).min(Bare::from(2.0)), Bare::from(1.0));
        assert_eq!(Bare::from(2.0).min(Bare::from(1.0)), Bare::from(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1.0).max(Bare::from(2.0)), Bare::from(2.0));
        assert_eq!(Bare::from(2.0).max(Bare::from(1.0)), Bare::from(2.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(Bare::from(1.234).round_to(2), Bare::from(1.23));
        assert_eq!(Bare::from(1.235_000_1).round_to(2), Bare::from(1.24));
        assert_eq!(Bare::from(120.000_000_000_000_01).round_to(2), Bare::from(120.0));
        assert_eq!(Bare::from(-1.235).round_to(2), Bare::from(-1.24));
    }

    #[test]
    fn test_round_to_decimal_midpoint() {
        // Stored slightly below the midpoint.
        assert_eq!(Bare::from(1.005).round_to(2), Bare::from(1.01));
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(Bare::from(f64::NAN).round_to(2).0.is_nan());
        assert_eq!(Bare::from(f64::INFINITY).round_to(2), Bare::from(f64::INFINITY));
    }

    #[test]
    fn test_decimal_mul() {
        assert_eq!(decimal_mul(4.625, 0.12), 0.555);
        assert_eq!(decimal_mul(1.25, 0.12), 0.15);
        assert!(decimal_mul(1e300, 1e10).is_infinite());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Bare::from(1000.0) / Bare::from(400.0), OrderedFloat(2.5));
    }
}
