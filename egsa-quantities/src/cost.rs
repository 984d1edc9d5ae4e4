use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::Quantity;

pub type Cost = Quantity<0, 1>;

impl Cost {
    pub const ONE_CENT: Self = Self(OrderedFloat(0.01));

    /// Currency precision used for every reported cost.
    pub const DECIMAL_PLACES: u32 = 2;

    pub fn round_to_cents(self) -> Self {
        self.round_to(Self::DECIMAL_PLACES)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(Cost::from(0.125_1).round_to_cents(), Cost::from(0.13));
        assert_eq!(Cost::from(0.004).round_to_cents(), Cost::ZERO);
        assert_eq!(Cost::from(0.555).round_to_cents(), Cost::from(0.56));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(12.5).to_string(), "$12.50");
    }
}
