use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, cost::Cost, decimal_mul, rate::Rate};

/// Metered consumption in the utility's own unit.
pub type Usage = Quantity<1, 0>;

impl Mul<Rate> for Usage {
    type Output = Cost;

    fn mul(self, rhs: Rate) -> Self::Output {
        Quantity::from(decimal_mul(self.0.0, rhs.0.0))
    }
}

impl Display for Usage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} units", self.0)
    }
}

impl Debug for Usage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}u", self.0)
    }
}
