use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Currency per metered unit.
pub type Rate = Quantity<-1, 1>;

impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.3}/unit", self.0)
    }
}

impl Debug for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}$/u", self.0)
    }
}
