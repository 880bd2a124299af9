use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, price::KilowattPrice};

pub type Kilowatts = Quantity<1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)?;
        write!(f, " kW")
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}kW", self.0)
    }
}

impl Mul<KilowattPrice> for Kilowatts {
    type Output = Cost;

    fn mul(self, rhs: KilowattPrice) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
