use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Euro per kilowatt-hour.
pub type KilowattHourPrice = Quantity<-1, -1, 1>;

impl Display for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)?;
        write!(f, " €/kWh")
    }
}

impl Debug for KilowattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}€/kWh", self.0)
    }
}

/// Euro per contracted kilowatt over the price period (a year or a day, see
/// [`crate::core::PowerPriceUnit`]).
pub type KilowattPrice = Quantity<-1, 0, 1>;

impl Display for KilowattPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)?;
        write!(f, " €/kW")
    }
}

impl Debug for KilowattPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}€/kW", self.0)
    }
}
