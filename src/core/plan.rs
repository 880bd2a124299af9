use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    core::tariff::{EnergyPeriod, PowerPeriod},
    quantity::{
        cost::Cost,
        price::{KilowattHourPrice, KilowattPrice},
    },
};

/// Named set of unit prices offered by a retailer.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePlan {
    #[serde(default = "PricePlan::default_name")]
    pub name: String,

    /// Price per contracted kilowatt, per period.
    pub power_price: BTreeMap<PowerPeriod, KilowattPrice>,

    /// Price per consumed kilowatt-hour, per period.
    pub energy_price: BTreeMap<EnergyPeriod, KilowattHourPrice>,

    /// Fixed yearly charges such as the meter rental.
    #[serde(default)]
    pub fixed_surcharge: Cost,
}

impl PricePlan {
    fn default_name() -> String {
        "Plan".to_owned()
    }
}
