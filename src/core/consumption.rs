use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    core::tariff::{EnergyPeriod, PowerPeriod},
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Yearly consumption profile of a supply point.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    /// Consumed energy per period.
    pub energy: BTreeMap<EnergyPeriod, KilowattHours>,

    pub contracted_power: BTreeMap<PowerPeriod, Kilowatts>,

    /// Power actually billed, when it differs from the contracted power.
    #[serde(default)]
    pub billed_power: Option<BTreeMap<PowerPeriod, Kilowatts>>,
}

/// Month-by-month consumption profile of a supply point.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyConsumption {
    /// Twelve monthly readings per energy period, starting with January.
    pub energy: BTreeMap<EnergyPeriod, Vec<KilowattHours>>,

    pub contracted_power: BTreeMap<PowerPeriod, Kilowatts>,
}

impl MonthlyConsumption {
    /// Fold the monthly readings into a yearly profile.
    pub fn to_annual(&self) -> Consumption {
        Consumption {
            energy: self
                .energy
                .iter()
                .map(|(period, readings)| (*period, readings.iter().copied().sum()))
                .collect(),
            contracted_power: self.contracted_power.clone(),
            billed_power: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_annual() {
        let monthly = MonthlyConsumption {
            energy: BTreeMap::from([
                (EnergyPeriod::E1, vec![KilowattHours::from(10.0); 12]),
                (EnergyPeriod::E2, (1..=12).map(|month| KilowattHours::from(f64::from(month))).collect()),
            ]),
            contracted_power: BTreeMap::from([(PowerPeriod::P1, Kilowatts::from(4.6))]),
        };
        let annual = monthly.to_annual();
        assert_abs_diff_eq!(annual.energy[&EnergyPeriod::E1].0, 120.0);
        assert_abs_diff_eq!(annual.energy[&EnergyPeriod::E2].0, 78.0);
        assert_eq!(annual.contracted_power, monthly.contracted_power);
        assert!(annual.billed_power.is_none());
    }

    #[test]
    fn test_deserialize() -> Result<(), toml::de::Error> {
        let consumption: Consumption = toml::from_str(
            r"
                energy = { E1 = 100, E2 = 100.5, E3 = 0 }
                contracted_power = { P1 = 5, P2 = 5 }
            ",
        )?;
        assert_eq!(consumption.energy.len(), 3);
        assert_abs_diff_eq!(consumption.energy[&EnergyPeriod::E2].0, 100.5);
        assert!(consumption.billed_power.is_none());
        Ok(())
    }
}
