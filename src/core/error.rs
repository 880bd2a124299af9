use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::core::tariff::EnergyPeriod;

/// Input being checked against the tariff schedule.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Consumption,
    MonthlyConsumption,
    ContractedPower,
    BilledPower,
    CurrentEnergyPrice,
    CurrentPowerPrice,
    ProposedEnergyPrice,
    ProposedPowerPrice,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consumption => write!(f, "energy_kwh"),
            Self::MonthlyConsumption => write!(f, "monthly_energy_kwh"),
            Self::ContractedPower => write!(f, "contracted_power_kw"),
            Self::BilledPower => write!(f, "billed_power_kw"),
            Self::CurrentEnergyPrice => write!(f, "current.energy_price"),
            Self::CurrentPowerPrice => write!(f, "current.power_price"),
            Self::ProposedEnergyPrice => write!(f, "proposed.energy_price"),
            Self::ProposedPowerPrice => write!(f, "proposed.power_price"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown tariff `{0}`, expected one of: 2.0TD, 3.0TD, 6.1TD")]
    UnknownTariff(String),

    #[error("{field}: invalid periods [{}], expected [{}]", .keys.iter().join(", "), .expected.iter().join(", "))]
    UnknownPeriod { field: Field, keys: Vec<String>, expected: Vec<String> },

    #[error("{field}: missing periods [{}], expected [{}]", .keys.iter().join(", "), .expected.iter().join(", "))]
    MissingPeriod { field: Field, keys: Vec<String>, expected: Vec<String> },

    #[error("{field}: period {period} has {len} monthly values, expected 12")]
    InvalidMonthlySeries { field: Field, period: EnergyPeriod, len: usize },
}

impl Error {
    /// Field the error is about, if any.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::UnknownTariff(_) => None,
            Self::UnknownPeriod { field, .. }
            | Self::MissingPeriod { field, .. }
            | Self::InvalidMonthlySeries { field, .. } => Some(*field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_period_message() {
        let error = Error::UnknownPeriod {
            field: Field::CurrentEnergyPrice,
            keys: vec!["E4".to_owned()],
            expected: vec!["E1".to_owned(), "E2".to_owned(), "E3".to_owned()],
        };
        assert_eq!(
            error.to_string(),
            "current.energy_price: invalid periods [E4], expected [E1, E2, E3]"
        );
        assert_eq!(error.field(), Some(Field::CurrentEnergyPrice));
    }

    #[test]
    fn test_invalid_monthly_series_message() {
        let error = Error::InvalidMonthlySeries {
            field: Field::MonthlyConsumption,
            period: EnergyPeriod::E2,
            len: 11,
        };
        assert_eq!(
            error.to_string(),
            "monthly_energy_kwh: period E2 has 11 monthly values, expected 12"
        );
    }
}
