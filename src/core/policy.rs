use serde::{Deserialize, Serialize};

/// Unit in which power prices are quoted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPriceUnit {
    /// Euro per kilowatt per year.
    #[default]
    PerYear,

    /// Euro per kilowatt per day, billed for 365 days.
    PerDay,
}

impl PowerPriceUnit {
    /// Multiplier that turns the quoted price into a yearly price.
    #[must_use]
    pub const fn yearly_factor(self) -> f64 {
        match self {
            Self::PerYear => 1.0,
            Self::PerDay => 365.0,
        }
    }
}

/// Tax rates and rounding rules applied to a bill.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// Electricity tax rate as a fraction.
    pub electricity_tax_rate: f64,

    /// VAT rate as a fraction.
    pub vat_rate: f64,

    pub power_price_unit: PowerPriceUnit,

    /// Apply the electricity tax to the power and energy only, leaving the fixed surcharge out.
    pub electricity_tax_excludes_surcharge: bool,

    /// Round every power and energy line to cents before summing.
    pub round_per_line: bool,

    /// Round the electricity tax and VAT to cents before adding them to the total.
    pub round_taxes: bool,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            electricity_tax_rate: 0.051_12,
            vat_rate: 0.21,
            power_price_unit: PowerPriceUnit::PerYear,
            electricity_tax_excludes_surcharge: true,
            round_per_line: true,
            round_taxes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_policy_takes_defaults() -> Result<(), toml::de::Error> {
        let policy: TaxPolicy = toml::from_str(
            r#"
                vat_rate = 0.10
                power_price_unit = "per-day"
            "#,
        )?;
        assert_eq!(
            policy,
            TaxPolicy {
                vat_rate: 0.10,
                power_price_unit: PowerPriceUnit::PerDay,
                ..TaxPolicy::default()
            }
        );
        Ok(())
    }

    #[test]
    #[expect(clippy::float_cmp)]
    fn test_yearly_factor() {
        assert_eq!(PowerPriceUnit::PerYear.yearly_factor(), 1.0);
        assert_eq!(PowerPriceUnit::PerDay.yearly_factor(), 365.0);
    }
}
