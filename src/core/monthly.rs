//! Month-by-month split of the bills for the report chart.
//!
//! The monthly lines are only an illustration: power is spread evenly, the taxes are
//! never rounded per line, and the fixed surcharge is left out. The authoritative figures
//! come from billing the yearly totals once, so the two are not expected to reconcile to
//! the cent.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        bill::compute_bill,
        comparator::ComparisonResult,
        consumption::MonthlyConsumption,
        error::Error,
        plan::PricePlan,
        policy::TaxPolicy,
        tariff::TariffCode,
    },
    prelude::*,
    quantity::cost::Cost,
};

pub const MONTHS_PER_YEAR: usize = 12;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; MONTHS_PER_YEAR] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Short label used on the report chart.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::January => "ENE",
            Self::February => "FEB",
            Self::March => "MAR",
            Self::April => "ABR",
            Self::May => "MAY",
            Self::June => "JUN",
            Self::July => "JUL",
            Self::August => "AGO",
            Self::September => "SEP",
            Self::October => "OCT",
            Self::November => "NOV",
            Self::December => "DIC",
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Monthly cost lines of one plan.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLines {
    pub energy: [Cost; MONTHS_PER_YEAR],

    /// Yearly power cost spread evenly.
    pub power: [Cost; MONTHS_PER_YEAR],

    /// Electricity tax and VAT together.
    pub taxes: [Cost; MONTHS_PER_YEAR],
}

impl MonthlyLines {
    fn allocate(
        tariff: TariffCode,
        consumption: &MonthlyConsumption,
        plan: &PricePlan,
        policy: TaxPolicy,
    ) -> Self {
        let schedule = tariff.schedule();

        let energy: [Cost; MONTHS_PER_YEAR] = std::array::from_fn(|month| {
            schedule
                .energy
                .iter()
                .map(|period| {
                    let reading = consumption
                        .energy
                        .get(&period)
                        .and_then(|readings| readings.get(month))
                        .copied()
                        .unwrap_or_default();
                    reading * plan.energy_price.get(&period).copied().unwrap_or_default()
                })
                .sum()
        });

        let annual_power: Cost = schedule
            .power
            .iter()
            .map(|period| {
                let power = consumption.contracted_power.get(&period).copied().unwrap_or_default();
                power * plan.power_price.get(&period).copied().unwrap_or_default()
            })
            .sum::<Cost>()
            * policy.power_price_unit.yearly_factor();
        let power = annual_power / 12.0;

        let taxes = energy.map(|energy| {
            let base = energy + power;
            let electricity_tax = base * policy.electricity_tax_rate;
            electricity_tax + (base + electricity_tax) * policy.vat_rate
        });

        Self {
            energy: energy.map(Cost::round_to_cents),
            power: [power.round_to_cents(); MONTHS_PER_YEAR],
            taxes: taxes.map(Cost::round_to_cents),
        }
    }

    /// Sum of the monthly energy and power lines.
    pub fn pre_tax_total(&self) -> Cost {
        self.energy.iter().chain(&self.power).copied().sum()
    }

    /// Energy, power and taxes of the month, counting from zero.
    pub fn month_total(&self, month: usize) -> Cost {
        self.energy[month] + self.power[month] + self.taxes[month]
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub current: MonthlyLines,
    pub proposed: MonthlyLines,
}

/// Monthly chart series together with the authoritative yearly comparison.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub monthly: MonthlySeries,
    pub annual: ComparisonResult,
}

impl Allocation {
    /// How far the monthly series of each plan drift from the yearly bill, before taxes.
    ///
    /// Returns `(current, proposed)`, positive when the monthly lines sum up to more.
    pub fn drift(&self) -> (Cost, Cost) {
        (
            self.monthly.current.pre_tax_total() - self.annual.current.subtotal(),
            self.monthly.proposed.pre_tax_total() - self.annual.proposed.subtotal(),
        )
    }
}

/// Split both bills per month and bill the yearly totals.
#[instrument(skip_all, fields(tariff = %tariff))]
pub fn allocate_monthly(
    tariff: TariffCode,
    consumption: &MonthlyConsumption,
    current: &PricePlan,
    proposed: &PricePlan,
    policy: TaxPolicy,
) -> Result<Allocation, Error> {
    consumption.validate(tariff, current, proposed)?;

    let monthly = MonthlySeries {
        current: MonthlyLines::allocate(tariff, consumption, current, policy),
        proposed: MonthlyLines::allocate(tariff, consumption, proposed, policy),
    };

    let annual_consumption = consumption.to_annual();
    let bill = |plan: &PricePlan| {
        compute_bill(
            tariff,
            &annual_consumption.energy,
            &annual_consumption.contracted_power,
            None,
            plan,
            policy,
        )
    };
    let annual = ComparisonResult::new(tariff, bill(current), bill(proposed));
    info!(
        current = %annual.current.total_annual,
        proposed = %annual.proposed.total_annual,
        saving = %annual.saving_annual,
        "allocated",
    );

    Ok(Allocation { monthly, annual })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{EnergyPeriod, Field, PowerPeriod, PowerPriceUnit, comparator::compare},
        quantity::{
            energy::KilowattHours,
            power::Kilowatts,
            price::{KilowattHourPrice, KilowattPrice},
        },
    };

    fn readings(values: [f64; MONTHS_PER_YEAR]) -> Vec<KilowattHours> {
        values.into_iter().map(KilowattHours::from).collect()
    }

    fn consumption() -> MonthlyConsumption {
        MonthlyConsumption {
            energy: BTreeMap::from([
                (
                    EnergyPeriod::E1,
                    readings([
                        100.0, 120.0, 130.0, 110.0, 115.0, 125.0, 135.0, 140.0, 150.0, 160.0,
                        170.0, 180.0,
                    ]),
                ),
                (EnergyPeriod::E2, readings([50.0; MONTHS_PER_YEAR])),
                (EnergyPeriod::E3, readings([25.0; MONTHS_PER_YEAR])),
            ]),
            contracted_power: BTreeMap::from([
                (PowerPeriod::P1, Kilowatts::from(5.0)),
                (PowerPeriod::P2, Kilowatts::from(5.0)),
            ]),
        }
    }

    fn plan(name: &str, power: [f64; 2], energy: f64) -> PricePlan {
        PricePlan {
            name: name.to_owned(),
            power_price: BTreeMap::from([
                (PowerPeriod::P1, KilowattPrice::from(power[0])),
                (PowerPeriod::P2, KilowattPrice::from(power[1])),
            ]),
            energy_price: [EnergyPeriod::E1, EnergyPeriod::E2, EnergyPeriod::E3]
                .into_iter()
                .map(|period| (period, KilowattHourPrice::from(energy)))
                .collect(),
            fixed_surcharge: Cost::from(12.0),
        }
    }

    fn current() -> PricePlan {
        plan("Current", [38.93, 20.69], 0.1)
    }

    fn proposed() -> PricePlan {
        plan("Proposed", [30.0, 10.0], 0.09)
    }

    #[test]
    fn test_first_month() -> Result<(), Error> {
        let allocation = allocate_monthly(
            TariffCode::Td20,
            &consumption(),
            &current(),
            &proposed(),
            TaxPolicy::default(),
        )?;
        let lines = &allocation.monthly.current;
        // 100 × 0.1 + 50 × 0.1 + 25 × 0.1:
        assert_abs_diff_eq!(lines.energy[0].0, 17.50, epsilon = 1e-9);
        // (5 × 38.93 + 5 × 20.69) / 12 = 24.8417:
        assert_abs_diff_eq!(lines.power[0].0, 24.84, epsilon = 1e-9);
        // 42.3417 × 0.05112 + (42.3417 + 2.1645) × 0.21 = 11.5108:
        assert_abs_diff_eq!(lines.taxes[0].0, 11.51, epsilon = 1e-9);
        assert_abs_diff_eq!(lines.month_total(0).0, 53.85, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_power_is_spread_evenly() -> Result<(), Error> {
        let allocation = allocate_monthly(
            TariffCode::Td20,
            &consumption(),
            &current(),
            &proposed(),
            TaxPolicy::default(),
        )?;
        for (lines, annual) in [
            (&allocation.monthly.current, &allocation.annual.current),
            (&allocation.monthly.proposed, &allocation.annual.proposed),
        ] {
            assert!(lines.power.iter().all(|power| *power == lines.power[0]));
            let sum: Cost = lines.power.iter().copied().sum();
            assert_abs_diff_eq!(sum.0, annual.power.0, epsilon = 0.06);
        }
        // (5 × 30 + 5 × 10) / 12 = 16.67:
        assert_abs_diff_eq!(allocation.monthly.proposed.power[11].0, 16.67, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_daily_power_price() -> Result<(), Error> {
        let policy = TaxPolicy { power_price_unit: PowerPriceUnit::PerDay, ..TaxPolicy::default() };
        let current = plan("Current", [0.1, 0.01], 0.1);
        let allocation =
            allocate_monthly(TariffCode::Td20, &consumption(), &current, &proposed(), policy)?;
        let lines = &allocation.monthly.current;
        // (5 × 0.1 + 5 × 0.01) × 365 / 12 = 16.7292:
        assert!(lines.power.iter().all(|power| (power.0 - 16.73).abs() < 1e-9));
        assert_abs_diff_eq!(allocation.annual.current.power.0, 200.75, epsilon = 1e-9);
        // 34.2292 × 0.05112 + (34.2292 + 1.7498) × 0.21 = 9.3054:
        assert_abs_diff_eq!(lines.taxes[0].0, 9.31, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_annual_matches_yearly_comparison() -> Result<(), Error> {
        let monthly = consumption();
        let allocation =
            allocate_monthly(TariffCode::Td20, &monthly, &current(), &proposed(), TaxPolicy::default())?;
        let yearly = compare(
            TariffCode::Td20,
            &monthly.to_annual(),
            TaxPolicy::default(),
            &current(),
            &proposed(),
        )?;
        assert_eq!(allocation.annual, yearly);
        assert_abs_diff_eq!(allocation.annual.current.fixed_surcharge.0, 12.0);
        Ok(())
    }

    #[test]
    fn test_drift_stays_small() -> Result<(), Error> {
        let allocation = allocate_monthly(
            TariffCode::Td20,
            &consumption(),
            &current(),
            &proposed(),
            TaxPolicy::default(),
        )?;
        let (current, proposed) = allocation.drift();
        assert!(current.abs() < Cost::from(0.25), "{current:?}");
        assert!(proposed.abs() < Cost::from(0.25), "{proposed:?}");
        Ok(())
    }

    #[test]
    fn test_eleven_months() {
        let mut consumption = consumption();
        consumption.energy.insert(EnergyPeriod::E3, readings([25.0; MONTHS_PER_YEAR])[..11].to_vec());
        let result = allocate_monthly(
            TariffCode::Td20,
            &consumption,
            &current(),
            &proposed(),
            TaxPolicy::default(),
        );
        assert_eq!(
            result,
            Err(Error::InvalidMonthlySeries {
                field: Field::MonthlyConsumption,
                period: EnergyPeriod::E3,
                len: 11,
            })
        );
    }

    #[test]
    fn test_missing_power_price() {
        let mut proposed = proposed();
        proposed.power_price.remove(&PowerPeriod::P1);
        let result = allocate_monthly(
            TariffCode::Td20,
            &consumption(),
            &current(),
            &proposed,
            TaxPolicy::default(),
        );
        assert!(matches!(
            result,
            Err(Error::MissingPeriod { field: Field::ProposedPowerPrice, .. })
        ));
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(
            Month::ALL.map(Month::label).join(" "),
            "ENE FEB MAR ABR MAY JUN JUL AGO SEP OCT NOV DIC"
        );
    }
}
