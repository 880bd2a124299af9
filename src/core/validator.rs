//! Period validation: every input must use exactly the periods of its tariff.

use std::collections::BTreeMap;

use enumset::EnumSet;
use itertools::Itertools;

use crate::core::{
    consumption::{Consumption, MonthlyConsumption},
    error::{Error, Field},
    monthly::MONTHS_PER_YEAR,
    plan::PricePlan,
    tariff::{EnergyPeriod, Period, PowerPeriod, Schedule, TariffCode},
};

/// Collects every period mismatch of a request instead of stopping at the first one.
#[must_use]
pub struct Validator {
    schedule: Schedule,
    errors: Vec<Error>,
}

impl Validator {
    pub const fn new(tariff: TariffCode) -> Self {
        Self { schedule: tariff.schedule(), errors: Vec::new() }
    }

    pub fn check_power<V>(self, field: Field, map: &BTreeMap<PowerPeriod, V>) -> Self {
        let required = self.schedule.power;
        self.check(field, map.keys().copied(), required)
    }

    pub fn check_energy<V>(self, field: Field, map: &BTreeMap<EnergyPeriod, V>) -> Self {
        let required = self.schedule.energy;
        self.check(field, map.keys().copied(), required)
    }

    /// Check the plan prices against both period sets.
    pub fn check_plan(self, plan: &PricePlan, energy_field: Field, power_field: Field) -> Self {
        self.check_energy(energy_field, &plan.energy_price)
            .check_power(power_field, &plan.power_price)
    }

    /// Check the period set and the number of monthly readings in every period.
    pub fn check_monthly<V>(
        mut self,
        field: Field,
        series: &BTreeMap<EnergyPeriod, Vec<V>>,
    ) -> Self {
        self = self.check_energy(field, series);
        for (period, readings) in series {
            if self.schedule.energy.contains(*period) && readings.len() != MONTHS_PER_YEAR {
                self.errors.push(Error::InvalidMonthlySeries {
                    field,
                    period: *period,
                    len: readings.len(),
                });
            }
        }
        self
    }

    fn check<P: Period>(
        mut self,
        field: Field,
        keys: impl IntoIterator<Item = P>,
        required: EnumSet<P>,
    ) -> Self {
        let present: EnumSet<P> = keys.into_iter().collect();
        let unknown = present - required;
        let missing = required - present;
        if !unknown.is_empty() {
            self.errors.push(Error::UnknownPeriod {
                field,
                keys: Self::names(unknown),
                expected: Self::names(required),
            });
        }
        if !missing.is_empty() {
            self.errors.push(Error::MissingPeriod {
                field,
                keys: Self::names(missing),
                expected: Self::names(required),
            });
        }
        self
    }

    fn names<P: Period>(periods: EnumSet<P>) -> Vec<String> {
        periods.iter().map(|period| period.to_string()).collect_vec()
    }

    /// All mismatches found so far, in the order of the checks.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Fail with the first mismatch, if any.
    pub fn finish(self) -> Result<(), Error> {
        self.errors.into_iter().next().map_or(Ok(()), Err)
    }
}

fn validator_for(
    tariff: TariffCode,
    consumption: &Consumption,
    current: &PricePlan,
    proposed: &PricePlan,
) -> Validator {
    let mut validator = Validator::new(tariff)
        .check_energy(Field::Consumption, &consumption.energy)
        .check_power(Field::ContractedPower, &consumption.contracted_power);
    if let Some(billed_power) = &consumption.billed_power {
        validator = validator.check_power(Field::BilledPower, billed_power);
    }
    validator
        .check_energy(Field::CurrentEnergyPrice, &current.energy_price)
        .check_energy(Field::ProposedEnergyPrice, &proposed.energy_price)
        .check_power(Field::CurrentPowerPrice, &current.power_price)
        .check_power(Field::ProposedPowerPrice, &proposed.power_price)
}

/// Check a yearly comparison request and fail with the first mismatch.
pub fn validate(
    tariff: TariffCode,
    consumption: &Consumption,
    current: &PricePlan,
    proposed: &PricePlan,
) -> Result<(), Error> {
    validator_for(tariff, consumption, current, proposed).finish()
}

/// Check a yearly comparison request and report every mismatch.
#[must_use]
pub fn audit(
    tariff: TariffCode,
    consumption: &Consumption,
    current: &PricePlan,
    proposed: &PricePlan,
) -> Vec<Error> {
    validator_for(tariff, consumption, current, proposed).into_errors()
}

impl MonthlyConsumption {
    pub(crate) fn validate(
        &self,
        tariff: TariffCode,
        current: &PricePlan,
        proposed: &PricePlan,
    ) -> Result<(), Error> {
        Validator::new(tariff)
            .check_monthly(Field::MonthlyConsumption, &self.energy)
            .check_power(Field::ContractedPower, &self.contracted_power)
            .check_plan(current, Field::CurrentEnergyPrice, Field::CurrentPowerPrice)
            .check_plan(proposed, Field::ProposedEnergyPrice, Field::ProposedPowerPrice)
            .finish()
    }
}
