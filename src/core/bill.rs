//! Annual bill arithmetic.

use std::{collections::BTreeMap, ops::Mul};

use bon::Builder;
use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        plan::PricePlan,
        policy::TaxPolicy,
        tariff::{EnergyPeriod, Period, PowerPeriod, TariffCode},
    },
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts},
};

/// Yearly bill split by concept. Every amount is rounded to cents.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub power: Cost,
    pub energy: Cost,
    pub fixed_surcharge: Cost,
    pub electricity_tax: Cost,
    pub vat: Cost,
    pub total_annual: Cost,
    pub total_monthly: Cost,
}

impl BillBreakdown {
    /// Power and energy, before the surcharge and taxes.
    pub fn subtotal(&self) -> Cost {
        self.power + self.energy
    }

    /// Electricity tax and VAT together.
    pub fn taxes(&self) -> Cost {
        self.electricity_tax + self.vat
    }
}

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct BillCalculator<'a> {
    tariff: TariffCode,
    energy: &'a BTreeMap<EnergyPeriod, KilowattHours>,
    contracted_power: &'a BTreeMap<PowerPeriod, Kilowatts>,

    /// Replaces the contracted power when set.
    billed_power: Option<&'a BTreeMap<PowerPeriod, Kilowatts>>,

    plan: &'a PricePlan,
    policy: TaxPolicy,
}

impl<S: bill_calculator_builder::IsComplete> BillCalculatorBuilder<'_, S> {
    pub fn compute(self) -> BillBreakdown {
        self.build().compute()
    }
}

impl BillCalculator<'_> {
    /// Compute the bill. Periods missing from the consumption or the plan count as zero.
    #[instrument(skip_all, fields(tariff = %self.tariff, plan = %self.plan.name))]
    fn compute(self) -> BillBreakdown {
        let schedule = self.tariff.schedule();
        let power_base = self.billed_power.unwrap_or(self.contracted_power);

        let power = self.sum_lines(
            schedule.power,
            power_base,
            &self.plan.power_price,
            self.policy.power_price_unit.yearly_factor(),
        );
        let energy = self.sum_lines(schedule.energy, self.energy, &self.plan.energy_price, 1.0);
        let base = power + energy + self.plan.fixed_surcharge;

        let electricity_tax_base =
            if self.policy.electricity_tax_excludes_surcharge { power + energy } else { base };
        let electricity_tax =
            self.round_tax(electricity_tax_base * self.policy.electricity_tax_rate);
        let vat = self.round_tax((base + electricity_tax) * self.policy.vat_rate);
        let total = base + electricity_tax + vat;
        debug!(?power, ?energy, ?electricity_tax, ?vat, ?total, "computed");

        BillBreakdown {
            power: power.round_to_cents(),
            energy: energy.round_to_cents(),
            fixed_surcharge: self.plan.fixed_surcharge.round_to_cents(),
            electricity_tax: electricity_tax.round_to_cents(),
            vat: vat.round_to_cents(),
            total_annual: total.round_to_cents(),
            total_monthly: (total / 12.0).round_to_cents(),
        }
    }

    fn sum_lines<P, A, R>(
        &self,
        periods: EnumSet<P>,
        amounts: &BTreeMap<P, A>,
        prices: &BTreeMap<P, R>,
        factor: f64,
    ) -> Cost
    where
        P: Period,
        A: Copy + Default + Mul<R, Output = Cost>,
        R: Copy + Default,
    {
        periods
            .iter()
            .map(|period| {
                let amount = amounts.get(&period).copied().unwrap_or_default();
                let price = prices.get(&period).copied().unwrap_or_default();
                let line = amount * price * factor;
                if self.policy.round_per_line { line.round_to_cents() } else { line }
            })
            .sum()
    }

    fn round_tax(&self, tax: Cost) -> Cost {
        if self.policy.round_taxes { tax.round_to_cents() } else { tax }
    }
}

/// Compute the yearly bill of a single plan. Never fails.
pub fn compute_bill(
    tariff: TariffCode,
    energy: &BTreeMap<EnergyPeriod, KilowattHours>,
    contracted_power: &BTreeMap<PowerPeriod, Kilowatts>,
    billed_power: Option<&BTreeMap<PowerPeriod, Kilowatts>>,
    plan: &PricePlan,
    policy: TaxPolicy,
) -> BillBreakdown {
    BillCalculator::builder()
        .tariff(tariff)
        .energy(energy)
        .contracted_power(contracted_power)
        .maybe_billed_power(billed_power)
        .plan(plan)
        .policy(policy)
        .compute()
}
