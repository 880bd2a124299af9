use serde::{Deserialize, Serialize};

use crate::{
    core::{
        bill::{BillBreakdown, compute_bill},
        consumption::Consumption,
        error::Error,
        plan::PricePlan,
        policy::TaxPolicy,
        tariff::TariffCode,
        validator::validate,
    },
    prelude::*,
    quantity::{cost::Cost, round_to_hundredths},
};

/// Current and proposed bills side by side.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub tariff: TariffCode,
    pub current: BillBreakdown,
    pub proposed: BillBreakdown,

    /// Negative when the proposal is more expensive.
    pub saving_annual: Cost,

    pub saving_monthly: Cost,

    /// Saving relative to the current total, in percent.
    pub saving_percent: f64,
}

impl ComparisonResult {
    pub fn new(tariff: TariffCode, current: BillBreakdown, proposed: BillBreakdown) -> Self {
        let saving_annual = (current.total_annual - proposed.total_annual).round_to_cents();
        let saving_percent = if current.total_annual > Cost::ZERO {
            round_to_hundredths(saving_annual / current.total_annual * 100.0)
        } else {
            0.0
        };
        Self {
            tariff,
            current,
            proposed,
            saving_annual,
            saving_monthly: (saving_annual / 12.0).round_to_cents(),
            saving_percent,
        }
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving_annual > Cost::ZERO
    }
}

/// Validate the request and bill both plans on the same consumption.
#[instrument(skip_all, fields(tariff = %tariff))]
pub fn compare(
    tariff: TariffCode,
    consumption: &Consumption,
    policy: TaxPolicy,
    current: &PricePlan,
    proposed: &PricePlan,
) -> Result<ComparisonResult, Error> {
    validate(tariff, consumption, current, proposed)?;

    let bill = |plan: &PricePlan| {
        compute_bill(
            tariff,
            &consumption.energy,
            &consumption.contracted_power,
            consumption.billed_power.as_ref(),
            plan,
            policy,
        )
    };
    let result = ComparisonResult::new(tariff, bill(current), bill(proposed));
    info!(
        current = %result.current.total_annual,
        proposed = %result.proposed.total_annual,
        saving = %result.saving_annual,
        "compared",
    );
    Ok(result)
}
