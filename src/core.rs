//! Billing computation engine.
//!
//! Everything in here is pure: the functions take their inputs by reference, never touch
//! the file system or the environment, and may be called concurrently.

mod bill;
mod comparator;
mod consumption;
mod error;
mod monthly;
mod plan;
mod policy;
mod tariff;
mod validator;

pub use self::{
    bill::{BillBreakdown, BillCalculator, compute_bill},
    comparator::{ComparisonResult, compare},
    consumption::{Consumption, MonthlyConsumption},
    error::{Error, Field},
    monthly::{Allocation, MONTHS_PER_YEAR, Month, MonthlyLines, MonthlySeries, allocate_monthly},
    plan::PricePlan,
    policy::{PowerPriceUnit, TaxPolicy},
    tariff::{EnergyPeriod, Period, PowerPeriod, Schedule, TariffCode, periods_for},
    validator::{Validator, audit, validate},
};
