use serde::Serialize;
use tariff_advisor::{
    catalog::Catalog,
    core::{Allocation, allocate_monthly},
    prelude::*,
    request::{self, MonthlyRequest, SupplyInfo},
    tables::{
        build_comparison_table,
        build_drift_table,
        build_monthly_table,
        build_supply_table,
    },
};

use crate::cli::CompareArgs;

#[derive(Serialize)]
struct Report<'a> {
    supply: Option<&'a SupplyInfo>,
    current_plan: &'a str,
    proposed_plan: &'a str,
    allocation: &'a Allocation,
}

#[instrument(skip_all, fields(request = %args.request.display()))]
pub fn monthly(catalog: &Catalog, args: &CompareArgs) -> Result {
    let request: MonthlyRequest = request::load(&args.request)?;
    let current = request
        .current
        .resolve(catalog, request.tariff)
        .context("failed to resolve the current plan")?;
    let proposed = request
        .proposed
        .resolve(catalog, request.tariff)
        .context("failed to resolve the proposed plan")?;
    let policy = args.taxes.apply(request.taxes);

    let allocation =
        allocate_monthly(request.tariff, &request.consumption, &current, &proposed, policy)
            .inspect_err(|error| warn!(field = ?error.field(), "{error}"))
            .context("the request does not match the tariff")?;

    let (current_drift, proposed_drift) = allocation.drift();
    info!(%current_drift, %proposed_drift, "monthly series drift from the yearly bills");

    if args.output.json {
        let report = Report {
            supply: request.supply.as_ref(),
            current_plan: &current.name,
            proposed_plan: &proposed.name,
            allocation: &allocation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(supply) = &request.supply {
            println!("{}", build_supply_table(supply));
        }
        println!("{}", build_comparison_table(&allocation.annual, &current.name, &proposed.name));
        println!("{}", build_monthly_table(&allocation.monthly, &current.name, &proposed.name));
        println!("{}", build_drift_table(&allocation, &current.name, &proposed.name));
    }
    Ok(())
}
