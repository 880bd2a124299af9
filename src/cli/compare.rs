use serde::Serialize;
use tariff_advisor::{
    catalog::Catalog,
    core::{self, ComparisonResult, audit},
    prelude::*,
    request::{self, CompareRequest, SupplyInfo},
    tables::{build_comparison_table, build_supply_table},
};

use crate::cli::CompareArgs;

#[derive(Serialize)]
struct Report<'a> {
    supply: Option<&'a SupplyInfo>,
    current_plan: &'a str,
    proposed_plan: &'a str,
    result: &'a ComparisonResult,
}

#[instrument(skip_all, fields(request = %args.request.display()))]
pub fn compare(catalog: &Catalog, args: &CompareArgs) -> Result {
    let request: CompareRequest = request::load(&args.request)?;
    let current = request
        .current
        .resolve(catalog, request.tariff)
        .context("failed to resolve the current plan")?;
    let proposed = request
        .proposed
        .resolve(catalog, request.tariff)
        .context("failed to resolve the proposed plan")?;
    let policy = args.taxes.apply(request.taxes);

    let errors = audit(request.tariff, &request.consumption, &current, &proposed);
    for error in &errors {
        warn!(field = ?error.field(), "{error}");
    }
    if let Some(error) = errors.into_iter().next() {
        return Err(error).context("the request does not match the tariff");
    }

    let result = core::compare(request.tariff, &request.consumption, policy, &current, &proposed)?;

    if args.output.json {
        let report = Report {
            supply: request.supply.as_ref(),
            current_plan: &current.name,
            proposed_plan: &proposed.name,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(supply) = &request.supply {
            println!("{}", build_supply_table(supply));
        }
        println!("{}", build_comparison_table(&result, &current.name, &proposed.name));
    }
    Ok(())
}
