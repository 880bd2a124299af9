use tariff_advisor::{catalog::Catalog, prelude::*, tables::build_offers_table};

use crate::cli::OutputArgs;

#[instrument(skip_all)]
pub fn offers(catalog: &Catalog, args: OutputArgs) -> Result {
    info!(len = catalog.0.len(), "listing the offers");
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        println!("{}", build_offers_table(catalog));
    }
    Ok(())
}
