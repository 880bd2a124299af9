mod cli;

use clap::{Parser, crate_version};
use tariff_advisor::{catalog::Catalog, prelude::*};

use crate::cli::{Args, Command, compare, monthly, offers};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let catalog = Catalog::load(args.catalog.as_deref())?;

    match args.command {
        Command::Compare(args) => compare(&catalog, &args)?,
        Command::Monthly(args) => monthly(&catalog, &args)?,
        Command::Offers(args) => offers(&catalog, args)?,
    }

    info!("done!");
    Ok(())
}
