mod compare;
mod monthly;
mod offers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tariff_advisor::core::TaxPolicy;

pub use self::{compare::compare, monthly::monthly, offers::offers};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML offer catalog to use instead of the built-in one.
    #[clap(long = "catalog", env = "OFFER_CATALOG_PATH", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the yearly bills of the current plan and a proposal.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Same as `compare`, but also split the bills per month.
    #[clap(name = "monthly")]
    Monthly(Box<CompareArgs>),

    /// List the offer catalog.
    #[clap(name = "offers")]
    Offers(OutputArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Request document, TOML or JSON.
    pub request: PathBuf,

    #[clap(flatten)]
    pub taxes: TaxArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Overrides for the tax rates of the request document.
#[derive(Parser)]
pub struct TaxArgs {
    /// Electricity tax rate as a fraction, for example `0.05112`.
    #[clap(long, env = "ELECTRICITY_TAX_RATE")]
    pub electricity_tax_rate: Option<f64>,

    /// VAT rate as a fraction, for example `0.21`.
    #[clap(long, env = "VAT_RATE")]
    pub vat_rate: Option<f64>,
}

impl TaxArgs {
    pub fn apply(&self, mut policy: TaxPolicy) -> TaxPolicy {
        if let Some(electricity_tax_rate) = self.electricity_tax_rate {
            policy.electricity_tax_rate = electricity_tax_rate;
        }
        if let Some(vat_rate) = self.vat_rate {
            policy.vat_rate = vat_rate;
        }
        policy
    }
}

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print JSON instead of the tables.
    #[clap(long)]
    pub json: bool,
}
