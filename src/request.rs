//! Comparison request documents.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    catalog::Catalog,
    core::{Consumption, MonthlyConsumption, PricePlan, TariffCode, TaxPolicy},
    prelude::*,
    quantity::cost::Cost,
};

/// Supply point details shown in the report header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyInfo {
    #[serde(default)]
    pub customer_name: Option<String>,

    pub address: String,
    pub town: String,
    pub tax_id: String,

    /// Universal supply point code.
    pub cups: String,

    pub study_date: NaiveDate,
}

/// Reference to a catalog offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferRef {
    pub offer: String,

    /// Overrides the fixed yearly charges, which the catalog does not know about.
    #[serde(default)]
    pub fixed_surcharge: Option<Cost>,
}

/// Either a catalog offer or a plan spelled out in the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanSource {
    Offer(OfferRef),
    Inline(PricePlan),
}

impl PlanSource {
    pub fn resolve(&self, catalog: &Catalog, tariff: TariffCode) -> Result<PricePlan> {
        match self {
            Self::Inline(plan) => Ok(plan.clone()),
            Self::Offer(reference) => {
                let mut plan = catalog.plan(&reference.offer, tariff)?;
                if let Some(fixed_surcharge) = reference.fixed_surcharge {
                    plan.fixed_surcharge = fixed_surcharge;
                }
                Ok(plan)
            }
        }
    }
}

/// Yearly comparison of the current plan against a proposal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub tariff: TariffCode,

    #[serde(default)]
    pub supply: Option<SupplyInfo>,

    #[serde(default)]
    pub taxes: TaxPolicy,

    pub consumption: Consumption,
    pub current: PlanSource,
    pub proposed: PlanSource,
}

/// Same as [`CompareRequest`], with twelve readings per energy period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRequest {
    pub tariff: TariffCode,

    #[serde(default)]
    pub supply: Option<SupplyInfo>,

    #[serde(default)]
    pub taxes: TaxPolicy,

    pub consumption: MonthlyConsumption,
    pub current: PlanSource,
    pub proposed: PlanSource,
}

/// Read a request document: JSON if the extension says so, TOML otherwise.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let is_json = path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    debug!(is_json, len = text.len(), "parsing the request…");
    if is_json {
        serde_json::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    } else {
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{EnergyPeriod, PowerPeriod, PowerPriceUnit};

    const REQUEST: &str = r#"
        tariff = "2.0TD"

        [supply]
        address = "Calle Mayor 1"
        town = "Sevilla"
        tax_id = "B12345678"
        cups = "ES0031000000000000AA"
        study_date = "2025-03-14"

        [taxes]
        vat_rate = 0.10

        [consumption.energy]
        E1 = 100
        E2 = 100
        E3 = 100

        [consumption.contracted_power]
        P1 = 5
        P2 = 5

        [current]
        name = "Distribuidora"
        fixed_surcharge = 9.6
        power_price = { P1 = 30.0, P2 = 3.0 }
        energy_price = { E1 = 0.2, E2 = 0.15, E3 = 0.1 }

        [proposed]
        offer = "PELITO_ECO"
        fixed_surcharge = 9.6
    "#;

    #[test]
    fn test_parse_request() -> Result {
        let request: CompareRequest = toml::from_str(REQUEST)?;
        assert_eq!(request.tariff, TariffCode::Td20);

        let supply = request.supply.context("no supply")?;
        assert_eq!(supply.customer_name, None);
        assert_eq!(supply.study_date, NaiveDate::from_ymd_opt(2025, 3, 14).context("date")?);

        assert_abs_diff_eq!(request.taxes.vat_rate, 0.10);
        assert_abs_diff_eq!(request.taxes.electricity_tax_rate, 0.051_12);
        assert_eq!(request.taxes.power_price_unit, PowerPriceUnit::PerYear);

        assert_abs_diff_eq!(request.consumption.energy[&EnergyPeriod::E2].0, 100.0);
        assert_eq!(request.consumption.billed_power, None);
        assert!(matches!(request.current, PlanSource::Inline(_)));
        assert!(matches!(request.proposed, PlanSource::Offer(_)));
        Ok(())
    }

    #[test]
    fn test_resolve_plans() -> Result {
        let request: CompareRequest = toml::from_str(REQUEST)?;
        let catalog = Catalog::default();

        let current = request.current.resolve(&catalog, request.tariff)?;
        assert_eq!(current.name, "Distribuidora");
        assert_abs_diff_eq!(current.power_price[&PowerPeriod::P2].0, 3.0);

        let proposed = request.proposed.resolve(&catalog, request.tariff)?;
        assert_eq!(proposed.name, "Tarifa Pelito Eco");
        assert_abs_diff_eq!(proposed.fixed_surcharge.0, 9.6);
        Ok(())
    }

    #[test]
    fn test_inline_plan_defaults() -> Result {
        let source: PlanSource =
            toml::from_str("power_price = { P1 = 1.0 }\nenergy_price = { E1 = 0.1 }")?;
        let PlanSource::Inline(plan) = source else {
            bail!("expected an inline plan");
        };
        assert_eq!(plan.name, "Plan");
        assert_abs_diff_eq!(plan.fixed_surcharge.0, 0.0);
        Ok(())
    }

    #[test]
    fn test_unknown_period_key_is_rejected() {
        let text = REQUEST.replace("E3 = 100", "E7 = 100");
        assert!(toml::from_str::<CompareRequest>(&text).is_err());
    }

    #[test]
    fn test_parse_monthly_request() -> Result {
        let request: MonthlyRequest = serde_json::from_str(
            r#"{
                "tariff": "2.0TD",
                "consumption": {
                    "energy": {
                        "E1": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
                        "E2": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                        "E3": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
                    },
                    "contracted_power": { "P1": 4.6, "P2": 4.6 }
                },
                "current": { "offer": "VERSATIL" },
                "proposed": { "offer": "PELITO_ECO" }
            }"#,
        )?;
        assert_eq!(request.supply, None);
        assert_eq!(request.taxes, TaxPolicy::default());
        assert_abs_diff_eq!(request.consumption.to_annual().energy[&EnergyPeriod::E1].0, 78.0);
        Ok(())
    }
}
