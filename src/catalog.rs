//! Catalog of commercial offers that requests may refer to by key.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{EnergyPeriod, PowerPeriod, PricePlan, TariffCode},
    prelude::*,
    quantity::{
        cost::Cost,
        price::{KilowattHourPrice, KilowattPrice},
    },
};

/// Offers by their key, for example `PELITO_ECO`.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub BTreeMap<String, Offer>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Commercial name.
    pub label: String,

    /// Prices per access tariff. An offer need not be available for every tariff.
    pub tariffs: BTreeMap<TariffCode, OfferPrices>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OfferPrices {
    pub power_price: BTreeMap<PowerPeriod, KilowattPrice>,
    pub energy_price: BTreeMap<EnergyPeriod, KilowattHourPrice>,
}

impl OfferPrices {
    fn two_periods(power: [f64; 2], energy: [f64; 3]) -> Self {
        Self {
            power_price: [PowerPeriod::P1, PowerPeriod::P2]
                .into_iter()
                .zip(power.map(KilowattPrice::from))
                .collect(),
            energy_price: [EnergyPeriod::E1, EnergyPeriod::E2, EnergyPeriod::E3]
                .into_iter()
                .zip(energy.map(KilowattHourPrice::from))
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let offer = |label: &str, prices: OfferPrices| Offer {
            label: label.to_owned(),
            tariffs: BTreeMap::from([(TariffCode::Td20, prices)]),
        };
        Self(BTreeMap::from([
            (
                "PELITO_ECO".to_owned(),
                offer(
                    "Tarifa Pelito Eco",
                    OfferPrices::two_periods([38.93, 20.69], [0.098_155; 3]),
                ),
            ),
            (
                "VERSATIL".to_owned(),
                offer(
                    "Tarifa Versátil",
                    OfferPrices::two_periods([34.172_66, 3.124_359], [0.170, 0.123, 0.123]),
                ),
            ),
            (
                "PERSONALIZADA".to_owned(),
                offer(
                    "Tarifa Personalizada",
                    OfferPrices::two_periods([34.672_66, 4.424_359], [0.158_91; 3]),
                ),
            ),
        ]))
    }
}

impl Catalog {
    /// Load the catalog from a TOML file, or fall back to the built-in offers.
    #[instrument(skip_all)]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("using the built-in catalog");
            return Ok(Self::default());
        };
        let catalog = Self::from_toml(
            &fs::read_to_string(path)
                .with_context(|| format!("failed to read the catalog `{}`", path.display()))?,
        )
        .with_context(|| format!("failed to parse the catalog `{}`", path.display()))?;
        info!(path = %path.display(), len = catalog.0.len(), "loaded the catalog");
        Ok(catalog)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Turn the offer into a price plan for the tariff.
    pub fn plan(&self, key: &str, tariff: TariffCode) -> Result<PricePlan> {
        let offer = self.0.get(key).with_context(|| format!("unknown offer `{key}`"))?;
        let prices = offer
            .tariffs
            .get(&tariff)
            .with_context(|| format!("offer `{key}` is not available for {tariff}"))?;
        Ok(PricePlan {
            name: offer.label.clone(),
            power_price: prices.power_price.clone(),
            energy_price: prices.energy_price.clone(),
            fixed_surcharge: Cost::ZERO,
        })
    }
}
