//! Tariff schedule registry.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use enumset::{EnumSet, EnumSetType, enum_set};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::core::error::Error;

/// Time-of-use bracket of a tariff.
pub trait Period: EnumSetType + Ord + Debug + Display {}

/// Contracted power period.
#[derive(Debug, Hash, Ord, PartialOrd, EnumSetType, Serialize, Deserialize)]
pub enum PowerPeriod {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

impl Period for PowerPeriod {}

impl Display for PowerPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Energy consumption period.
#[derive(Debug, Hash, Ord, PartialOrd, EnumSetType, Serialize, Deserialize)]
pub enum EnergyPeriod {
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
}

impl Period for EnergyPeriod {}

impl Display for EnergyPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Access tariff code.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, SerializeDisplay, DeserializeFromStr,
)]
pub enum TariffCode {
    /// Low voltage, up to 15 kW.
    Td20,

    /// Low voltage, above 15 kW.
    Td30,

    /// High voltage, 1 to 30 kV.
    Td61,
}

impl TariffCode {
    pub const ALL: [Self; 3] = [Self::Td20, Self::Td30, Self::Td61];

    /// Valid power and energy periods for the tariff.
    #[must_use]
    pub const fn schedule(self) -> Schedule {
        match self {
            Self::Td20 => Schedule::TWO_POWER_THREE_ENERGY,
            Self::Td30 | Self::Td61 => Schedule::SIX_POWER_SIX_ENERGY,
        }
    }
}

impl Display for TariffCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Td20 => write!(f, "2.0TD"),
            Self::Td30 => write!(f, "3.0TD"),
            Self::Td61 => write!(f, "6.1TD"),
        }
    }
}

impl FromStr for TariffCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tariff| tariff.to_string() == code.trim())
            .ok_or_else(|| Error::UnknownTariff(code.to_owned()))
    }
}

/// Ordered period sets of a tariff.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub power: EnumSet<PowerPeriod>,
    pub energy: EnumSet<EnergyPeriod>,
}

impl Schedule {
    const TWO_POWER_THREE_ENERGY: Self = Self {
        power: enum_set!(PowerPeriod::P1 | PowerPeriod::P2),
        energy: enum_set!(EnergyPeriod::E1 | EnergyPeriod::E2 | EnergyPeriod::E3),
    };

    const SIX_POWER_SIX_ENERGY: Self = Self {
        power: enum_set!(
            PowerPeriod::P1
                | PowerPeriod::P2
                | PowerPeriod::P3
                | PowerPeriod::P4
                | PowerPeriod::P5
                | PowerPeriod::P6
        ),
        energy: enum_set!(
            EnergyPeriod::E1
                | EnergyPeriod::E2
                | EnergyPeriod::E3
                | EnergyPeriod::E4
                | EnergyPeriod::E5
                | EnergyPeriod::E6
        ),
    };
}

/// Look up the schedule by the tariff code as it comes from the outside world.
pub fn periods_for(code: &str) -> Result<Schedule, Error> {
    code.parse::<TariffCode>().map(TariffCode::schedule)
}
