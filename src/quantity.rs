pub mod cost;
pub mod energy;
pub mod power;
pub mod price;

use std::{
    cmp::Ordering,
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

/// Physical quantity tagged with the exponents of its dimensions.
///
/// A price per kilowatt-hour is `Quantity<-1, -1, 1>`: multiplying it by kilowatt-hours
/// (`Quantity<1, 1, 0>`) yields plain cost (`Quantity<0, 0, 1>`).
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[must_use]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(pub f64);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    pub const fn abs(mut self) -> Self {
        self.0 = self.0.abs();
        self
    }
}

/// Round to two decimals, ties to even.
///
/// Ties are decided on the exact binary value rather than on the product by 100, which itself
/// is rounded: `1.115` is slightly below the tie and yields `1.11`.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let residue = value.mul_add(100.0, -scaled);
    let lower = scaled.floor();
    let Some(ordering) = (scaled - lower - 0.5 + residue).partial_cmp(&0.0) else {
        return value;
    };
    let rounded = match ordering {
        Ordering::Less => lower,
        Ordering::Greater => lower + 1.0,
        Ordering::Equal => (lower + 0.5).round_ties_even(),
    };
    rounded / 100.0
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Div<Self>
    for Quantity<POWER, TIME, COST>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
