use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, round_to_hundredths};

/// Euros.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    pub const ONE_CENT: Self = Self(0.01);

    /// Round the cost to cents, half-cent ties to even.
    pub fn round_to_cents(self) -> Self {
        Self(round_to_hundredths(self.0))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}€", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_abs_diff_eq!(Cost::from(9.8155).round_to_cents().0, 9.82);
        assert_abs_diff_eq!(Cost::from(16.744_356).round_to_cents().0, 16.74);
    }

    #[test]
    fn test_round_to_cents_is_symmetric() {
        assert_eq!(Cost::from(-0.125).round_to_cents(), -Cost::from(0.125).round_to_cents());
        assert_eq!(Cost::from(-0.375).round_to_cents(), -Cost::from(0.375).round_to_cents());
    }

    #[test]
    fn test_half_cent_ties_to_even() {
        assert_abs_diff_eq!(Cost::from(0.125).round_to_cents().0, 0.12);
        assert_abs_diff_eq!(Cost::from(0.375).round_to_cents().0, 0.38);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(416.6).to_string(), "416.60 €");
    }
}
