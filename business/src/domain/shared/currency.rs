use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

/// Display currencies supported by the storefront.
///
/// Prices are stored in the base currency (EUR) and converted at display
/// time with a static rate table. Rates are configuration, not live data;
/// displayed foreign-currency prices drift over time by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Xof,
}

impl Currency {
    /// Exchange rate from the base currency (EUR) to this currency.
    pub fn rate(&self) -> BigDecimal {
        match self {
            Currency::Eur => BigDecimal::from(1),
            Currency::Usd => BigDecimal::new(BigInt::from(108), 2),
            Currency::Xof => BigDecimal::new(BigInt::from(65596), 2),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Xof => "CFA",
        }
    }

    /// Converts a base-currency amount into this currency.
    pub fn convert(&self, base_amount: &BigDecimal) -> BigDecimal {
        base_amount * self.rate()
    }

    /// Converts and formats a base-currency amount as "amount symbol".
    ///
    /// Two decimal places, except XOF which has no minor units and is
    /// rounded to the nearest whole franc.
    pub fn format(&self, base_amount: &BigDecimal) -> String {
        let converted = self.convert(base_amount);
        match self {
            Currency::Xof => format!(
                "{} {}",
                converted.with_scale_round(0, RoundingMode::HalfUp),
                self.symbol()
            ),
            _ => format!(
                "{} {}",
                converted.with_scale_round(2, RoundingMode::HalfUp),
                self.symbol()
            ),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
            Currency::Xof => write!(f, "XOF"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "XOF" => Ok(Currency::Xof),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
