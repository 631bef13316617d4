use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO currency code attached to every expense.
///
/// The set is closed: an amount is recorded either in Chilean pesos (the
/// default) or in US dollars. No conversion between the two ever happens, so
/// sums mix them as plain numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Clp,
    Usd,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 2] = [Currency::Clp, Currency::Usd];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Clp => "CLP",
            Currency::Usd => "USD",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CLP" => Ok(Currency::Clp),
            "USD" => Ok(Currency::Usd),
            other => Err(EngineError::InvalidCurrency(other.to_string())),
        }
    }
}
