use std::{
    fmt,
    iter::Sum,
    ops::Add,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Monetary quantity attached to an expense.
///
/// Amounts are stored as plain JSON numbers, so the value is a double. The
/// sign is not constrained: refunds or corrections can be recorded as
/// negative amounts.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount: Amount = "3.5".parse().unwrap();
/// assert_eq!(amount.to_string(), "3.5");
/// assert_eq!(Amount::new(40.0).to_string(), "40");
/// assert!("abc".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0` only shows up when negative amounts cancel out.
        if self.is_zero() {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl FromStr for Amount {
    type Err = EngineError;

    /// Parses a decimal string.
    ///
    /// Accepts an optional leading `+`/`-`, `.` as decimal separator and
    /// exponent notation. Rejects empty strings and non-finite values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidAmount("empty amount".to_string()));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| EngineError::InvalidAmount(format!("not a number: {trimmed}")))?;
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be finite: {trimmed}"
            )));
        }

        Ok(Amount(value))
    }
}
