//! The module contains the `Expense` type, the single record kept in the store.
//!
//! An expense is created once by [`Ledger::add`] and never edited afterwards,
//! so `updated_at` always equals `created_at`.
//!
//! [`Ledger::add`]: crate::Ledger::add
use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Amount, Category, Currency, EngineError, ResultEngine};

/// Represent a dated, categorized monetary entry.
///
/// Field order matches the key order written to the store file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub expense_date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub amount: Amount,
    pub currency: Currency,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Expense {
    /// Builds a record from explicit values. No validation is performed here;
    /// callers go through [`NewExpense::validate`] first.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        expense_date: NaiveDate,
        description: String,
        category: Category,
        amount: Amount,
        currency: Currency,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            expense_date,
            description,
            category,
            amount,
            currency,
            created_at,
            updated_at,
        }
    }

    /// Converts the record into a JSON object with exactly the eight stored keys.
    pub fn to_value(&self) -> ResultEngine<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a record from a JSON object. Fails with a missing-field error
    /// when any of the stored keys is absent.
    pub fn from_value(value: Value) -> ResultEngine<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" (ID: {}) created at: {}",
            self.description, self.id, self.expense_date
        )
    }
}

/// User-supplied fields of an expense, before the ledger assigns id and timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub category: Category,
    pub amount: Amount,
    pub currency: Currency,
    pub expense_date: NaiveDate,
}

impl NewExpense {
    pub fn validate(&self) -> ResultEngine<()> {
        if self.description.trim().is_empty() {
            return Err(EngineError::EmptyDescription);
        }
        Ok(())
    }
}
