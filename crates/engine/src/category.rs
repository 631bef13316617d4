//! Fixed set of expense categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Expense,
    Investment,
    Saving,
    Pleasure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Expense,
        Category::Investment,
        Category::Saving,
        Category::Pleasure,
    ];

    /// Returns the canonical category name used in the store file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Investment => "investment",
            Self::Saving => "saving",
            Self::Pleasure => "pleasure",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
        {
            Some(category) => Ok(category),
            None => Err(EngineError::InvalidCategory(normalized)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(" Saving ".parse::<Category>().unwrap(), Category::Saving);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, EngineError::InvalidCategory("groceries".to_string()));
        assert_eq!(err.to_string(), "Invalid category: groceries");
    }
}
