//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`NotAList`] thrown when the store file holds valid JSON whose root is not an array.
//! - [`Json`] thrown when a record cannot be (de)serialized, e.g. a missing field.
//! - [`Io`] thrown when the store file cannot be written.
//! - [`IdExhausted`] thrown when no id is left above the highest stored one.
//! - [`InvalidCategory`], [`InvalidCurrency`], [`InvalidAmount`] and
//!   [`EmptyDescription`] thrown when user input does not fit the data model.
//!
//!  [`NotAList`]: EngineError::NotAList
//!  [`Json`]: EngineError::Json
//!  [`Io`]: EngineError::Io
//!  [`IdExhausted`]: EngineError::IdExhausted
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`EmptyDescription`]: EngineError::EmptyDescription
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Expected a list of expenses in {0}")]
    NotAList(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("No id left after {0}")]
    IdExhausted(u64),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotAList(a), Self::NotAList(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::InvalidCurrency(a), Self::InvalidCurrency(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::EmptyDescription, Self::EmptyDescription) => true,
            (Self::IdExhausted(a), Self::IdExhausted(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
