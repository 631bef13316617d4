//! Core of the expense record-keeper: the record type, its closed sets, the
//! JSON file store and the in-memory ledger operations.

pub use category::Category;
pub use currency::Currency;
pub use error::EngineError;
pub use expense::{Expense, NewExpense};
pub use ledger::Ledger;
pub use money::Amount;
pub use store::{DEFAULT_STORE_PATH, LoadOutcome, Store, next_id};

mod category;
mod currency;
mod error;
mod expense;
mod ledger;
mod money;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
