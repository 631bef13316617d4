//! In-memory view over the expense collection.

use chrono::NaiveDateTime;

use crate::{Amount, Category, Expense, NewExpense, ResultEngine, store::next_id};

/// Ordered collection of expenses, in store insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Appends a new expense stamped with `now` and returns it.
    ///
    /// The id is one past the highest id already present. Nothing is appended
    /// when the draft is invalid or no id is left.
    pub fn add(&mut self, draft: NewExpense, now: NaiveDateTime) -> ResultEngine<&Expense> {
        draft.validate()?;

        let id = next_id(&self.expenses)?;
        let NewExpense {
            description,
            category,
            amount,
            currency,
            expense_date,
        } = draft;
        self.expenses.push(Expense::new(
            id,
            expense_date,
            description,
            category,
            amount,
            currency,
            now,
            now,
        ));
        tracing::debug!("added expense {id}");

        let added = self.expenses.len() - 1;
        Ok(&self.expenses[added])
    }

    /// Sums every amount, or only those in `category` when given.
    pub fn summary(&self, category: Option<Category>) -> Amount {
        self.expenses
            .iter()
            .filter(|expense| category.is_none_or(|c| expense.category == c))
            .map(|expense| expense.amount)
            .sum()
    }

    pub fn find(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self::new(expenses)
    }
}
