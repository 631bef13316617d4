use engine::Expense;
use prettytable::{Table, row};

/// Builds the `list` grid: one row per expense, in store order.
pub fn expenses_table(expenses: &[Expense]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Category", "Description", "Amount", "Date"]);

    for expense in expenses {
        table.add_row(row![
            expense.category,
            expense.description,
            expense.amount,
            expense.expense_date
        ]);
    }

    table
}
