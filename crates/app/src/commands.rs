//! Dispatches one parsed command against the expenses store.
//!
//! Each run loads the store once, applies a single command and saves only
//! when the command added a record.

use std::io::Write;

use chrono::NaiveDateTime;
use clap::CommandFactory;
use engine::{EngineError, Ledger, NewExpense, Store};

use crate::{
    cli::{AddArgs, Cli, Command, ShowArgs, SummaryArgs},
    error::Result,
    table::expenses_table,
};

pub fn dispatch<W: Write>(
    command: Option<Command>,
    store: &Store,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<()> {
    let outcome = store.load()?;
    if let Some(notice) = outcome.notice(store.path()) {
        writeln!(out, "{notice}")?;
    }
    let mut ledger = Ledger::from(outcome.into_expenses());

    match command {
        Some(Command::Add(args)) => add(&mut ledger, store, args, now, out),
        Some(Command::List) => list(&ledger, out),
        Some(Command::Summary(args)) => summary(&ledger, args, out),
        Some(Command::Show(args)) => show(&ledger, args, out),
        None => {
            write!(out, "{}", Cli::command().render_help())?;
            Ok(())
        }
    }
}

fn add<W: Write>(
    ledger: &mut Ledger,
    store: &Store,
    args: AddArgs,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<()> {
    let draft = NewExpense {
        description: args.description,
        category: args.category,
        amount: args.amount,
        currency: args.currency,
        expense_date: args.expense_date.unwrap_or(now.date()),
    };
    let id = ledger.add(draft, now)?.id;

    // A failed save is reported but does not fail the command.
    if let Err(err) = store.save(ledger.expenses()) {
        tracing::warn!("failed to save {}: {err}", store.path().display());
        match err {
            EngineError::Io(_) => writeln!(
                out,
                "An I/O error occurred while trying to write to the file {}.",
                store.path().display()
            )?,
            other => writeln!(out, "Failed to serialize object to JSON: {other}")?,
        }
    }

    writeln!(out, "Expense added successfully (ID: {id})")?;
    Ok(())
}

fn list<W: Write>(ledger: &Ledger, out: &mut W) -> Result<()> {
    write!(out, "{}", expenses_table(ledger.expenses()))?;
    Ok(())
}

fn summary<W: Write>(ledger: &Ledger, args: SummaryArgs, out: &mut W) -> Result<()> {
    writeln!(out, "{}", ledger.summary(args.category))?;
    Ok(())
}

fn show<W: Write>(ledger: &Ledger, args: ShowArgs, out: &mut W) -> Result<()> {
    match ledger.find(args.id) {
        Some(expense) => writeln!(out, "{expense}")?,
        None => writeln!(out, "Expense with ID {} not found.", args.id)?,
    }
    Ok(())
}
