use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{
    Args, Parser, Subcommand,
    builder::{PossibleValuesParser, TypedValueParser},
};
use engine::{Amount, Category, Currency};

#[derive(Debug, Parser)]
#[command(name = "spendlog", about = "CLI app to manage your finances")]
pub struct Cli {
    /// Optional settings file (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the expenses file path.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
    /// Override the log level (e.g. debug, info, warn).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Add a new expense
    Add(AddArgs),
    /// List every expense as a table
    List,
    /// Print the total amount, optionally for one category
    Summary(SummaryArgs),
    /// Show a single expense by ID
    Show(ShowArgs),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct AddArgs {
    /// Description of the expense
    #[arg(value_parser = parse_description)]
    pub description: String,
    /// Category of the expense
    #[arg(value_parser = category_parser())]
    pub category: Category,
    /// Amount of the expense
    #[arg(allow_negative_numbers = true)]
    pub amount: Amount,
    /// Currency of the amount
    #[arg(long, default_value_t = Currency::default(), value_parser = currency_parser(), ignore_case = true)]
    pub currency: Currency,
    /// Date of the expense (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub expense_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct SummaryArgs {
    /// Only sum expenses in this category
    #[arg(long, value_parser = category_parser())]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ShowArgs {
    /// ID of the expense
    pub id: u64,
}

fn parse_description(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("description must not be empty".to_string());
    }
    Ok(raw.to_string())
}

fn category_parser() -> impl TypedValueParser<Value = Category> {
    PossibleValuesParser::new(Category::ALL.map(Category::as_str))
        .try_map(|raw: String| raw.parse::<Category>())
}

fn currency_parser() -> impl TypedValueParser<Value = Currency> {
    PossibleValuesParser::new(Currency::ALL.map(Currency::code))
        .try_map(|raw: String| raw.parse::<Currency>())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, error::ErrorKind};

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("spendlog").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_parses_positionals_and_options() {
        let cli = parse(&["add", "Coffee", "pleasure", "3.5", "--currency", "USD"]).unwrap();
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.description, "Coffee");
        assert_eq!(args.category, Category::Pleasure);
        assert_eq!(args.amount, Amount::new(3.5));
        assert_eq!(args.currency, Currency::Usd);
        assert_eq!(args.expense_date, None);
    }

    #[test]
    fn add_defaults_currency_to_clp() {
        let cli = parse(&["add", "Bus", "expense", "800", "--expense-date", "2024-01-31"]).unwrap();
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.currency, Currency::Clp);
        assert_eq!(args.expense_date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn add_accepts_negative_amounts() {
        let cli = parse(&["add", "Refund", "expense", "-12.5"]).unwrap();
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.amount, Amount::new(-12.5));
    }

    #[test]
    fn add_rejects_values_outside_the_closed_sets() {
        let err = parse(&["add", "Coffee", "food", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = parse(&["add", "Coffee", "pleasure", "3", "--currency", "EUR"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn add_rejects_bad_amount_date_and_description() {
        assert_eq!(
            parse(&["add", "Coffee", "pleasure", "three"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["add", "Coffee", "pleasure", "3", "--expense-date", "31/01/2024"])
                .unwrap_err()
                .kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["add", " ", "pleasure", "3"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn summary_category_is_optional() {
        let cli = parse(&["summary"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Summary(SummaryArgs { category: None }))
        );

        let cli = parse(&["summary", "--category", "saving"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Summary(SummaryArgs {
                category: Some(Category::Saving)
            }))
        );
    }

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = parse(&["delete", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
