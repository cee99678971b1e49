//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{SplitpoolError, SplitpoolResult};
use crate::models::{Category, Expense};
use crate::storage::Storage;

use super::{parse_date_or_today, parse_non_negative_amount};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a shared expense
    Add {
        /// Amount spent (e.g., "45.50")
        amount: String,
        /// Category (market, utilities, rent, other, worker-payment)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all recorded expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> SplitpoolResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let category = Category::parse(&category).ok_or_else(|| {
                SplitpoolError::Validation(format!(
                    "Invalid category: '{}'. Valid categories: market, utilities, rent, other, worker-payment",
                    category
                ))
            })?;
            let amount = parse_non_negative_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let expense = Expense::new(date, category, description, amount);
            expense
                .validate()
                .map_err(|e| SplitpoolError::Validation(e.to_string()))?;

            storage.expenses.append(expense)?;
            storage.expenses.save()?;

            println!("Expense added successfully.");
        }

        ExpenseCommands::List => {
            let expenses = storage.expenses.get_all()?;
            print!("{}", format_expense_table(&expenses));
        }
    }

    Ok(())
}
