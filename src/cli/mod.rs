//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer. Input validation (amount parsing,
//! non-negative checks, date defaults) lives here, at the presentation
//! boundary.

pub mod contribution;
pub mod expense;
pub mod export;
pub mod report;

pub use contribution::{handle_contribution_command, ContributionCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_settle, handle_summary};

use chrono::NaiveDate;

use crate::error::{SplitpoolError, SplitpoolResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub(crate) fn parse_date_or_today(date: Option<&str>) -> SplitpoolResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            SplitpoolError::Validation(format!(
                "Invalid date: '{}'. Use the format YYYY-MM-DD.",
                s
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an amount argument and reject negative values
pub(crate) fn parse_non_negative_amount(amount: &str) -> SplitpoolResult<Money> {
    let parsed = Money::parse(amount).map_err(|e| {
        SplitpoolError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '100.00' or '100'. Error: {}",
            amount, e
        ))
    })?;

    if parsed.is_negative() {
        return Err(SplitpoolError::Validation(format!(
            "Amount must not be negative: '{}'",
            amount
        )));
    }

    Ok(parsed)
}
