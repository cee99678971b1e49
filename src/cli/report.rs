//! Summary and settlement view commands

use crate::display::{format_expense_table, format_settlement_table, format_verdicts};
use crate::error::SplitpoolResult;
use crate::reports::SummaryReport;
use crate::services::SettlementReport;
use crate::storage::Storage;

/// Render the monthly summary view
pub fn handle_summary(storage: &Storage) -> SplitpoolResult<()> {
    let expenses = storage.expenses.get_all()?;
    if expenses.is_empty() {
        println!("No expenses added yet.");
        return Ok(());
    }

    print!("{}", format_expense_table(&expenses));
    println!();

    let report = SummaryReport::generate(storage)?;
    println!("Total Expenses: {}", report.total_expenses);
    println!("Total Contributions: {}", report.total_contributions);
    println!("Available Balance: {}", report.available_balance);

    Ok(())
}

/// Render the settlements view
pub fn handle_settle(storage: &Storage) -> SplitpoolResult<()> {
    let expenses = storage.expenses.get_all()?;
    if expenses.is_empty() {
        println!("No expenses to settle.");
        return Ok(());
    }

    let contributions = storage.contributions.get_all()?;
    let report = SettlementReport::compute(&expenses, &contributions);

    println!("Total Shared Expenses: {}", report.total_expenses);
    println!("Equal Share: {}", report.equal_share);
    println!();
    print!("{}", format_settlement_table(&report));

    if !report.is_empty() {
        println!();
        println!("Who Owes Whom");
        print!("{}", format_verdicts(&report));
    }

    Ok(())
}
