//! CSV Export functionality
//!
//! Exports expenses, contributions, and the computed settlement table to CSV.
//! Column names match the store file field names.

use std::io::Write;

use crate::error::SplitpoolResult;
use crate::services::SettlementReport;
use crate::storage::Storage;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> SplitpoolResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Date", "Category", "Description", "Amount"])?;

    for expense in storage.expenses.get_all()? {
        wtr.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.name().to_string(),
            expense.description.clone(),
            expense.amount.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export all contributions to CSV
pub fn export_contributions_csv<W: Write>(storage: &Storage, writer: W) -> SplitpoolResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Name", "Amount", "Date"])?;

    for contribution in storage.contributions.get_all()? {
        wtr.write_record([
            contribution.name.clone(),
            contribution.amount.to_string(),
            contribution.date.format("%Y-%m-%d").to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the computed settlement table to CSV
pub fn export_settlements_csv<W: Write>(storage: &Storage, writer: W) -> SplitpoolResult<()> {
    let expenses = storage.expenses.get_all()?;
    let contributions = storage.contributions.get_all()?;
    let report = SettlementReport::compute(&expenses, &contributions);

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Name", "Contributed", "Owes/Receives"])?;

    for entry in &report.entries {
        wtr.write_record([
            entry.name.clone(),
            entry.contributed.to_string(),
            entry.balance.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
