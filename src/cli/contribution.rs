//! Contribution CLI commands

use clap::Subcommand;

use crate::display::{format_contribution_table, format_person_totals};
use crate::error::{SplitpoolError, SplitpoolResult};
use crate::models::Contribution;
use crate::reports::SummaryReport;
use crate::storage::Storage;

use super::{parse_date_or_today, parse_non_negative_amount};

/// Contribution subcommands
#[derive(Subcommand)]
pub enum ContributionCommands {
    /// Record a fixed contribution to the shared pool
    Add {
        /// Name of the contributing person
        name: String,
        /// Amount contributed (e.g., "100.00")
        amount: String,
        /// Contribution date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all recorded contributions
    List,
    /// Show pool metrics and per-person totals
    Report,
}

/// Handle a contribution command
pub fn handle_contribution_command(
    storage: &Storage,
    cmd: ContributionCommands,
) -> SplitpoolResult<()> {
    match cmd {
        ContributionCommands::Add { name, amount, date } => {
            let amount = parse_non_negative_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let contribution = Contribution::new(name, amount, date);
            contribution
                .validate()
                .map_err(|e| SplitpoolError::Validation(e.to_string()))?;

            storage.contributions.append(contribution)?;
            storage.contributions.save()?;

            println!("Fixed contribution recorded.");
        }

        ContributionCommands::List => {
            let contributions = storage.contributions.get_all()?;
            print!("{}", format_contribution_table(&contributions));
        }

        ContributionCommands::Report => {
            let contributions = storage.contributions.get_all()?;
            if contributions.is_empty() {
                println!("No contributions recorded.");
                return Ok(());
            }

            print!("{}", format_contribution_table(&contributions));
            println!();

            let report = SummaryReport::generate(storage)?;
            println!("Available Balance (Shared Only)");
            println!("  Total Contributions: {}", report.total_contributions);
            println!(
                "  All Expenses (incl. Worker Payments): {}",
                report.total_expenses
            );
            println!("  Worker Payments: {}", report.worker_payments);
            println!("  Balance Left: {}", report.available_balance);
            println!();

            println!("Total Contributions Per Person");
            print!("{}", format_person_totals(&report.person_totals));
        }
    }

    Ok(())
}
