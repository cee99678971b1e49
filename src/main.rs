use anyhow::Result;
use clap::{Parser, Subcommand};

use splitpool::cli::{
    handle_contribution_command, handle_expense_command, handle_export_command, handle_settle,
    handle_summary, ContributionCommands, ExpenseCommands, ExportCommands,
};
use splitpool::config::paths::SplitpoolPaths;
use splitpool::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitpool",
    author = "Kaylee Beyene",
    version,
    about = "Shared household expense tracker with equal-split settlements",
    long_about = "splitpool records shared household expenses and fixed \
                  contributions from multiple people, then settles everyone \
                  against an equal split of the total."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense entry and listing
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Contribution entry, listing, and pool metrics
    #[command(subcommand, alias = "contrib")]
    Contribution(ContributionCommands),

    /// Show the monthly summary (all expenses plus totals)
    Summary,

    /// Compute equal-split settlements
    Settle,

    /// Export data to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = SplitpoolPaths::new()?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Contribution(cmd)) => {
            handle_contribution_command(&storage, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&storage)?;
        }
        Some(Commands::Settle) => {
            handle_settle(&storage)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("splitpool Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!(
                "Contributions:  {}",
                paths.contributions_file().display()
            );
        }
        None => {
            println!("splitpool - Shared household expense tracker");
            println!();
            println!("Run 'splitpool --help' for usage information.");
            println!("Run 'splitpool settle' to compute settlements.");
        }
    }

    Ok(())
}
