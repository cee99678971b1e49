//! Export CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{SplitpoolError, SplitpoolResult};
use crate::export::{export_contributions_csv, export_expenses_csv, export_settlements_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all expenses to CSV
    Expenses {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all contributions to CSV
    Contributions {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the computed settlement table to CSV
    Settlements {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SplitpoolResult<()> {
    let (output, export): (_, fn(&Storage, Box<dyn std::io::Write>) -> SplitpoolResult<()>) =
        match cmd {
            ExportCommands::Expenses { output } => (output, |s, w| export_expenses_csv(s, w)),
            ExportCommands::Contributions { output } => {
                (output, |s, w| export_contributions_csv(s, w))
            }
            ExportCommands::Settlements { output } => {
                (output, |s, w| export_settlements_csv(s, w))
            }
        };

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SplitpoolError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export(storage, Box::new(file))?;
            println!("Exported to {}", path.display());
        }
        None => {
            export(storage, Box::new(std::io::stdout()))?;
        }
    }

    Ok(())
}
