//! Settlement display formatting

use crate::services::{SettlementReport, Verdict};

use super::truncate;

/// Format the settlement table (name, contributed, balance)
pub fn format_settlement_table(report: &SettlementReport) -> String {
    if report.is_empty() {
        return "No contributors to settle against.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:>12} {:>14}\n",
        "Name", "Contributed", "Owes/Receives"
    ));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for entry in &report.entries {
        output.push_str(&format!(
            "{:20} {:>12} {:>14}\n",
            truncate(&entry.name, 20),
            entry.contributed.to_string(),
            entry.balance.to_string()
        ));
    }

    output
}

/// Format the per-person verdict lines ("who owes whom")
pub fn format_verdicts(report: &SettlementReport) -> String {
    let mut output = String::new();

    for entry in &report.entries {
        match entry.verdict() {
            Verdict::Owes(amount) => {
                output.push_str(&format!("{} should pay {}\n", entry.name, amount));
            }
            Verdict::Receives(amount) => {
                output.push_str(&format!("{} should receive {}\n", entry.name, amount));
            }
            Verdict::Settled => {
                output.push_str(&format!("{} is settled\n", entry.name));
            }
        }
    }

    output
}
