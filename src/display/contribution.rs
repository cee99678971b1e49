//! Contribution display formatting

use crate::models::{Contribution, Money};

use super::truncate;

/// Format a single contribution for display (table row)
pub fn format_contribution_row(contribution: &Contribution) -> String {
    format!(
        "{:20} {:>12} {}",
        truncate(&contribution.name, 20),
        contribution.amount.to_string(),
        contribution.date.format("%Y-%m-%d")
    )
}

/// Format a list of contributions as a table
pub fn format_contribution_table(contributions: &[Contribution]) -> String {
    if contributions.is_empty() {
        return "No contributions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:>12} {:10}\n",
        "Name", "Amount", "Date"
    ));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for contribution in contributions {
        output.push_str(&format_contribution_row(contribution));
        output.push('\n');
    }

    output
}

/// Format per-person contribution totals (descending)
pub fn format_person_totals(person_totals: &[(String, Money)]) -> String {
    if person_totals.is_empty() {
        return "No contributions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:>17}\n",
        "Person", "Total Contributed"
    ));
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for (name, amount) in person_totals {
        output.push_str(&format!(
            "{:20} {:>17}\n",
            truncate(name, 20),
            amount.to_string()
        ));
    }

    output
}
