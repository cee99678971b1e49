//! Terminal display formatting
//!
//! Plain-text tables and metric lines for the CLI views.

pub mod contribution;
pub mod expense;
pub mod settlement;

pub use contribution::{format_contribution_table, format_person_totals};
pub use expense::format_expense_table;
pub use settlement::{format_settlement_table, format_verdicts};

/// Truncate a string to a maximum length, padding short strings
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
