//! Pool summary report
//!
//! Aggregates the whole store into the metrics the summary and contributions
//! views render: totals, the Worker Payment subtotal, the available balance,
//! and per-person contribution totals.

use crate::error::SplitpoolResult;
use crate::models::{Category, Money};
use crate::services::aggregate::{filter_by_category, group_sum_by_person, total};
use crate::storage::Storage;

/// Summary of the shared pool
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Sum of all contribution amounts
    pub total_contributions: Money,
    /// Sum of all expense amounts, Worker Payment included
    pub total_expenses: Money,
    /// Worker Payment subtotal, shown separately but never excluded from
    /// the expense total
    pub worker_payments: Money,
    /// Total contributions minus total expenses
    pub available_balance: Money,
    /// Per-person contribution totals, descending
    pub person_totals: Vec<(String, Money)>,
    /// Number of expense records
    pub expense_count: usize,
    /// Number of contribution records
    pub contribution_count: usize,
}

impl SummaryReport {
    /// Generate a summary from the current store contents
    pub fn generate(storage: &Storage) -> SplitpoolResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let contributions = storage.contributions.get_all()?;

        let total_contributions = total(&contributions);
        let total_expenses = total(&expenses);
        let worker_payments = filter_by_category(&expenses, Category::WorkerPayment)
            .iter()
            .map(|e| e.amount)
            .sum();

        Ok(Self {
            total_contributions,
            total_expenses,
            worker_payments,
            available_balance: total_contributions - total_expenses,
            person_totals: group_sum_by_person(&contributions),
            expense_count: expenses.len(),
            contribution_count: contributions.len(),
        })
    }
}
