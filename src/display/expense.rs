//! Expense display formatting

use crate::models::Expense;

use super::truncate;

/// Format a single expense for display (table row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{} {:15} {:30} {:>12}",
        expense.date.format("%Y-%m-%d"),
        truncate(expense.category.name(), 15),
        truncate(&expense.description, 30),
        expense.amount.to_string()
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:15} {:30} {:>12}\n",
        "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_format_expense_row() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Category::Market,
            "weekly groceries",
            Money::from_cents(4550),
        );

        let formatted = format_expense_row(&expense);
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Market"));
        assert!(formatted.contains("weekly groceries"));
        assert!(formatted.contains("45.50"));
    }

    #[test]
    fn test_format_empty_table() {
        let formatted = format_expense_table(&[]);
        assert!(formatted.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_table_has_header() {
        let expenses = vec![Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Category::Rent,
            "january rent",
            Money::from_cents(120000),
        )];

        let formatted = format_expense_table(&expenses);
        assert!(formatted.contains("Date"));
        assert!(formatted.contains("Category"));
        assert!(formatted.contains("1200.00"));
    }
}
