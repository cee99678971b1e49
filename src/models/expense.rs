//! Expense record model
//!
//! An expense is a flat, append-only record of one shared household cost.
//! Serialized field names are capitalized to match the store file format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, Money};

/// A single shared expense
///
/// Records are immutable once created; there is no edit or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date the expense occurred
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Expense category
    #[serde(rename = "Category")]
    pub category: Category,

    /// Free-text description
    #[serde(rename = "Description")]
    pub description: String,

    /// Amount spent (non-negative)
    #[serde(rename = "Amount")]
    pub amount: Money,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseValidationError::NegativeAmount => {
                write!(f, "Expense amount must not be negative")
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Category::Market,
            "weekly groceries",
            Money::from_cents(4550),
        )
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut bad = sample();
        bad.amount = Money::from_cents(-1);
        assert_eq!(
            bad.validate(),
            Err(ExpenseValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let mut expense = sample();
        expense.amount = Money::zero();
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Date"], "2025-01-15");
        assert_eq!(json["Category"], "Market");
        assert_eq!(json["Description"], "weekly groceries");
        assert_eq!(json["Amount"], 45.5);
    }

    #[test]
    fn test_round_trip() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }
}
