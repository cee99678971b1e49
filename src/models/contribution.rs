//! Contribution record model
//!
//! A contribution is a flat, append-only record of one fixed payment into the
//! shared pool by a named person.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// A single fixed contribution to the shared pool
///
/// Records are immutable once created; there is no edit or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Name of the contributing person
    #[serde(rename = "Name")]
    pub name: String,

    /// Amount contributed (non-negative)
    #[serde(rename = "Amount")]
    pub amount: Money,

    /// Date of the contribution
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

impl Contribution {
    /// Create a new contribution record
    pub fn new(name: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            date,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ContributionValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContributionValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(ContributionValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for contribution records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for ContributionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionValidationError::EmptyName => {
                write!(f, "Contributor name cannot be empty")
            }
            ContributionValidationError::NegativeAmount => {
                write!(f, "Contribution amount must not be negative")
            }
        }
    }
}

impl std::error::Error for ContributionValidationError {}
