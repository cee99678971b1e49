//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file holds a
//! bare array of flat records in insertion order; records are append-only.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitpoolError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    records: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file loads as an empty collection; a malformed file is an
    /// error.
    pub fn load(&self) -> Result<(), SplitpoolError> {
        let loaded: Vec<Expense> = read_json(&self.path)?;

        let mut records = self.records.write().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *records = loaded;

        Ok(())
    }

    /// Save expenses to disk (whole-file overwrite)
    pub fn save(&self) -> Result<(), SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*records)
    }

    /// Append an expense, preserving insertion order
    pub fn append(&self, expense: Expense) -> Result<(), SplitpoolError> {
        let mut records = self.records.write().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        records.push(expense);
        Ok(())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.clone())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Category::Market,
            description,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("bread", 350)).unwrap();
        repo.append(sample_expense("milk", 220)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "bread");
        assert_eq!(all[1].description, "milk");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("bread", 350)).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("expenses.json");
        let repo2 = ExpenseRepository::new(path);
        repo2.load().unwrap();

        let all = repo2.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "bread");
        assert_eq!(all[0].amount.cents(), 350);
    }

    #[test]
    fn test_file_is_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample_expense("bread", 350)).unwrap();
        repo.save().unwrap();

        let contents = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["Description"], "bread");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "{{{").unwrap();

        assert!(repo.load().is_err());
    }
}
