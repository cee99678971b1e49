//! Storage layer for splitpool
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each collection lives in its own file and is read and rewritten
//! whole; there is no locking or contention model beyond last-writer-wins.

pub mod contributions;
pub mod expenses;
pub mod file_io;

pub use contributions::ContributionRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::SplitpoolPaths;
use crate::error::SplitpoolError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: SplitpoolPaths,
    pub expenses: ExpenseRepository,
    pub contributions: ContributionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SplitpoolPaths) -> Result<Self, SplitpoolError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            contributions: ContributionRepository::new(paths.contributions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SplitpoolPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), SplitpoolError> {
        self.expenses.load()?;
        self.contributions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SplitpoolError> {
        self.expenses.save()?;
        self.contributions.save()?;
        Ok(())
    }
}
