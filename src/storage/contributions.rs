//! Contribution repository for JSON storage
//!
//! Manages loading and saving contributions to contributions.json. Insertion
//! order matters: the settlement view enumerates contributors in order of
//! first appearance.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitpoolError;
use crate::models::Contribution;

use super::file_io::{read_json, write_json_atomic};

/// Repository for contribution persistence
pub struct ContributionRepository {
    path: PathBuf,
    records: RwLock<Vec<Contribution>>,
}

impl ContributionRepository {
    /// Create a new contribution repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load contributions from disk
    ///
    /// A missing file loads as an empty collection; a malformed file is an
    /// error.
    pub fn load(&self) -> Result<(), SplitpoolError> {
        let loaded: Vec<Contribution> = read_json(&self.path)?;

        let mut records = self.records.write().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *records = loaded;

        Ok(())
    }

    /// Save contributions to disk (whole-file overwrite)
    pub fn save(&self) -> Result<(), SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*records)
    }

    /// Append a contribution, preserving insertion order
    pub fn append(&self, contribution: Contribution) -> Result<(), SplitpoolError> {
        let mut records = self.records.write().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        records.push(contribution);
        Ok(())
    }

    /// Get all contributions in insertion order
    pub fn get_all(&self) -> Result<Vec<Contribution>, SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.clone())
    }

    /// Count contributions
    pub fn count(&self) -> Result<usize, SplitpoolError> {
        let records = self.records.read().map_err(|e| {
            SplitpoolError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.len())
    }
}
