//! Path management for splitpool
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//! The original store used fixed filenames in the working directory; here the
//! store locations are explicit configuration injected at startup.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITPOOL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/splitpool` or `~/.config/splitpool`
//! 3. Windows: `%APPDATA%\splitpool`

use std::path::PathBuf;

use crate::error::SplitpoolError;

/// Manages all paths used by splitpool
#[derive(Debug, Clone)]
pub struct SplitpoolPaths {
    /// Base directory for all splitpool data
    base_dir: PathBuf,
}

impl SplitpoolPaths {
    /// Create a new SplitpoolPaths instance
    ///
    /// Path resolution:
    /// 1. `SPLITPOOL_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/splitpool` or `~/.config/splitpool`
    /// 3. Windows: `%APPDATA%\splitpool`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SplitpoolError> {
        let base_dir = if let Ok(custom) = std::env::var("SPLITPOOL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SplitpoolPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/splitpool/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/splitpool/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to contributions.json
    pub fn contributions_file(&self) -> PathBuf {
        self.data_dir().join("contributions.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/splitpool/)
    /// - Data directory (~/.config/splitpool/data/)
    pub fn ensure_directories(&self) -> Result<(), SplitpoolError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitpoolError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SplitpoolError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SplitpoolError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    SplitpoolError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("splitpool"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SplitpoolError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SplitpoolError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("splitpool"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpoolPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpoolPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
        assert_eq!(
            paths.contributions_file(),
            temp_dir.path().join("data").join("contributions.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpoolPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
