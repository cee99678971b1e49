//! splitpool - Shared household expense tracker
//!
//! This library provides the core functionality for splitpool, a CLI for
//! recording shared household expenses and fixed contributions from multiple
//! people, then settling everyone against an equal split of the total.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, contributions, money, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Aggregation and settlement logic
//! - `reports`: Derived summary reports
//! - `display`: Terminal table and metric formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use splitpool::config::paths::SplitpoolPaths;
//! use splitpool::storage::Storage;
//!
//! let paths = SplitpoolPaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SplitpoolError;
