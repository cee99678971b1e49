//! Derived reports
//!
//! Reports are computed from storage snapshots on demand and never persisted.

pub mod summary;

pub use summary::SummaryReport;
