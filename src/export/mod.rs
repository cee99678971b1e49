//! Data export
//!
//! Exports the record collections and the computed settlement to CSV.

pub mod csv;

pub use csv::{export_contributions_csv, export_expenses_csv, export_settlements_csv};
