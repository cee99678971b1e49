//! Business logic layer
//!
//! Pure functions over record snapshots: the CLI loads state from storage,
//! hands slices to these services, and renders the results. No session state
//! lives here.

pub mod aggregate;
pub mod settlement;

pub use aggregate::{
    available_balance, contributor_names, filter_by_category, group_sum_by_person, total,
    Amounted,
};
pub use settlement::{SettlementEntry, SettlementReport, Verdict};
