//! Core data models for splitpool
//!
//! This module contains the data structures that represent the domain:
//! expenses, contributions, expense categories, and money amounts.

pub mod category;
pub mod contribution;
pub mod expense;
pub mod money;

pub use category::Category;
pub use contribution::Contribution;
pub use expense::Expense;
pub use money::Money;
