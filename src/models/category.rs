//! Expense categories
//!
//! The category set is fixed. Worker Payment is labeled separately in some
//! views but is treated as a shared cost everywhere the settlement math is
//! concerned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a shared household expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Market,
    Utilities,
    Rent,
    Other,
    #[serde(rename = "Worker Payment")]
    WorkerPayment,
}

impl Category {
    /// All categories, in entry-form order
    pub const ALL: [Category; 5] = [
        Category::Market,
        Category::Utilities,
        Category::Rent,
        Category::Other,
        Category::WorkerPayment,
    ];

    /// Parse a category from a string (case-insensitive)
    ///
    /// Accepts the display name ("Worker Payment") as well as the compact
    /// forms used on the command line ("worker-payment", "worker_payment").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "market" => Some(Category::Market),
            "utilities" => Some(Category::Utilities),
            "rent" => Some(Category::Rent),
            "other" => Some(Category::Other),
            "worker payment" | "worker-payment" | "worker_payment" => {
                Some(Category::WorkerPayment)
            }
            _ => None,
        }
    }

    /// The display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::Market => "Market",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Other => "Other",
            Category::WorkerPayment => "Worker Payment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
