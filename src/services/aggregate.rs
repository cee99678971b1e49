//! Aggregation over expense and contribution records
//!
//! Everything here is recomputed from the full record set on each call;
//! nothing derived is ever persisted.

use std::collections::HashMap;

use crate::models::{Category, Contribution, Expense, Money};

/// Records that carry a money amount
pub trait Amounted {
    fn amount(&self) -> Money;
}

impl Amounted for Expense {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl Amounted for Contribution {
    fn amount(&self) -> Money {
        self.amount
    }
}

/// Sum the amounts of a record sequence; zero for an empty sequence
pub fn total<T: Amounted>(records: &[T]) -> Money {
    records.iter().map(Amounted::amount).sum()
}

/// Sum contribution amounts per distinct person name
///
/// Output is ordered by descending total; people with equal totals keep
/// their order of first appearance.
pub fn group_sum_by_person(contributions: &[Contribution]) -> Vec<(String, Money)> {
    let mut totals: HashMap<&str, Money> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for contribution in contributions {
        let name = contribution.name.as_str();
        if !totals.contains_key(name) {
            order.push(name);
        }
        *totals.entry(name).or_default() += contribution.amount;
    }

    let mut grouped: Vec<(String, Money)> = order
        .into_iter()
        .map(|name| (name.to_string(), totals[name]))
        .collect();

    // Stable sort keeps first-appearance order among equal totals
    grouped.sort_by(|a, b| b.1.cmp(&a.1));
    grouped
}

/// Distinct contributor names in order of first appearance
///
/// This is the settlement roster: only people who contributed are named,
/// regardless of who shows up in expense descriptions.
pub fn contributor_names(contributions: &[Contribution]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for contribution in contributions {
        if !names.iter().any(|n| n == &contribution.name) {
            names.push(contribution.name.clone());
        }
    }
    names
}

/// Expenses belonging to one category
///
/// Used to isolate Worker Payment amounts for display; the settlement pool
/// always includes every category.
pub fn filter_by_category(expenses: &[Expense], category: Category) -> Vec<&Expense> {
    expenses.iter().filter(|e| e.category == category).collect()
}

/// Total contributions minus total expenses
pub fn available_balance(contributions: &[Contribution], expenses: &[Expense]) -> Money {
    total(contributions) - total(expenses)
}
