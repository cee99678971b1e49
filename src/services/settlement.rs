//! Settlement calculation
//!
//! Each contributor settles against the common pool: their total
//! contribution minus an equal share of all expenses. There is no
//! transfer-count minimization between individuals.
//!
//! The equal share is held unrounded through the division; the only rounding
//! happens at the final per-person balance, to the nearest cent.

use std::collections::HashMap;

use crate::models::{Contribution, Expense, Money};

use super::aggregate::{contributor_names, group_sum_by_person, total};

/// How a settlement balance should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Balance is negative: this person owes the pool
    Owes(Money),
    /// Balance is positive: this person should receive from the pool
    Receives(Money),
    /// Balance is exactly zero
    Settled,
}

/// Settlement position for one contributor
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementEntry {
    /// Contributor name
    pub name: String,
    /// Total contributed by this person
    pub contributed: Money,
    /// Contributed minus equal share, rounded to cents
    pub balance: Money,
}

impl SettlementEntry {
    /// Classify the balance for display
    pub fn verdict(&self) -> Verdict {
        if self.balance.is_negative() {
            Verdict::Owes(self.balance.abs())
        } else if self.balance.is_positive() {
            Verdict::Receives(self.balance)
        } else {
            Verdict::Settled
        }
    }
}

/// Full settlement result for one computation pass
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReport {
    /// Total shared expenses (all categories, Worker Payment included)
    pub total_expenses: Money,
    /// Equal share rounded to cents, for display only
    pub equal_share: Money,
    /// One entry per distinct contributor, in order of first appearance
    pub entries: Vec<SettlementEntry>,
}

impl SettlementReport {
    /// Compute settlements from raw record snapshots
    pub fn compute(expenses: &[Expense], contributions: &[Contribution]) -> Self {
        let names = contributor_names(contributions);
        let totals: HashMap<String, Money> = group_sum_by_person(contributions)
            .into_iter()
            .collect();

        Self::from_parts(total(expenses), &names, &totals)
    }

    /// Compute settlements from pre-aggregated inputs
    ///
    /// `names` fixes the roster and its order; a name missing from `totals`
    /// counts as having contributed zero.
    pub fn from_parts(
        total_expenses: Money,
        names: &[String],
        totals: &HashMap<String, Money>,
    ) -> Self {
        // Guarded division: no contributors means a zero share and no entries
        let share_cents = if names.is_empty() {
            0.0
        } else {
            total_expenses.cents() as f64 / names.len() as f64
        };

        let entries = names
            .iter()
            .map(|name| {
                let contributed = totals.get(name).copied().unwrap_or_default();
                // The single rounding point: balance to the nearest cent
                let balance =
                    Money::from_cents((contributed.cents() as f64 - share_cents).round() as i64);
                SettlementEntry {
                    name: name.clone(),
                    contributed,
                    balance,
                }
            })
            .collect();

        Self {
            total_expenses,
            equal_share: Money::from_cents(share_cents.round() as i64),
            entries,
        }
    }

    /// Whether anyone is part of the settlement
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn expense(cents: i64) -> Expense {
        Expense::new(date(), Category::Market, "", Money::from_cents(cents))
    }

    fn contribution(name: &str, cents: i64) -> Contribution {
        Contribution::new(name, Money::from_cents(cents), date())
    }

    #[test]
    fn test_alice_and_bob_receive() {
        // contributions [{Alice,100},{Bob,50}], expenses 90 -> share 45,
        // Alice +55, Bob +5
        let contributions = vec![contribution("Alice", 10000), contribution("Bob", 5000)];
        let expenses = vec![expense(9000)];

        let report = SettlementReport::compute(&expenses, &contributions);
        assert_eq!(report.equal_share.cents(), 4500);
        assert_eq!(report.entries.len(), 2);

        assert_eq!(report.entries[0].name, "Alice");
        assert_eq!(report.entries[0].balance.cents(), 5500);
        assert_eq!(
            report.entries[0].verdict(),
            Verdict::Receives(Money::from_cents(5500))
        );

        assert_eq!(report.entries[1].name, "Bob");
        assert_eq!(report.entries[1].balance.cents(), 500);
        assert_eq!(
            report.entries[1].verdict(),
            Verdict::Receives(Money::from_cents(500))
        );
    }

    #[test]
    fn test_alice_and_bob_owe() {
        // contributions [{Alice,50},{Bob,50}], expenses 150 -> share 75,
        // both owe 25
        let contributions = vec![contribution("Alice", 5000), contribution("Bob", 5000)];
        let expenses = vec![expense(15000)];

        let report = SettlementReport::compute(&expenses, &contributions);
        assert_eq!(report.equal_share.cents(), 7500);

        for entry in &report.entries {
            assert_eq!(entry.balance.cents(), -2500);
            assert_eq!(entry.verdict(), Verdict::Owes(Money::from_cents(2500)));
        }
    }

    #[test]
    fn test_no_contributors_no_entries_no_panic() {
        let expenses = vec![expense(9000)];
        let report = SettlementReport::compute(&expenses, &[]);

        assert!(report.is_empty());
        assert_eq!(report.equal_share, Money::zero());
        assert_eq!(report.total_expenses.cents(), 9000);
    }

    #[test]
    fn test_exact_settlement() {
        let contributions = vec![contribution("Alice", 5000), contribution("Bob", 5000)];
        let expenses = vec![expense(10000)];

        let report = SettlementReport::compute(&expenses, &contributions);
        for entry in &report.entries {
            assert!(entry.balance.is_zero());
            assert_eq!(entry.verdict(), Verdict::Settled);
        }
    }

    #[test]
    fn test_conservation_up_to_rounding() {
        // Balances sum to total_contributions - total_expenses, within
        // 0.01 * count(names)
        let contributions = vec![
            contribution("Alice", 10000),
            contribution("Bob", 0),
            contribution("Carol", 0),
        ];
        let expenses = vec![expense(10000)];

        let report = SettlementReport::compute(&expenses, &contributions);
        let balance_sum: i64 = report.entries.iter().map(|e| e.balance.cents()).sum();
        let expected = 10000 - 10000;
        let slack = report.entries.len() as i64;
        assert!((balance_sum - expected).abs() <= slack);
    }

    #[test]
    fn test_rounding_only_at_final_balance() {
        // Share of 100.00 across 3 people is 33.333...; each balance is
        // rounded independently at the end.
        let contributions = vec![
            contribution("Alice", 10000),
            contribution("Bob", 0),
            contribution("Carol", 0),
        ];
        let expenses = vec![expense(10000)];

        let report = SettlementReport::compute(&expenses, &contributions);
        assert_eq!(report.entries[0].balance.cents(), 6667); // 100 - 33.333...
        assert_eq!(report.entries[1].balance.cents(), -3333);
        assert_eq!(report.entries[2].balance.cents(), -3333);
    }

    #[test]
    fn test_roster_order_is_first_appearance() {
        let contributions = vec![
            contribution("Zoe", 100),
            contribution("Al", 100),
            contribution("Zoe", 100),
        ];
        let report = SettlementReport::compute(&[], &contributions);

        let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Al"]);
    }

    #[test]
    fn test_from_parts_missing_name_counts_as_zero() {
        let names = vec!["Alice".to_string(), "Ghost".to_string()];
        let totals: HashMap<String, Money> =
            [("Alice".to_string(), Money::from_cents(10000))].into();

        let report = SettlementReport::from_parts(Money::from_cents(10000), &names, &totals);
        assert_eq!(report.entries[1].contributed, Money::zero());
        assert_eq!(report.entries[1].balance.cents(), -5000);
    }
}
