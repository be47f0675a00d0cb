//! Statistics derived from an expense snapshot.
//!
//! Every function is a pure function of its input slice; nothing is cached
//! between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{model::Expense, taxonomy::Category};

/// Sentinel reported when no category has positive spend.
pub const NO_CATEGORY: &str = "None";

/// Spend for one taxonomy entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total_amount: f64,
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub this_month: f64,
    pub transaction_count: usize,
    pub average: f64,
    pub highest: f64,
    pub top_category: Option<Category>,
}

impl ExpenseSummary {
    pub fn top_category_label(&self) -> &'static str {
        self.top_category.map(Category::label).unwrap_or(NO_CATEGORY)
    }
}

pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Sum of amounts whose category equals `label` exactly.
pub fn total_for_category(expenses: &[Expense], label: &str) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.category == label)
        .map(|expense| expense.amount)
        .sum()
}

/// One entry per category with nonzero spend, in taxonomy order.
pub fn breakdown_by_category(expenses: &[Expense]) -> Vec<CategoryBreakdown> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryBreakdown {
            category,
            total_amount: total_for_category(expenses, category.label()),
        })
        .filter(|entry| entry.total_amount > 0.0)
        .collect()
}

pub fn average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }
    total(expenses) / expenses.len() as f64
}

pub fn maximum(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|expense| expense.amount)
        .fold(None, |best: Option<f64>, amount| match best {
            Some(current) if current >= amount => Some(current),
            _ => Some(amount),
        })
        .unwrap_or(0.0)
}

/// Category with the largest total amount. Ties go to the earliest entry in
/// taxonomy order. Ranked by amount, not by number of records.
pub fn top_category(expenses: &[Expense]) -> Option<Category> {
    let mut best: Option<CategoryBreakdown> = None;
    for entry in breakdown_by_category(expenses) {
        match best {
            Some(current) if current.total_amount >= entry.total_amount => {}
            _ => best = Some(entry),
        }
    }
    best.map(|entry| entry.category)
}

/// Label form of [`top_category`], reporting [`NO_CATEGORY`] when nothing was spent.
pub fn most_frequent_category_by_amount(expenses: &[Expense]) -> &'static str {
    top_category(expenses)
        .map(Category::label)
        .unwrap_or(NO_CATEGORY)
}

/// Sum of amounts dated in the same calendar month and year as `anchor`.
pub fn total_for_month(expenses: &[Expense], anchor: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.is_in_month_of(anchor))
        .map(|expense| expense.amount)
        .sum()
}

pub fn count_for_month(expenses: &[Expense], anchor: NaiveDate) -> usize {
    expenses
        .iter()
        .filter(|expense| expense.is_in_month_of(anchor))
        .count()
}

pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    ExpenseSummary {
        total: total(expenses),
        this_month: total_for_month(expenses, today),
        transaction_count: expenses.len(),
        average: average(expenses),
        highest: maximum(expenses),
        top_category: top_category(expenses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(50_000.0, "Pho", "Food & Dining", date(2024, 3, 1)),
            Expense::new(30_000.0, "Coffee", "Food & Dining", date(2024, 3, 2)),
            Expense::new(20_000.0, "Bus", "Transportation", date(2024, 3, 3)),
        ]
    }

    #[test]
    fn empty_snapshot_yields_zeroes() {
        assert_eq!(total(&[]), 0.0);
        assert_eq!(average(&[]), 0.0);
        assert_eq!(maximum(&[]), 0.0);
        assert!(breakdown_by_category(&[]).is_empty());
        assert_eq!(most_frequent_category_by_amount(&[]), "None");
    }

    #[test]
    fn sample_statistics() {
        let expenses = sample();
        assert_eq!(total(&expenses), 100_000.0);
        assert_eq!(maximum(&expenses), 50_000.0);
        assert!((average(&expenses) - 33_333.333_333).abs() < 1e-3);
        assert_eq!(
            breakdown_by_category(&expenses),
            vec![
                CategoryBreakdown {
                    category: Category::FoodAndDining,
                    total_amount: 80_000.0,
                },
                CategoryBreakdown {
                    category: Category::Transportation,
                    total_amount: 20_000.0,
                },
            ]
        );
        assert_eq!(most_frequent_category_by_amount(&expenses), "Food & Dining");
    }

    #[test]
    fn category_match_is_exact() {
        let expenses = vec![
            Expense::new(10.0, "a", "food & dining", date(2024, 1, 1)),
            Expense::new(5.0, "b", "Food & Dining", date(2024, 1, 1)),
        ];
        assert_eq!(total_for_category(&expenses, "Food & Dining"), 5.0);
    }

    #[test]
    fn unknown_categories_only_count_towards_total() {
        let mut expenses = sample();
        expenses.push(Expense::new(7_000.0, "Gift", "Gifts", date(2024, 3, 4)));
        let breakdown_sum: f64 = breakdown_by_category(&expenses)
            .iter()
            .map(|entry| entry.total_amount)
            .sum();
        assert_eq!(breakdown_sum, 100_000.0);
        assert_eq!(total(&expenses), 107_000.0);
    }

    #[test]
    fn ties_prefer_taxonomy_order() {
        let expenses = vec![
            Expense::new(40.0, "Flight", "Travel", date(2024, 5, 1)),
            Expense::new(40.0, "Shoes", "Shopping", date(2024, 5, 2)),
        ];
        assert_eq!(top_category(&expenses), Some(Category::Shopping));
    }

    #[test]
    fn ranks_by_amount_not_count() {
        let expenses = vec![
            Expense::new(10.0, "Snack", "Food & Dining", date(2024, 5, 1)),
            Expense::new(10.0, "Snack", "Food & Dining", date(2024, 5, 2)),
            Expense::new(500.0, "Hotel", "Travel", date(2024, 5, 3)),
        ];
        assert_eq!(most_frequent_category_by_amount(&expenses), "Travel");
    }

    #[test]
    fn zero_amount_records_do_not_name_a_category() {
        let expenses = vec![Expense::new(0.0, "Free", "Other", date(2024, 5, 1))];
        assert_eq!(most_frequent_category_by_amount(&expenses), NO_CATEGORY);
    }

    #[test]
    fn month_totals_respect_year() {
        let mut expenses = sample();
        expenses.push(Expense::new(9_000.0, "Old", "Other", date(2023, 3, 15)));
        assert_eq!(total_for_month(&expenses, date(2024, 3, 20)), 100_000.0);
        assert_eq!(count_for_month(&expenses, date(2023, 3, 1)), 1);
        assert_eq!(total_for_month(&expenses, date(2024, 4, 1)), 0.0);
    }

    #[test]
    fn summary_collects_card_figures() {
        let summary = summarize(&sample(), date(2024, 3, 10));
        assert_eq!(summary.total, 100_000.0);
        assert_eq!(summary.this_month, 100_000.0);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.highest, 50_000.0);
        assert_eq!(summary.top_category_label(), "Food & Dining");
    }
}
