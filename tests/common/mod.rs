#![allow(dead_code)]

use chrono::NaiveDate;
use expense_core::Expense;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// The three-record March 2024 snapshot used across suites.
pub fn march_snapshot() -> Vec<Expense> {
    vec![
        Expense::new(50_000.0, "Pho", "Food & Dining", date(2024, 3, 1)),
        Expense::new(30_000.0, "Coffee", "Food & Dining", date(2024, 3, 2)),
        Expense::new(20_000.0, "Bus", "Transportation", date(2024, 3, 3)),
    ]
}
