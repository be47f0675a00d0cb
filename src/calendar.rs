//! Month-grid view over an expense snapshot.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    aggregation,
    model::Expense,
    time::{Clock, SystemClock},
};

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - chrono::Duration::days(i64::from(date.day0())),
        }
    }

    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Previous month; January rolls back to December of the prior year.
    pub fn pred(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Next month; December rolls over to January of the following year.
    pub fn succ(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let month = self.month();
        self.first
            .iter_days()
            .take_while(|day| day.month() == month)
            .collect()
    }

    pub fn day_count(&self) -> usize {
        let month = self.month();
        self.first
            .iter_days()
            .take_while(|day| day.month() == month)
            .count()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

/// Expenses and subtotal for a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
    pub day_total: f64,
}

impl DayBucket {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// First `limit` expenses, for compact day tiles.
    pub fn preview(&self, limit: usize) -> &[Expense] {
        &self.expenses[..self.expenses.len().min(limit)]
    }

    /// Number of expenses left out of [`DayBucket::preview`].
    pub fn hidden_count(&self, limit: usize) -> usize {
        self.expenses.len().saturating_sub(limit)
    }
}

/// Groups a snapshot by day within a navigable month.
///
/// The month cursor is the only state and changes only through
/// [`previous_month`](Self::previous_month), [`next_month`](Self::next_month)
/// and [`reset_to_today`](Self::reset_to_today).
#[derive(Debug, Clone)]
pub struct CalendarGrouper<C: Clock = SystemClock> {
    current_month: MonthCursor,
    clock: C,
}

impl CalendarGrouper<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CalendarGrouper<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CalendarGrouper<C> {
    /// Starts at the clock's current month.
    pub fn with_clock(clock: C) -> Self {
        let current_month = MonthCursor::containing(clock.today());
        Self {
            current_month,
            clock,
        }
    }

    /// Starts at an explicit month.
    pub fn starting_at(month: MonthCursor, clock: C) -> Self {
        Self {
            current_month: month,
            clock,
        }
    }

    pub fn current_month(&self) -> MonthCursor {
        self.current_month
    }

    pub fn month_label(&self) -> String {
        self.current_month.to_string()
    }

    pub fn previous_month(&mut self) {
        self.current_month = self.current_month.pred();
        tracing::debug!(month = %self.current_month, "calendar moved to previous month");
    }

    pub fn next_month(&mut self) {
        self.current_month = self.current_month.succ();
        tracing::debug!(month = %self.current_month, "calendar moved to next month");
    }

    pub fn reset_to_today(&mut self) {
        self.current_month = MonthCursor::containing(self.clock.today());
        tracing::debug!(month = %self.current_month, "calendar reset to current month");
    }

    pub fn days_in_current_month(&self) -> Vec<NaiveDate> {
        self.current_month.days()
    }

    pub fn is_today(&self, day: NaiveDate) -> bool {
        self.clock.today() == day
    }

    pub fn bucket_for(&self, day: NaiveDate, expenses: &[Expense]) -> DayBucket {
        let matching: Vec<Expense> = expenses
            .iter()
            .filter(|expense| expense.is_on(day))
            .cloned()
            .collect();
        let day_total = aggregation::total(&matching);
        DayBucket {
            date: day,
            expenses: matching,
            day_total,
        }
    }

    /// One bucket per day of the current month, empty days included.
    pub fn month_buckets(&self, expenses: &[Expense]) -> Vec<DayBucket> {
        self.days_in_current_month()
            .into_iter()
            .map(|day| self.bucket_for(day, expenses))
            .collect()
    }

    pub fn monthly_total(&self, expenses: &[Expense]) -> f64 {
        aggregation::total_for_month(expenses, self.current_month.first_day())
    }

    pub fn monthly_transaction_count(&self, expenses: &[Expense]) -> usize {
        aggregation::count_for_month(expenses, self.current_month.first_day())
    }

    pub fn average_per_day(&self, expenses: &[Expense]) -> f64 {
        // a month always has at least 28 days
        self.monthly_total(expenses) / self.current_month.day_count() as f64
    }
}
