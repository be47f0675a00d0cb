#![doc(test(attr(deny(warnings))))]

//! Expense Core turns a snapshot of recorded expenses into the figures a
//! personal expense tracker shows: totals, category breakdowns, and a
//! navigable month grid of daily spending.

pub mod aggregation;
pub mod calendar;
pub mod config;
pub mod currency;
pub mod errors;
pub mod filter;
pub mod model;
pub mod session;
pub mod storage;
pub mod taxonomy;
pub mod time;
pub mod utils;

pub use aggregation::{CategoryBreakdown, ExpenseSummary, NO_CATEGORY};
pub use calendar::{CalendarGrouper, DayBucket, MonthCursor};
pub use currency::{format_amount, parse_amount, CurrencyFormat};
pub use errors::{ExpenseError, Result};
pub use filter::{CategoryFilter, ExpenseFilter};
pub use model::{Expense, ExpenseInsert, NewExpense};
pub use session::ExpenseSession;
pub use storage::{ExpenseStore, JsonExpenseStore, MemoryExpenseStore};
pub use taxonomy::{Category, CategoryStyle};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(build = %build.short(), "Expense Core tracing initialized.");
    });
}
