//! Persistence seam for the expense table plus local backends.

pub mod json_backend;
pub mod memory;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{ExpenseError, Result},
    model::{Expense, ExpenseInsert},
};

pub use json_backend::JsonExpenseStore;
pub use memory::MemoryExpenseStore;

/// Wire format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Abstraction over backends holding the expense table.
pub trait ExpenseStore: Send + Sync {
    /// Full snapshot, newest date first.
    fn fetch_all(&self) -> Result<Vec<Expense>>;

    /// Stores a new record and returns it with its assigned id.
    fn insert(&mut self, expense: ExpenseInsert) -> Result<Expense>;
}

/// Row shape of the remote `expenses` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExpenseRow {
    pub fn from_insert(insert: ExpenseInsert, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: insert.amount,
            description: insert.description,
            category: insert.category,
            date: insert.date.format(DATE_FORMAT).to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn to_expense(&self) -> Result<Expense> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|err| {
            ExpenseError::InvalidInput(format!(
                "expense {} has invalid date `{}`: {}",
                self.id, self.date, err
            ))
        })?;
        Ok(Expense {
            id: self.id,
            amount: self.amount,
            description: self.description.clone(),
            category: self.category.clone(),
            date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            description: expense.description.clone(),
            category: expense.category.clone(),
            date: expense.date.format(DATE_FORMAT).to_string(),
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

/// Orders a snapshot newest date first; records sharing a date keep their order.
pub(crate) fn newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}
