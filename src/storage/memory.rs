use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::Result,
    model::{Expense, ExpenseInsert},
};

use super::{newest_first, ExpenseRow, ExpenseStore};

/// Volatile store, useful for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryExpenseStore {
    expenses: Vec<Expense>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn fetch_all(&self) -> Result<Vec<Expense>> {
        let mut snapshot = self.expenses.clone();
        newest_first(&mut snapshot);
        Ok(snapshot)
    }

    fn insert(&mut self, expense: ExpenseInsert) -> Result<Expense> {
        let stored = ExpenseRow::from_insert(expense, Uuid::new_v4(), Utc::now()).to_expense()?;
        self.expenses.push(stored.clone());
        Ok(stored)
    }
}
