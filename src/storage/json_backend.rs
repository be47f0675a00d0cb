use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::Result,
    model::{Expense, ExpenseInsert},
    utils::persistence::{app_data_dir, load_json, save_json},
};

use super::{newest_first, ExpenseRow, ExpenseStore};

const DEFAULT_FILE_NAME: &str = "expenses.json";

/// Stores the expense table as a JSON array of rows in a single file.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `expenses.json` inside the application data directory.
    pub fn new_default() -> Self {
        Self::new(app_data_dir().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<ExpenseRow>> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn fetch_all(&self) -> Result<Vec<Expense>> {
        let rows = self.read_rows()?;
        let mut expenses = rows
            .iter()
            .map(ExpenseRow::to_expense)
            .collect::<Result<Vec<_>>>()?;
        newest_first(&mut expenses);
        tracing::debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "loaded expenses"
        );
        Ok(expenses)
    }

    fn insert(&mut self, expense: ExpenseInsert) -> Result<Expense> {
        let mut rows = self.read_rows()?;
        let row = ExpenseRow::from_insert(expense, Uuid::new_v4(), Utc::now());
        let stored = row.to_expense()?;
        rows.push(row);
        save_json(&rows, &self.path)?;
        tracing::debug!(path = %self.path.display(), id = %stored.id, "inserted expense");
        Ok(stored)
    }
}
