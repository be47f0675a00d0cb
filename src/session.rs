//! Facade pairing a store with the snapshot currently on screen.

use crate::{
    model::{Expense, NewExpense},
    storage::ExpenseStore,
};

pub const LOAD_FAILED: &str = "Failed to load expenses";
pub const ADD_FAILED: &str = "Failed to add expense";

/// Holds the latest snapshot and a dismissible error message.
pub struct ExpenseSession<S: ExpenseStore> {
    store: S,
    expenses: Vec<Expense>,
    error: Option<String>,
}

impl<S: ExpenseStore> ExpenseSession<S> {
    /// Creates a session with an empty snapshot; call [`refresh`](Self::refresh) to load.
    pub fn new(store: S) -> Self {
        Self {
            store,
            expenses: Vec::new(),
            error: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Replaces the snapshot. On failure the previous snapshot is kept.
    pub fn refresh(&mut self) -> bool {
        match self.store.fetch_all() {
            Ok(expenses) => {
                tracing::debug!(count = expenses.len(), "expense snapshot refreshed");
                self.expenses = expenses;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching expenses");
                self.error = Some(LOAD_FAILED.into());
                false
            }
        }
    }

    /// Submits a draft. Incomplete drafts are ignored; returns whether a record was stored.
    pub fn add(&mut self, draft: &NewExpense) -> bool {
        let insert = match draft.to_insert() {
            Ok(insert) => insert,
            Err(err) => {
                tracing::debug!(error = %err, "draft not submitted");
                return false;
            }
        };
        match self.store.insert(insert) {
            Ok(stored) => {
                tracing::info!(id = %stored.id, amount = stored.amount, "expense added");
                self.refresh();
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "error adding expense");
                self.error = Some(ADD_FAILED.into());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        errors::{ExpenseError, Result},
        model::ExpenseInsert,
        storage::MemoryExpenseStore,
    };

    struct BrokenStore;

    impl ExpenseStore for BrokenStore {
        fn fetch_all(&self) -> Result<Vec<Expense>> {
            Err(ExpenseError::Storage("offline".into()))
        }

        fn insert(&mut self, _expense: ExpenseInsert) -> Result<Expense> {
            Err(ExpenseError::Storage("offline".into()))
        }
    }

    fn draft() -> NewExpense {
        NewExpense {
            amount: "30000".into(),
            description: "Coffee".into(),
            category: "Food & Dining".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        }
    }

    #[test]
    fn add_refreshes_snapshot() {
        let mut session = ExpenseSession::new(MemoryExpenseStore::new());
        assert!(session.add(&draft()));
        assert_eq!(session.expenses().len(), 1);
        assert!(session.error().is_none());
    }

    #[test]
    fn incomplete_draft_is_not_stored() {
        let mut session = ExpenseSession::new(MemoryExpenseStore::new());
        let mut incomplete = draft();
        incomplete.category.clear();
        assert!(!session.add(&incomplete));
        assert!(session.store().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn failures_surface_dismissible_messages() {
        let mut session = ExpenseSession::new(BrokenStore);
        assert!(!session.refresh());
        assert_eq!(session.error(), Some(LOAD_FAILED));
        session.dismiss_error();
        assert!(session.error().is_none());

        assert!(!session.add(&draft()));
        assert_eq!(session.error(), Some(ADD_FAILED));
    }
}
