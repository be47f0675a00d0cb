//! Search and category filtering for the expense list.

use crate::model::Expense;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` selects every category; anything else is an exact label.
    pub fn from_selection(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    fn accepts(&self, label: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == label,
        }
    }
}

/// List criteria: a case-insensitive description search plus a category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let needle = self.search.to_lowercase();
        expense.description.to_lowercase().contains(&needle)
            && self.category.accepts(&expense.category)
    }

    /// Matching expenses in snapshot order.
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .collect()
    }
}
