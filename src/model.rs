//! Expense records and the draft captured by the input form.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    currency::leading_float,
    errors::{ExpenseError, Result},
    taxonomy::Category,
};

/// A recorded spending transaction, as fetched from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category: category.into(),
            date,
            created_at: None,
            updated_at: None,
        }
    }

    /// Taxonomy entry for this record, if the label is known.
    pub fn known_category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }

    pub fn is_in_month_of(&self, anchor: NaiveDate) -> bool {
        self.date.year() == anchor.year() && self.date.month() == anchor.month()
    }
}

/// Validated payload handed to [`crate::storage::ExpenseStore::insert`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseInsert {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// Form draft; `amount` stays unparsed until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: String::new(),
            date: today,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.amount.is_empty() && !self.description.is_empty() && !self.category.is_empty()
    }

    pub fn to_insert(&self) -> Result<ExpenseInsert> {
        if !self.is_complete() {
            return Err(ExpenseError::InvalidInput(
                "amount, description and category are required".into(),
            ));
        }
        let amount = leading_float(self.amount.trim())
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| {
                ExpenseError::InvalidInput(format!("`{}` is not a valid amount", self.amount))
            })?;
        if amount < 0.0 {
            return Err(ExpenseError::InvalidInput(format!(
                "amount must not be negative: {}",
                amount
            )));
        }
        Ok(ExpenseInsert {
            amount,
            description: self.description.clone(),
            category: self.category.clone(),
            date: self.date,
        })
    }
}
