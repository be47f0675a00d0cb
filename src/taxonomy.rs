//! The closed set of expense categories and their display styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expense category. Declaration order is the taxonomy order used by breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    Healthcare,
    Travel,
    Other,
}

/// Opaque styling token handed to the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStyle {
    Red,
    Blue,
    Purple,
    Green,
    Yellow,
    Pink,
    Indigo,
    Gray,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Travel,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub fn style(self) -> CategoryStyle {
        match self {
            Category::FoodAndDining => CategoryStyle::Red,
            Category::Transportation => CategoryStyle::Blue,
            Category::Shopping => CategoryStyle::Purple,
            Category::Entertainment => CategoryStyle::Green,
            Category::BillsAndUtilities => CategoryStyle::Yellow,
            Category::Healthcare => CategoryStyle::Pink,
            Category::Travel => CategoryStyle::Indigo,
            Category::Other => CategoryStyle::Gray,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CategoryStyle {
    pub fn token(self) -> &'static str {
        match self {
            CategoryStyle::Red => "red",
            CategoryStyle::Blue => "blue",
            CategoryStyle::Purple => "purple",
            CategoryStyle::Green => "green",
            CategoryStyle::Yellow => "yellow",
            CategoryStyle::Pink => "pink",
            CategoryStyle::Indigo => "indigo",
            CategoryStyle::Gray => "gray",
        }
    }
}

/// Labels in taxonomy order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    Category::ALL.into_iter().map(Category::label)
}

pub fn is_known(label: &str) -> bool {
    Category::from_label(label).is_some()
}
