//! Domain models for tracked income and expense entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::common::*;
use crate::errors::TrackerError;

pub const INCOME_ICON: &str = "trending-up";

/// Direction of a record. Amounts are stored unsigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(TrackerError::InvalidInput(format!(
                "unknown transaction kind `{other}`"
            ))),
        }
    }
}

/// One income or expense entry. Records are never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TransactionRecord {
    /// Builds a record with a fresh id. Expense records default to
    /// [`Category::Other`]; income records never keep a category.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: Option<Category>,
    ) -> Self {
        let category = match kind {
            TransactionKind::Income => None,
            TransactionKind::Expense => Some(category.unwrap_or_default()),
        };
        let icon = match (kind, category) {
            (TransactionKind::Income, _) => INCOME_ICON,
            (TransactionKind::Expense, Some(category)) => category.icon(),
            (TransactionKind::Expense, None) => Category::Other.icon(),
        };
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            category,
            icon: Some(icon.to_string()),
        }
    }

    pub fn income(description: impl Into<String>, amount: f64) -> Self {
        Self::new(description, amount, TransactionKind::Income, None)
    }

    pub fn expense(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self::new(description, amount, TransactionKind::Expense, Some(category))
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The category used for filtering; `None` for income.
    pub fn effective_category(&self) -> Option<Category> {
        match self.kind {
            TransactionKind::Income => None,
            TransactionKind::Expense => Some(self.category_or_default()),
        }
    }

    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Amount with the direction applied: positive income, negative expense.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for TransactionRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for TransactionRecord {
    fn display_label(&self) -> String {
        match self.effective_category() {
            Some(category) => format!("{} [{} • {}]", self.description, self.kind, category),
            None => format!("{} [{}]", self.description, self.kind),
        }
    }
}

/// Raw add-transaction form fields as typed by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TransactionInput {
    pub description: String,
    pub amount_text: String,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl TransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount_text: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount_text: amount_text.into(),
            kind,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}
