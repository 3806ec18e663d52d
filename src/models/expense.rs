//! Expense line-items
//!
//! An `ExpenseRecord` is one dated spend inside a month's ledger. Records are
//! stored as `{"expense": ..., "amount": ..., "date": ...}` objects; see
//! [`StoredExpense`] for the on-store shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Highest day number accepted for a record
pub const MAX_DAY: u32 = 31;

/// A single expense line-item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredExpense", into = "StoredExpense")]
pub struct ExpenseRecord {
    description: String,
    amount: Money,
    day: u32,
}

impl ExpenseRecord {
    /// Create a validated record
    pub fn new(description: impl Into<String>, amount: Money, day: u32) -> BudgetResult<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(BudgetError::InvalidInput(
                "Description cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(BudgetError::InvalidInput(format!(
                "Amount must be greater than zero, got {}",
                amount
            )));
        }
        if amount.exceeds_max() {
            return Err(BudgetError::InvalidInput(format!(
                "Amount cannot exceed {}, got {}",
                Money::MAX,
                amount
            )));
        }
        if !(1..=MAX_DAY).contains(&day) {
            return Err(BudgetError::InvalidInput(format!(
                "Day must be between 1 and {}, got {}",
                MAX_DAY, day
            )));
        }

        Ok(Self {
            description,
            amount,
            day,
        })
    }

    /// Parse and validate raw form fields
    pub fn from_input(description: &str, amount: &str, day: &str) -> BudgetResult<Self> {
        ExpenseDraft::new(description, amount, day).parse()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Raw text fields of an expense form
///
/// This is the pending-edit buffer: `begin_edit` fills it from an existing
/// record and callers overwrite whichever fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub day: String,
}

impl ExpenseDraft {
    pub fn new(description: &str, amount: &str, day: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
            day: day.to_string(),
        }
    }

    /// Validate the fields and build a record
    pub fn parse(&self) -> BudgetResult<ExpenseRecord> {
        if self.description.trim().is_empty() {
            return Err(BudgetError::InvalidInput(
                "Description cannot be empty".into(),
            ));
        }
        if self.amount.trim().is_empty() {
            return Err(BudgetError::InvalidInput("Amount is required".into()));
        }
        if self.day.trim().is_empty() {
            return Err(BudgetError::InvalidInput("Day is required".into()));
        }

        let amount =
            Money::parse(&self.amount).map_err(|e| BudgetError::InvalidInput(e.to_string()))?;
        let day: u32 = self.day.trim().parse().map_err(|_| {
            BudgetError::InvalidInput(format!("Day must be a number, got {:?}", self.day.trim()))
        })?;

        ExpenseRecord::new(self.description.as_str(), amount, day)
    }
}

impl From<&ExpenseRecord> for ExpenseDraft {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount.to_decimal_string(),
            day: record.day.to_string(),
        }
    }
}

/// Orderings offered for presenting a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    /// Ascending by day of month
    ByDate,
    /// Largest amount first
    ByAmountDescending,
}

impl SortMethod {
    /// Order two records under this method; ties compare equal
    pub fn compare(&self, a: &ExpenseRecord, b: &ExpenseRecord) -> std::cmp::Ordering {
        match self {
            SortMethod::ByDate => a.day.cmp(&b.day),
            SortMethod::ByAmountDescending => b.amount.cmp(&a.amount),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMethod::ByDate => write!(f, "date"),
            SortMethod::ByAmountDescending => write!(f, "amount"),
        }
    }
}

impl FromStr for SortMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "day" | "by-date" => Ok(SortMethod::ByDate),
            "amount" | "by-amount" => Ok(SortMethod::ByAmountDescending),
            other => Err(format!(
                "unknown sort method '{}', expected 'date' or 'amount'",
                other
            )),
        }
    }
}

/// On-store representation of a record
///
/// `amount` is written as a JSON number and `date` as a string; both are
/// accepted as either a number or a numeric string when read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredExpense {
    pub expense: String,
    pub amount: NumberOrText,
    pub date: NumberOrText,
}

/// A JSON value that may be a number or a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    fn as_text(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        }
    }
}

impl TryFrom<StoredExpense> for ExpenseRecord {
    type Error = BudgetError;

    fn try_from(stored: StoredExpense) -> Result<Self, Self::Error> {
        ExpenseDraft {
            description: stored.expense,
            amount: stored.amount.as_text(),
            day: stored.date.as_text(),
        }
        .parse()
    }
}

impl From<ExpenseRecord> for StoredExpense {
    fn from(record: ExpenseRecord) -> Self {
        let amount = if record.amount.cents_part() == 0 {
            serde_json::Number::from(record.amount.units())
        } else {
            serde_json::Number::from_f64(record.amount.cents() as f64 / 100.0)
                .unwrap_or_else(|| serde_json::Number::from(record.amount.units()))
        };

        Self {
            expense: record.description,
            amount: NumberOrText::Number(amount),
            date: NumberOrText::Text(record.day.to_string()),
        }
    }
}
