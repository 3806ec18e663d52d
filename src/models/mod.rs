//! Core data models for BudgetBook
//!
//! This module contains the data structures of the budgeting domain: month
//! identifiers, expense records, money amounts and the theme preference.

pub mod expense;
pub mod money;
pub mod month;
pub mod theme;

pub use expense::{ExpenseDraft, ExpenseRecord, SortMethod, StoredExpense, MAX_DAY};
pub use money::{Money, MoneyParseError};
pub use month::{MonthId, MonthParseError};
pub use theme::Theme;
