//! BudgetBook - month-by-month expense book
//!
//! A user picks months, records dated expenses against each of them, and
//! sees the running total and what is left of the month's wallet.
//!
//! # Architecture
//!
//! - `models`: month identifiers, expense records, money and theme
//! - `storage`: the key-value store trait with memory and file backends
//! - `services`: the month registry and per-month ledgers
//! - `prompt`: confirmation/notification capability injected into services
//! - `audit`: append-only change log
//! - `config`: paths, settings and logging setup
//! - `display` / `cli`: terminal front end
//!
//! # Example
//!
//! ```
//! use budgetbook::models::MonthId;
//! use budgetbook::prompt::AssumeYes;
//! use budgetbook::services::{format_currency, MonthRegistry};
//! use budgetbook::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut registry = MonthRegistry::load(&store)?;
//! let march = MonthId::parse("2024-03")?;
//! registry.add_month(march, &AssumeYes)?;
//!
//! let mut ledger = registry.open_ledger(&march)?;
//! ledger.add_record("Rent", "10000", "1")?;
//! ledger.set_wallet_balance("20000")?;
//! assert_eq!(format_currency(ledger.remaining()), "10,000.00");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod prompt;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
