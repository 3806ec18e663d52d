//! Audit logging for BudgetBook
//!
//! Records month, expense, wallet and theme changes with before/after
//! values in an append-only JSONL file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
