//! Configuration module for BudgetBook
//!
//! - Path resolution for the store, settings and audit log
//! - User settings persistence
//! - Diagnostic logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
