//! Business logic layer
//!
//! The month registry and per-month ledgers, both built on an injected
//! key-value store.

pub mod ledger;
pub mod registry;
pub mod theme;

pub use ledger::{format_currency, EditSession, Ledger};
pub use registry::MonthRegistry;
pub use theme::{current_theme, set_theme, toggle_theme};
