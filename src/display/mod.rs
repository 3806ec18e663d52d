//! Display formatting for terminal output

pub mod expense;
pub mod month;

pub use expense::{format_expense_register, format_ledger_summary};
pub use month::format_month_list;

/// Truncate a string to `max_len` characters, marking the cut with `…`
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
