//! Expense register and ledger summary formatting

use crate::models::{ExpenseRecord, Money};

use super::truncate;

/// Format expense rows as a register
///
/// Rows are `(stored index, record)` pairs; the index is shown 1-based so it
/// can be passed straight back to `expense edit` / `expense delete`.
pub fn format_expense_register(rows: &[(usize, &ExpenseRecord)], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>4}  {:>3}  {:30} {:>16}\n", "#", "Day", "Expense", "Amount"));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for (index, record) in rows {
        output.push_str(&format!(
            "{:>4}  {:>3}  {:30} {:>16}\n",
            index + 1,
            record.day(),
            truncate(record.description(), 30),
            record.amount().format_with_symbol(symbol)
        ));
    }

    output
}

/// Format the totals block shown under a month's expenses
pub fn format_ledger_summary(total_spent: Money, wallet: Money, remaining: Money, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly expense: {:>16}\n", total_spent.format_with_symbol(symbol)));
    output.push_str(&format!("Wallet balance:  {:>16}\n", wallet.format_with_symbol(symbol)));
    output.push_str(&format!("Remaining:       {:>16}", remaining.format_with_symbol(symbol)));
    if remaining.is_negative() {
        output.push_str("  (over budget)");
    }
    output.push('\n');
    output
}
