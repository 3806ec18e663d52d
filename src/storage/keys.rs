//! Store key layout

use crate::models::MonthId;

/// JSON array of selected month identifiers
pub const SELECTED_MONTHS: &str = "selectedMonths";

/// `"light"` or `"dark"`
pub const THEME: &str = "theme";

/// JSON array of a month's expense records
pub fn expenses(month: &MonthId) -> String {
    format!("expenses-{}", month)
}

/// Stringified wallet balance for a month
pub fn wallet(month: &MonthId) -> String {
    format!("wallet-{}", month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_keys() {
        let month = MonthId::parse("2024-03").unwrap();
        assert_eq!(expenses(&month), "expenses-2024-03");
        assert_eq!(wallet(&month), "wallet-2024-03");
    }
}
