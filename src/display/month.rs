//! Month list formatting

use crate::models::MonthId;

/// Format the selected months, one per line
pub fn format_month_list(months: &[MonthId]) -> String {
    if months.is_empty() {
        return "No months selected. Add one with `budgetbook month add YYYY-MM`.\n".to_string();
    }

    let mut output = String::new();
    for month in months {
        output.push_str(&format!("{}  {}\n", month, month.label()));
    }
    output
}
