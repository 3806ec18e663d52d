//! Audit history command

use super::CommandContext;
use crate::error::BudgetResult;

/// Print the most recent audit entries
pub fn handle_history_command(ctx: &CommandContext<'_>, limit: usize) -> BudgetResult<()> {
    let entries = ctx.audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.summary());
    }

    Ok(())
}
