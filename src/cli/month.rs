//! Month CLI commands

use clap::Subcommand;

use super::{prompt_for, CommandContext};
use crate::audit::{AuditEntry, EntityType};
use crate::display::format_month_list;
use crate::error::BudgetResult;
use crate::models::MonthId;
use crate::services::MonthRegistry;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Add a month (YYYY-MM) to the list
    Add {
        /// Month to add, e.g. 2024-03
        month: MonthId,
    },
    /// List selected months
    List,
    /// Delete a month together with its expenses and wallet
    Delete {
        /// Month to delete
        month: MonthId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a month command
pub fn handle_month_command(ctx: &CommandContext<'_>, cmd: MonthCommands) -> BudgetResult<()> {
    let mut registry = MonthRegistry::load(ctx.store)?;

    match cmd {
        MonthCommands::Add { month } => {
            registry.add_month(month, prompt_for(false).as_ref())?;
            ctx.audit.log(&AuditEntry::create(EntityType::Month, &month).in_month(month))?;
            println!("Added {} ({})", month, month.label());
        }

        MonthCommands::List => {
            print!("{}", format_month_list(registry.list_months()));
        }

        MonthCommands::Delete { month, force } => {
            if registry.delete_month(&month, prompt_for(force).as_ref())? {
                ctx.audit.log(&AuditEntry::delete(EntityType::Month, &month).in_month(month))?;
                println!("Deleted {} and its expenses", month);
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}
