//! Theme CLI commands

use clap::Subcommand;

use super::CommandContext;
use crate::audit::{AuditEntry, EntityType};
use crate::error::BudgetResult;
use crate::models::Theme;
use crate::services::{current_theme, set_theme, toggle_theme};

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Choose a theme
    Set {
        /// `light` or `dark`
        theme: Theme,
    },
}

/// Handle a theme command
pub fn handle_theme_command(ctx: &CommandContext<'_>, cmd: ThemeCommands) -> BudgetResult<()> {
    match cmd {
        ThemeCommands::Show => {
            println!("{}", current_theme(ctx.store)?);
        }
        ThemeCommands::Toggle => {
            let before = current_theme(ctx.store)?;
            let after = toggle_theme(ctx.store)?;
            ctx.audit
                .log(&AuditEntry::update(EntityType::Theme, &before, &after))?;
            println!("Theme: {}", after);
        }
        ThemeCommands::Set { theme } => {
            let before = current_theme(ctx.store)?;
            set_theme(ctx.store, theme)?;
            ctx.audit
                .log(&AuditEntry::update(EntityType::Theme, &before, &theme))?;
            println!("Theme: {}", theme);
        }
    }

    Ok(())
}
