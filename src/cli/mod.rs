//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the registry and ledger services.

pub mod config;
pub mod expense;
pub mod history;
pub mod month;
pub mod theme;
pub mod wallet;

pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history_command;
pub use month::{handle_month_command, MonthCommands};
pub use theme::{handle_theme_command, ThemeCommands};
pub use wallet::{handle_wallet_command, WalletCommands};

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthId;
use crate::prompt::{AssumeYes, Prompt, TerminalPrompt};
use crate::services::{Ledger, MonthRegistry};
use crate::storage::KeyValueStore;

/// Everything a command handler needs
pub struct CommandContext<'a> {
    pub store: &'a dyn KeyValueStore,
    pub settings: &'a Settings,
    pub audit: &'a AuditLogger,
}

impl<'a> CommandContext<'a> {
    /// Open the ledger of a month that has been added to the registry
    pub fn open_ledger(&self, month: &MonthId) -> BudgetResult<Ledger<'a, dyn KeyValueStore + 'a>> {
        MonthRegistry::load(self.store)?.open_ledger(month)
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Prompt used by destructive commands
pub(crate) fn prompt_for(force: bool) -> Box<dyn Prompt> {
    if force {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompt)
    }
}

/// Convert a 1-based command-line position to a stored index
pub(crate) fn to_index(position: usize) -> BudgetResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| BudgetError::InvalidInput("Expense numbers start at 1".into()))
}
