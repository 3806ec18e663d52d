//! Config CLI commands

use clap::Subcommand;

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::SortMethod;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Change saved settings
    Set {
        /// Symbol printed before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Default ordering for `expense list` (`date` or `amount`)
        #[arg(long)]
        sort: Option<SortMethod>,
    },
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("BudgetBook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
            match settings.default_sort {
                Some(method) => println!("Default sort:    {}", method),
                None => println!("Default sort:    (entry order)"),
            }
        }

        ConfigCommands::Set { currency, sort } => {
            if currency.is_none() && sort.is_none() {
                return Err(BudgetError::InvalidInput(
                    "Nothing to change; pass --currency or --sort".into(),
                ));
            }

            let mut updated = settings.clone();
            if let Some(symbol) = currency {
                updated.currency_symbol = symbol;
            }
            if sort.is_some() {
                updated.default_sort = sort;
            }
            updated.save(paths)?;

            tracing::debug!(currency = %updated.currency_symbol, "settings saved");
            println!("Settings saved to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
