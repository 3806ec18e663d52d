//! Wallet CLI commands

use clap::Subcommand;

use super::CommandContext;
use crate::audit::{AuditEntry, EntityType};
use crate::display::format_ledger_summary;
use crate::error::BudgetResult;
use crate::models::MonthId;

/// Wallet subcommands
#[derive(Subcommand)]
pub enum WalletCommands {
    /// Set the funds available for a month
    Set {
        /// Month to update
        month: MonthId,
        /// Wallet balance
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show spent, wallet and remaining for a month
    Show {
        /// Month to show
        month: MonthId,
    },
}

/// Handle a wallet command
pub fn handle_wallet_command(ctx: &CommandContext<'_>, cmd: WalletCommands) -> BudgetResult<()> {
    match cmd {
        WalletCommands::Set { month, amount } => {
            let mut ledger = ctx.open_ledger(&month)?;
            let before = ledger.wallet_balance();
            ledger.set_wallet_balance(&amount)?;

            ctx.audit.log(
                &AuditEntry::update(
                    EntityType::Wallet,
                    &before.to_decimal_string(),
                    &ledger.wallet_balance().to_decimal_string(),
                )
                .in_month(month),
            )?;

            println!(
                "Wallet for {} set to {}",
                month,
                ledger.wallet_balance().format_with_symbol(ctx.symbol())
            );
            println!(
                "Remaining: {}",
                ledger.remaining().format_with_symbol(ctx.symbol())
            );
        }

        WalletCommands::Show { month } => {
            let ledger = ctx.open_ledger(&month)?;
            print!(
                "{}",
                format_ledger_summary(
                    ledger.total_spent(),
                    ledger.wallet_balance(),
                    ledger.remaining(),
                    ctx.symbol()
                )
            );
        }
    }

    Ok(())
}
