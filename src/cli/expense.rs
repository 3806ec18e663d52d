//! Expense CLI commands

use clap::Subcommand;

use super::{prompt_for, to_index, CommandContext};
use crate::audit::{AuditEntry, EntityType};
use crate::display::{format_expense_register, format_ledger_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{MonthId, SortMethod};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Month the expense belongs to
        month: MonthId,
        /// What the money was spent on
        description: String,
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Day of the month (1-31)
        #[arg(allow_hyphen_values = true)]
        day: String,
    },
    /// List a month's expenses with totals
    #[command(alias = "ls")]
    List {
        /// Month to show
        month: MonthId,
        /// Order by `date` or `amount` (largest first)
        #[arg(short, long)]
        sort: Option<SortMethod>,
    },
    /// Change fields of an expense
    Edit {
        /// Month the expense belongs to
        month: MonthId,
        /// Expense number as shown by `expense list`
        number: usize,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New day of the month
        #[arg(long, allow_hyphen_values = true)]
        day: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Month the expense belongs to
        month: MonthId,
        /// Expense number as shown by `expense list`
        number: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CommandContext<'_>, cmd: ExpenseCommands) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            month,
            description,
            amount,
            day,
        } => {
            let mut ledger = ctx.open_ledger(&month)?;
            let index = ledger.add_record(&description, &amount, &day)?;
            let record = &ledger.records()[index];

            ctx.audit.log(
                &AuditEntry::create(EntityType::Expense, record)
                    .in_month(month)
                    .at_index(index),
            )?;

            println!(
                "Added #{} {} ({}) on day {}",
                index + 1,
                record.description(),
                record.amount().format_with_symbol(ctx.symbol()),
                record.day()
            );
            println!(
                "Monthly expense: {}",
                ledger.total_spent().format_with_symbol(ctx.symbol())
            );
        }

        ExpenseCommands::List { month, sort } => {
            let ledger = ctx.open_ledger(&month)?;

            let rows = match sort.or(ctx.settings.default_sort) {
                Some(method) => ledger.sorted_view(method),
                None => ledger.records().iter().enumerate().collect(),
            };

            println!("Expenses for {}", month.label());
            println!();
            print!("{}", format_expense_register(&rows, ctx.symbol()));
            println!();
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

        ExpenseCommands::Edit {
            month,
            number,
            description,
            amount,
            day,
        } => {
            if description.is_none() && amount.is_none() && day.is_none() {
                return Err(BudgetError::InvalidInput(
                    "Nothing to change; pass --description, --amount or --day".into(),
                ));
            }

            let index = to_index(number)?;
            let mut ledger = ctx.open_ledger(&month)?;

            let mut draft = ledger.begin_edit(index)?.clone();
            let before = ledger.records()[index].clone();
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(day) = day {
                draft.day = day;
            }

            ledger.commit_edit(index, &draft.description, &draft.amount, &draft.day)?;
            let after = &ledger.records()[index];

            ctx.audit.log(
                &AuditEntry::update(EntityType::Expense, &before, after)
                    .in_month(month)
                    .at_index(index),
            )?;

            println!(
                "Updated #{} {} ({}) on day {}",
                number,
                after.description(),
                after.amount().format_with_symbol(ctx.symbol()),
                after.day()
            );
        }

        ExpenseCommands::Delete {
            month,
            number,
            force,
        } => {
            let index = to_index(number)?;
            let mut ledger = ctx.open_ledger(&month)?;

            match ledger.delete_record(index, prompt_for(force).as_ref())? {
                Some(removed) => {
                    ctx.audit.log(
                        &AuditEntry::delete(EntityType::Expense, &removed)
                            .in_month(month)
                            .at_index(index),
                    )?;
                    println!("Deleted #{} {}", number, removed.description());
                    println!(
                        "Monthly expense: {}",
                        ledger.total_spent().format_with_symbol(ctx.symbol())
                    );
                }
                None => println!("Aborted."),
            }
        }
    }

    Ok(())
}
