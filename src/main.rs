use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetbook::audit::AuditLogger;
use budgetbook::cli::{
    handle_config_command, handle_expense_command, handle_history_command, handle_month_command,
    handle_theme_command, handle_wallet_command, CommandContext, ConfigCommands, ExpenseCommands,
    MonthCommands, ThemeCommands, WalletCommands,
};
use budgetbook::config::logging::init_tracing;
use budgetbook::config::{BudgetPaths, Settings};
use budgetbook::display::format_month_list;
use budgetbook::services::MonthRegistry;
use budgetbook::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Month-by-month expense book",
    long_about = "BudgetBook keeps a list of months, the expenses recorded against each \
                  of them, and how much of the month's wallet is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Month management commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Wallet balance commands
    #[command(subcommand)]
    Wallet(WalletCommands),

    /// Light/dark theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = FileStore::open(paths.data_dir())?;
    let audit = AuditLogger::new(paths.audit_log());
    let ctx = CommandContext {
        store: &store,
        settings: &settings,
        audit: &audit,
    };

    match cli.command {
        Some(Commands::Month(cmd)) => handle_month_command(&ctx, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Wallet(cmd)) => handle_wallet_command(&ctx, cmd)?,
        Some(Commands::Theme(cmd)) => handle_theme_command(&ctx, cmd)?,
        Some(Commands::History { limit }) => handle_history_command(&ctx, limit)?,
        Some(Commands::Config { action }) => handle_config_command(&paths, &settings, action)?,
        None => {
            let registry = MonthRegistry::load(&store)?;
            print!("{}", format_month_list(registry.list_months()));
        }
    }

    Ok(())
}
