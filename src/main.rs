use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_builder::cli::{
    handle_export_command, handle_group_command, handle_history_command, handle_month_command,
    handle_report_command, handle_set_command, handle_show_command, handle_subcategory_command,
    ExportArgs, GroupCommands, MonthCommands, SetArgs, SubcategoryCommands,
};
use budget_builder::config::{paths::BudgetPaths, settings::Settings};
use budget_builder::error::BudgetError;
use budget_builder::services::BudgetModel;
use budget_builder::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly income and expense budget table",
    long_about = "budget-builder keeps a table of income and expense categories \
                  across month columns and derives subtotals, profit/loss and a \
                  running closing balance."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the starting workbook
    Init {
        /// Overwrite an existing workbook
        #[arg(long)]
        force: bool,
    },

    /// Print the budget table with all aggregate rows
    Show,

    /// Print the per-month summary
    Report,

    /// Month column commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Category group commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Subcategory commands
    #[command(subcommand)]
    Subcategory(SubcategoryCommands),

    /// Set one cell of the table
    Set(SetArgs),

    /// Export the table
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show paths and settings
    Config,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Init { force }) => {
            if storage.is_initialized() && !force {
                return Err(BudgetError::Validation(format!(
                    "Workbook already exists at {} (use --force to overwrite)",
                    paths.workbook_file().display()
                ))
                .into());
            }

            storage.save_model(&BudgetModel::seed())?;
            settings.save(&paths)?;
            println!("Initialized budget at: {}", paths.base_dir().display());
            println!();
            println!("Run 'budget show' to see the table.");
        }
        Some(Commands::Show) => handle_show_command(&storage)?,
        Some(Commands::Report) => handle_report_command(&storage, &settings)?,
        Some(Commands::Month(cmd)) => handle_month_command(&storage, cmd)?,
        Some(Commands::Group(cmd)) => handle_group_command(&storage, cmd)?,
        Some(Commands::Subcategory(cmd)) => handle_subcategory_command(&storage, cmd)?,
        Some(Commands::Set(args)) => handle_set_command(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("budget-builder Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Workbook:       {}", paths.workbook_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("budget-builder - monthly income and expense budget table");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
