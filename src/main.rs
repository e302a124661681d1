use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_audit_command, handle_config_command, handle_export_command, handle_report_command,
    handle_transaction_command, ConfigCommands, ExportFormat, ReportCommands, TransactionCommands,
};
use fintrack::config::{paths::FinancePaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with financial-week reports",
    long_about = "fintrack records income and expenses in a spreadsheet-style CSV \
                  sheet and summarizes them by financial week, month and category, \
                  with predicted-vs-actual balances and accumulated wealth history."
)]
struct Cli {
    /// Print diagnostic logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and transaction sheet
    Init,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Dashboard and reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all transactions
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fintrack::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if storage.initialize()? {
                println!("Created transaction sheet: {}", paths.sheet_file().display());
            } else {
                println!("Transaction sheet already exists: {}", paths.sheet_file().display());
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'fintrack transaction categories' to see the available categories.");
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &mut settings, command)?;
        }
        Some(Commands::Transaction(cmd)) => {
            storage.initialize()?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(&storage, format, output, pretty)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report dashboard' to see the current month.");
        }
    }

    Ok(())
}
