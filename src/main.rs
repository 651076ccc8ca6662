use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parking::cli::Shell;
use parking::config::{LogLevel, Settings};
use parking::storage::TicketStore;

#[derive(Parser)]
#[command(
    name = "parking",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based parking ticket and revenue tracker",
    long_about = "Issues tickets as vehicles enter, charges them by the hour \
                  when they leave, and reports the revenue collected. All \
                  state is kept in memory for the current session only."
)]
struct Cli {
    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Currency symbol shown in front of amounts
    #[arg(long, default_value = "$", global = true)]
    currency: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive parking menu (default)
    Run,

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        currency_symbol: cli.currency,
        log_level: LogLevel::from_verbosity(cli.verbose),
    };
    settings.validate()?;

    init_logging(settings.log_level);

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", settings.to_json()?);
        }
        Some(Commands::Run) | None => {
            tracing::info!("Starting parking session");
            let stdin = io::stdin();
            let mut shell = Shell::new(TicketStore::new(), settings, stdin.lock(), io::stdout());
            shell.run()?;
            tracing::info!("Parking session ended");
        }
    }

    Ok(())
}

/// Send diagnostics to stderr so they never mix with the console dialogue
fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
