mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use icsout_core::date_range::{parse_cli_date, DateRange};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icsout")]
#[command(about = "Print the events of an .ics calendar grouped by day")]
struct Cli {
    /// Log parsing and expansion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every event between two dates (inclusive)
    Report {
        /// First day to include (yyyy/mm/dd or YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day to include (yyyy/mm/dd or YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Calendar file (defaults to default_file from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the events of a single day
    Day {
        /// Day to show (yyyy/mm/dd or YYYY-MM-DD)
        date: String,

        /// Calendar file (defaults to default_file from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Dump every occurrence after recurrence expansion
    Events {
        /// Calendar file (defaults to default_file from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report { start, end, file } => {
            let range = DateRange::from_args(&start, &end)?;
            let path = commands::resolve_file(file)?;
            commands::report::run(&path, &range)
        }
        Commands::Day { date, file } => {
            let date = parse_cli_date(&date)?;
            let path = commands::resolve_file(file)?;
            commands::day::run(&path, date)
        }
        Commands::Events { file } => {
            let path = commands::resolve_file(file)?;
            commands::events::run(&path)
        }
    }
}

/// Log to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
