//! Laurel CLI - award-interval reports from CSV exports

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "laurel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the producers with the shortest and longest gap between wins
    Intervals {
        #[command(flatten)]
        source: SourceArgs,

        /// Ignore two wins by the same producer in the same year
        #[arg(long)]
        exclude_zero: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print every winning producer with their winning years
    Producers {
        #[command(flatten)]
        source: SourceArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
pub struct SourceArgs {
    /// CSV file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ';')]
    pub delimiter: char,

    /// Value of the `winner` column that marks a win
    #[arg(short, long, default_value = "yes")]
    pub winner_token: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Intervals {
            source,
            exclude_zero,
            pretty,
        } => {
            commands::intervals::execute(&source, exclude_zero, pretty)?;
        }
        Commands::Producers { source, pretty } => {
            commands::producers::execute(&source, pretty)?;
        }
    }

    Ok(())
}
