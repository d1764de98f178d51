//! filestate CLI
//!
//! Host boundary for idempotent text-file reconciliation.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        // Reported failures already went to stdout as JSON.
        if !matches!(e, CliError::Reported { .. }) {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply(args) => commands::run_apply(&args),
        Commands::Exec { params, check } => commands::run_exec(&params, check),
    }
}
