//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// filestate - Ensure a text file holds exactly the desired content
#[derive(Parser, Debug)]
#[command(name = "filestate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile a file from command-line parameters
    ///
    /// Examples:
    ///   filestate apply --path /tmp/test.txt --content "Hello World!"
    ///   filestate apply --path app.conf --content-file desired.conf --check
    Apply(ApplyArgs),

    /// Reconcile a file from a host parameter file (JSON, YAML or TOML)
    ///
    /// Always prints a single JSON result object on stdout.
    Exec {
        /// Parameter file with `path`, `content` and optional `check_mode`
        params: PathBuf,

        /// Report what would change without writing
        #[arg(long, env = "FILESTATE_CHECK_MODE")]
        check: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ApplyArgs {
    /// Path of the file to reconcile
    #[arg(short, long)]
    pub path: String,

    /// Desired content of the file
    #[arg(short, long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read the desired content from this file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long, env = "FILESTATE_CHECK_MODE")]
    pub check: bool,

    /// Output the host result object as JSON
    #[arg(long)]
    pub json: bool,
}
