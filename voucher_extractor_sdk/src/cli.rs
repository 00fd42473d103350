//! Command definitions and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Evaluate formula-path table configurations against voucher records
#[derive(Debug, Parser)]
#[command(name = "voucher-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pretty-print the JSON report
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract fields from one record
    Extract(ExtractArgs),

    /// Extract fields from every record in a file
    Batch(BatchArgs),

    /// Check a table configuration for unusable entries
    Validate(ValidateArgs),

    /// Evaluate a single formula against a record
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Record file (.json or .toml)
    #[arg(long)]
    pub record: PathBuf,

    /// Table configuration file (.json or .toml)
    #[arg(long)]
    pub config: PathBuf,

    /// Field selection file mapping field keys to booleans
    #[arg(long)]
    pub selection: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Records file holding an array of records (or a single record)
    #[arg(long)]
    pub records: PathBuf,

    #[arg(long)]
    pub config: PathBuf,

    #[arg(long)]
    pub selection: Option<PathBuf>,

    /// Worker thread limit
    #[arg(long)]
    pub threads: Option<usize>,

    /// Extract on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Extractor options file (TOML)
    #[arg(long)]
    pub options: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub config: PathBuf,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(long)]
    pub record: PathBuf,

    /// Formula text, e.g. `$Parent:$NAME`
    #[arg(long, allow_hyphen_values = true)]
    pub formula: String,

    /// Table whose sub-collection context applies to `Parent`
    #[arg(long)]
    pub table: Option<String>,
}
