use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// checkup — single-run host diagnostic
///
/// Collects host metrics, evaluates them against thresholds across the
/// performance, security and resource domains, and writes a report.
#[derive(Parser, Debug)]
#[command(name = "checkup")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full diagnostic and write a report (the default)
    #[command(alias = "r")]
    Run {
        /// Report format override (html, json, csv)
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory override
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Collect and print a raw metrics snapshot without analysis
    #[command(alias = "s")]
    Snapshot {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
