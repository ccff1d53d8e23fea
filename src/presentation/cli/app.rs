use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hostcheck: host inspection sampler and report generator
///
/// Samples local host health into a CSV file and turns a directory of
/// inspection logs into a browsable HTML report.
#[derive(Parser, Debug)]
#[command(name = "hostcheck")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive shell)
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
    /// Sample host health and append one row to the CSV report
    #[command(alias = "c")]
    Collect {
        /// CSV file to append to (default: config)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Launcher script to write next to the CSV (default: config)
        #[arg(long, conflicts_with = "no_launcher")]
        launcher: Option<PathBuf>,

        /// Do not write the launcher script
        #[arg(long)]
        no_launcher: bool,

        /// Print the sample as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the inspection logs found in a directory
    #[command(alias = "s")]
    Scan {
        /// Directory holding `<ip>_*.log` files
        dir: PathBuf,
    },

    /// Generate index.html and device pages from a log directory
    #[command(alias = "r")]
    Report {
        /// Directory holding `<ip>_*.log` files
        dir: PathBuf,

        /// Open the index page when done
        #[arg(long)]
        open: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive report shell
    #[command(alias = "u")]
    Ui {
        /// Log directory to start in
        dir: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },
}
