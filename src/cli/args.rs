use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "data_processor")]
#[command(about = "Validate, double and tag JSON items in fixed-size batches")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a JSON array of items and write the transformed items
    Process {
        /// JSON file containing an array of item objects
        input: PathBuf,

        /// JSON configuration file (batch_size, report_progress)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of items per batch (overrides the configuration file)
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress per-batch progress logs
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count valid and invalid items without transforming them
    Validate {
        /// JSON file containing an array of item objects
        input: PathBuf,
    },

    /// Load a configuration file and show the resulting processor settings
    ShowConfig {
        /// JSON configuration file
        config: PathBuf,
    },
}
