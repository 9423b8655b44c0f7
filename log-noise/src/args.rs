use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "log-noise")]
#[command(about = "Generate synthetic access-log traffic", long_about = None)]
pub struct CliArgs {
    /// Number of lines to generate
    #[arg(long, default_value_t = 100)]
    lines: u64,

    /// Destination file
    #[arg(long)]
    output: PathBuf,

    /// RNG seed for reproducible output (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = LineFormat::Access)]
    format: LineFormat,

    /// Percentage of unmatchable noise lines mixed into access output
    #[arg(long, default_value_t = 20)]
    noise: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LineFormat {
    Access,
    Json,
}
