//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::drift::{DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARNING_THRESHOLD};

/// Command-line interface for derivar
#[derive(Parser, Debug, Clone)]
#[command(name = "derivar")]
#[command(version)]
#[command(about = "Statistical data-drift detection: baseline capture and batch checks")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Capture a baseline snapshot from a reference dataset
    Baseline(BaselineArgs),

    /// Check a batch of current data against a stored baseline
    Check(CheckArgs),
}

/// Arguments for the baseline command
#[derive(Args, Debug, Clone)]
pub struct BaselineArgs {
    /// Dataset file: a JSON object mapping feature names to value arrays
    #[arg(value_name = "DATA")]
    pub input: PathBuf,

    /// Where to write the baseline snapshot
    #[arg(short, long, default_value = "baseline_distribution.json")]
    pub output: PathBuf,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Dataset file with the current batch
    #[arg(value_name = "DATA")]
    pub input: PathBuf,

    /// Baseline snapshot file
    #[arg(short, long)]
    pub baseline: PathBuf,

    /// Overall score at or above this classifies as Warning
    #[arg(long, default_value_t = DEFAULT_WARNING_THRESHOLD)]
    pub warning_threshold: f64,

    /// Overall score at or above this classifies as Critical
    #[arg(long, default_value_t = DEFAULT_CRITICAL_THRESHOLD)]
    pub critical_threshold: f64,

    /// Restrict the check to these features (default: all baseline features)
    #[arg(long = "feature", value_name = "NAME")]
    pub features: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the check command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}
