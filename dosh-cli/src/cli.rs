//! CLI structure and option definitions.
//!
//! This module defines the command-line surface using clap's derive
//! macros. The shell itself is interactive; these options only
//! configure the session before the read loop starts.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive DOS-style filesystem shell.
#[derive(Parser)]
#[command(name = "dosh")]
#[command(version, about = "Interactive DOS-style filesystem shell", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Directory to start the session in (defaults to the current directory)
    #[arg(long, value_name = "PATH", env = "DOSH_START_DIR")]
    pub start_dir: Option<PathBuf>,

    /// Listing output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "DOSH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for directory listings.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}
