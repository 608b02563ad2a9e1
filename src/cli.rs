// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::ConceptId;

/// Command-line arguments for `skillmap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skillmap",
    version,
    about = "Lay out a prerequisite graph of concepts and report learner progress.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the topic file (TOML).
    ///
    /// Default: `Topic.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Topic.toml")]
    pub topic: String,

    /// Output format for the report.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Also report the state and blockers of this concept.
    #[arg(long, value_name = "ID")]
    pub focus: Option<ConceptId>,

    /// Flip mastery of a concept before evaluating (repeatable).
    #[arg(long, value_name = "ID")]
    pub toggle: Vec<ConceptId>,

    /// Compute unlocked/frontier from the mastered set instead of reading
    /// them from the topic file.
    #[arg(long)]
    pub derive_progress: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SKILLMAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the topic, but don't compute a layout.
    #[arg(long)]
    pub dry_run: bool,
}

/// Report output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
