// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `rsyncgen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rsyncgen",
    version,
    about = "Generate rsync scripts, a run-all script and crontab entries from a JSON project file.",
    long_about = None
)]
pub struct CliArgs {
    /// Base directory for the default config, template and output locations.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to the project config (JSON, or TOML by extension).
    ///
    /// Default: `<root>/config.json`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the rsync script template.
    ///
    /// Default: `<root>/template/rsync.sh.template`.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory receiving the generated files. Wiped on every run.
    ///
    /// Default: `<root>/output`.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RSYNCGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the generation plan, but don't write anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Merge the generated block into the current user's crontab.
    #[arg(long, conflicts_with = "dry_run")]
    pub install_crontab: bool,
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
