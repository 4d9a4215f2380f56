//! CLI argument definitions for `ucgpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use uc_gpa::config::ConfigOverrides;
use uc_gpa::logger::Level;

/// CLI log level argument
///
/// Converts to a lowercase string for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `reports_dir`, `precision`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset a single configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate the UC GPA for one or more course snapshots.
    ///
    /// Prints a summary per file and writes a CSV breakdown to the export
    /// directory unless --no-csv is given.
    Calculate {
        /// Course snapshot files (.csv or .json)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// CSV breakdown output paths; must match the inputs 1:1 when given
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,

        /// Also write a report in this format (markdown, html, json)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Skip the CSV breakdown export
        #[arg(long)]
        no_csv: bool,
    },
    /// Generate a UC GPA report from a course snapshot.
    Report {
        /// Course snapshot file (.csv or .json)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or json. Falls back to config.
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Student label shown in the report (defaults to the file name)
        #[arg(long, value_name = "NAME")]
        student: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "ucgpa",
    about = "Calculate the University of California GPA from a course snapshot",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config CSV export directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config CSV export directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--out-dir`) win over long-form flags
    /// (e.g., `--config-out-dir`) when both are given.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            exports_dir: path_string(self.out_dir.as_ref().or(self.config_out_dir.as_ref())),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}
