//! Command-line interface entry point for `ucgpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;
use uc_gpa::config::Config;
use uc_gpa::info;
use uc_gpa::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Calculate {
            input_files,
            output,
            report,
            no_csv,
        } => commands::calculate::run(
            &input_files,
            &output,
            report.as_deref(),
            no_csv,
            &config,
            verbose,
        ),
        Command::Report {
            input_file,
            output,
            format,
            student,
        } => commands::report::run(
            &input_file,
            output.as_deref(),
            format.as_deref(),
            student.as_deref(),
            &config,
        ),
    };

    if !ok {
        std::process::exit(1);
    }
}
