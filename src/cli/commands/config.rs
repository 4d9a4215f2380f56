//! Config command handler
//!
//! `get`, `set`, `unset` and `reset` over the user config file.

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use uc_gpa::config::Config;
use uc_gpa::error;

/// Dispatch config subcommands. Returns `false` if the command failed.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    let outcome = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    match outcome {
        Ok(()) => true,
        Err(e) => {
            error!("config command failed: {e}");
            eprintln!("{e}");
            false
        }
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("✗ Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset ucgpa config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
