//! Configuration module for `ucgpa`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside path-like values.
const DIR_VARIABLE: &str = "$UC_GPA";

/// Fallback number of decimals used when displaying a GPA.
pub const DEFAULT_PRECISION: usize = 2;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for course snapshots given by bare file name
    #[serde(default)]
    pub courses_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
    /// Directory for CSV breakdown exports
    #[serde(default)]
    pub exports_dir: String,
}

/// Report rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default report format (markdown, html, json)
    #[serde(default)]
    pub format: String,
    /// Decimal places used when displaying a GPA
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override CSV export directory
    pub exports_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$UC_GPA` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/ucgpa`
    /// - macOS: `~/Library/Application Support/ucgpa`
    /// - Windows: `%APPDATA%\ucgpa`
    #[must_use]
    pub fn get_ucgpa_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ucgpa")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used on load so that fields added in newer releases pick up their
    /// default values. Only fields that are empty here and non-empty in the
    /// defaults are touched.
    ///
    /// # Returns
    ///
    /// `true` if any field changed
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.courses_dir, &defaults.paths.courses_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (&mut self.paths.exports_dir, &defaults.paths.exports_dir),
            (&mut self.report.format, &defaults.report.format),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        if self.report.precision.is_none() && defaults.report.precision.is_some() {
            self.report.precision = defaults.report.precision;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect the current run; nothing is written to disk.
    /// `None` values leave the loaded value in place.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_ucgpa_dir`](Self::get_ucgpa_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_ucgpa_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$UC_GPA` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_ucgpa_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields fall back to their serde defaults and `$UC_GPA` is
    /// expanded in every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.courses_dir = Self::expand_variables(&config.paths.courses_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from the embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file is merged with the defaults and re-saved when new
    /// fields were filled in. Any read or parse failure falls back to the
    /// defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Err(e) = defaults.save() {
                crate::warn!("Could not write default config to {}: {e}", config_file.display());
            }
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(e) => {
                crate::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Decimal places to use when displaying a GPA
    #[must_use]
    pub fn precision(&self) -> usize {
        self.report.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `courses_dir`,
    /// `reports_dir`, `exports_dir`, `format`, `precision`. Dashed spellings
    /// of the directory keys are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "courses_dir" | "courses-dir" => Some(self.paths.courses_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            "format" => Some(self.report.format.clone()),
            "precision" => Some(self.precision().to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|e| format!("Invalid value for 'level': {e}"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "courses_dir" | "courses-dir" => self.paths.courses_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            "format" => {
                value
                    .parse::<crate::core::report::ReportFormat>()
                    .map_err(|e| format!("Invalid value for 'format': {e}"))?;
                self.report.format = value.to_ascii_lowercase();
            }
            "precision" => {
                let digits = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid number for 'precision': '{value}'"))?;
                self.report.precision = Some(digits);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "courses_dir" | "courses-dir" => self
                .paths
                .courses_dir
                .clone_from(&defaults.paths.courses_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            "format" => self.report.format.clone_from(&defaults.report.format),
            "precision" => self.report.precision = defaults.report.precision,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  courses_dir = \"{}\"", self.paths.courses_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        writeln!(f, "\n[report]")?;
        writeln!(f, "  format = \"{}\"", self.report.format)?;
        writeln!(f, "  precision = {}", self.precision())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.paths.reports_dir.is_empty());
        assert_eq!(config.precision(), 2);
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$UC_GPA/reports");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("reports"));
        assert_eq!(Config::expand_variables("./plain"), "./plain");
    }

    #[test]
    fn test_set_rejects_bad_level_and_format() {
        let mut config = Config::from_defaults();
        assert!(config.set("level", "loud").is_err());
        assert!(config.set("format", "docx").is_err());
        assert!(config.set("precision", "two").is_err());
        assert!(config.set("level", "DEBUG").is_ok());
        assert_eq!(config.logging.level, "debug");
    }
}
