//! CLI command handlers for `ucgpa`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod calculate;
pub mod config;
pub mod report;

use std::path::{Path, PathBuf};
use uc_gpa::config::Config;

/// Resolve an input snapshot path.
///
/// Paths that exist as given are used directly. A bare file name that does
/// not exist in the working directory is looked up in `paths.courses_dir`.
pub fn resolve_input(input_file: &Path, config: &Config) -> PathBuf {
    if input_file.exists() || config.paths.courses_dir.is_empty() {
        return input_file.to_path_buf();
    }

    if input_file.components().count() != 1 {
        return input_file.to_path_buf();
    }

    let candidate = Path::new(&config.paths.courses_dir).join(input_file);
    if candidate.exists() {
        candidate
    } else {
        input_file.to_path_buf()
    }
}

/// File stem of `path`, or `fallback` when it has none
pub fn file_stem_or(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_courses_dir(dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.courses_dir = dir.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_bare_name_resolves_against_courses_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("only_here.csv"), "").expect("write");
        let config = config_with_courses_dir(dir.path());

        let resolved = resolve_input(Path::new("only_here.csv"), &config);
        assert_eq!(resolved, dir.path().join("only_here.csv"));
    }

    #[test]
    fn test_missing_file_is_returned_unchanged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_with_courses_dir(dir.path());

        let resolved = resolve_input(Path::new("nowhere.csv"), &config);
        assert_eq!(resolved, PathBuf::from("nowhere.csv"));
    }

    #[test]
    fn test_file_stem_or() {
        assert_eq!(file_stem_or(Path::new("dir/alex.csv"), "x"), "alex");
        assert_eq!(file_stem_or(Path::new(""), "courses"), "courses");
    }
}
