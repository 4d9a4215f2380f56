//! Library for `ucgpa`
//!
//! Computes the University of California GPA from a high school course
//! snapshot. The calculator lives in [`core::gpa`]; everything else loads
//! snapshots, renders results, and configures the CLI.

pub mod logger;

pub mod config;
pub mod core;

pub use crate::core::{calculate_uc_gpa, CalculationResult, Course};

/// Returns the current version of the `uc-gpa` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
