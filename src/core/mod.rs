//! Core functionality: course models, the UC GPA calculator, snapshot
//! loading, and result presentation.

pub mod export;
pub mod gpa;
pub mod loader;
pub mod models;
pub mod report;

pub use gpa::{calculate_uc_gpa, CalculationResult};
pub use models::Course;
