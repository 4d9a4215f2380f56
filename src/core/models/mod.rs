//! Data models for `ucgpa`

pub mod course;
pub mod grade;
pub mod level;
pub mod term;

pub use course::Course;
pub use grade::Grade;
pub use level::{CourseLevel, GradeLevel};
pub use term::{Season, Term};
