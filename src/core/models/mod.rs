//! Data models for `GradePath`

pub mod course;
pub mod grade;

pub use course::CourseRecord;
pub use grade::{point_for, Grade, MAX_GRADE_POINT, MIN_GRADE_POINT};
