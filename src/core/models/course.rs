//! Course record model

use crate::core::models::Grade;
use serde::{Deserialize, Serialize};

/// A course as it appears on a student's roster
///
/// The core only ever reads these records; ownership and mutation stay with
/// whoever loaded the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course name (e.g., "Data Structures")
    pub name: String,

    /// Credit hours (can be fractional)
    pub credits: f64,

    /// Letter grade, or `None` when the record never had one assigned
    pub grade: Option<Grade>,

    /// Semester label (e.g., "2025-2")
    pub semester: Option<String>,

    /// Whether the course counts toward the major
    pub major: bool,

    /// Free-form note
    pub memo: Option<String>,
}

impl CourseRecord {
    /// Create a new course record with no grade or semester
    #[must_use]
    pub const fn new(name: String, credits: f64) -> Self {
        Self {
            name,
            credits,
            grade: None,
            semester: None,
            major: false,
            memo: None,
        }
    }

    /// Create a graded course record
    #[must_use]
    pub const fn graded(name: String, credits: f64, grade: Grade) -> Self {
        Self {
            name,
            credits,
            grade: Some(grade),
            semester: None,
            major: false,
            memo: None,
        }
    }

    /// Whether this record carries a numeric grade point
    ///
    /// A record with an `Unscored` grade (or no grade at all) is an
    /// in-progress course and is excluded from GPA aggregation.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.grade.and_then(Grade::point).is_some()
    }

    /// Set the semester label
    pub fn set_semester(&mut self, semester: String) {
        self.semester = Some(semester);
    }
}
