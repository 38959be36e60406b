//! Report generation module for GPA summaries
//!
//! Renders a roster snapshot into a formatted report (Markdown or HTML)
//! with overall, major/general, and per-semester GPA breakdowns.

pub mod formats;

use crate::core::gpa::{aggregate, aggregate_iter, by_semester, GpaResult};
use crate::core::models::CourseRecord;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render a GPA report, providing a single
/// source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report title (typically the roster file stem)
    pub title: String,
    /// Roster snapshot being reported
    pub courses: &'a [CourseRecord],
    /// GPA over the whole roster
    pub overall: GpaResult,
    /// GPA over major courses only
    pub major: GpaResult,
    /// GPA over general-education courses only
    pub general: GpaResult,
    /// Per-semester breakdown, most recent semester first
    pub semesters: Vec<(Option<String>, GpaResult)>,
}

impl<'a> ReportContext<'a> {
    /// Build a report context from a roster snapshot
    #[must_use]
    pub fn new(title: String, courses: &'a [CourseRecord]) -> Self {
        let overall = aggregate(courses);
        let major = aggregate_iter(courses.iter().filter(|c| c.major));
        let general = aggregate_iter(courses.iter().filter(|c| !c.major));
        let semesters = by_semester(courses);

        Self {
            title,
            courses,
            overall,
            major,
            general,
            semesters,
        }
    }

    /// Get the number of courses on the roster
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Get the number of courses that carry a grade point
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.courses.iter().filter(|c| c.is_scored()).count()
    }
}

/// Format an optional GPA for display; absent GPA renders as `-`
#[must_use]
pub fn format_gpa(result: &GpaResult) -> String {
    result
        .gpa
        .map_or_else(|| "-".to_string(), |gpa| format!("{gpa:.2}"))
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn sample_roster() -> Vec<CourseRecord> {
        let mut ds = CourseRecord::graded("Data Structures".to_string(), 3.0, Grade::APlus);
        ds.major = true;
        ds.set_semester("2025-1".to_string());

        let mut hist = CourseRecord::graded("World History".to_string(), 2.0, Grade::BZero);
        hist.set_semester("2025-1".to_string());

        let mut capstone = CourseRecord::graded("Capstone".to_string(), 3.0, Grade::Unscored);
        capstone.major = true;
        capstone.set_semester("2025-2".to_string());

        vec![ds, hist, capstone]
    }

    #[test]
    fn context_splits_major_and_general() {
        let roster = sample_roster();
        let ctx = ReportContext::new("test".to_string(), &roster);

        assert_eq!(ctx.course_count(), 3);
        assert_eq!(ctx.scored_count(), 2);
        assert_eq!(ctx.major.gpa, Some(4.5));
        assert_eq!(ctx.general.gpa, Some(3.0));
        // (4.5*3 + 3.0*2) / 5 = 3.9
        assert_eq!(ctx.overall.gpa, Some(3.9));
    }

    #[test]
    fn context_orders_semesters_latest_first() {
        let roster = sample_roster();
        let ctx = ReportContext::new("test".to_string(), &roster);

        assert_eq!(ctx.semesters[0].0.as_deref(), Some("2025-2"));
        assert_eq!(ctx.semesters[1].0.as_deref(), Some("2025-1"));
        // 2025-2 has only the unscored capstone
        assert_eq!(ctx.semesters[0].1.gpa, None);
    }

    #[test]
    fn absent_gpa_formats_as_dash() {
        assert_eq!(format_gpa(&GpaResult::empty()), "-");
        assert_eq!(
            format_gpa(&GpaResult {
                total_credits: 3.0,
                gpa: Some(4.5)
            }),
            "4.50"
        );
    }
}
