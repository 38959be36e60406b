//! Markdown report generator
//!
//! Generates GPA reports in Markdown format. These render well in GitHub,
//! GitLab, and VS Code.

use crate::core::gpa::GpaResult;
use crate::core::report::{format_gpa, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title);
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{scored_count}}", &ctx.scored_count().to_string());
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.overall.total_credits),
        );
        output = output.replace("{{overall_gpa}}", &format_gpa(&ctx.overall));
        output = output.replace("{{major_gpa}}", &format_gpa(&ctx.major));
        output = output.replace(
            "{{major_credits}}",
            &format!("{:.1}", ctx.major.total_credits),
        );
        output = output.replace("{{general_gpa}}", &format_gpa(&ctx.general));
        output = output.replace(
            "{{general_credits}}",
            &format!("{:.1}", ctx.general.total_credits),
        );

        let semester_table = Self::generate_semester_table(&ctx.semesters);
        output = output.replace("{{semester_table}}", &semester_table);

        let course_table = Self::generate_course_table(ctx);
        output = output.replace("{{course_table}}", &course_table);

        output
    }

    /// Generate the per-semester breakdown table
    fn generate_semester_table(semesters: &[(Option<String>, GpaResult)]) -> String {
        if semesters.is_empty() {
            return "No courses on roster.\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Semester | Credits | GPA |\n");
        table.push_str("|---|---|---|\n");

        for (label, result) in semesters {
            let _ = writeln!(
                table,
                "| {} | {:.1} | {} |",
                label.as_deref().unwrap_or("(unassigned)"),
                result.total_credits,
                format_gpa(result)
            );
        }

        table
    }

    /// Generate the course listing table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Course | Credits | Grade | Semester | Major | Memo |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        for course in ctx.courses {
            let grade = course.grade.map_or("-", |g| g.symbol());
            let _ = writeln!(
                table,
                "| {} | {:.1} | {} | {} | {} | {} |",
                course.name,
                course.credits,
                grade,
                course.semester.as_deref().unwrap_or("-"),
                if course.major { "yes" } else { "no" },
                course.memo.as_deref().unwrap_or("")
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseRecord, Grade};

    #[test]
    fn renders_all_placeholders() {
        let mut course = CourseRecord::graded("Algorithms".to_string(), 3.0, Grade::AZero);
        course.major = true;
        course.set_semester("2025-1".to_string());
        let roster = vec![course];

        let ctx = ReportContext::new("transcript".to_string(), &roster);
        let rendered = MarkdownReporter::new().render(&ctx).expect("renders");

        assert!(rendered.contains("# GPA Report: transcript"));
        assert!(rendered.contains("| Algorithms | 3.0 | A0 | 2025-1 | yes |"));
        assert!(rendered.contains("4.00"));
        assert!(!rendered.contains("{{"), "unreplaced placeholder:\n{rendered}");
    }

    #[test]
    fn empty_roster_renders_without_tables() {
        let ctx = ReportContext::new("empty".to_string(), &[]);
        let rendered = MarkdownReporter::new().render(&ctx).expect("renders");

        assert!(rendered.contains("No courses on roster."));
        assert!(rendered.contains("| **Overall GPA** | **-** / 4.5 |"));
    }
}
