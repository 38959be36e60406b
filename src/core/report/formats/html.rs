//! HTML report generator
//!
//! Generates self-contained HTML reports with embedded CSS.

use crate::core::gpa::GpaResult;
use crate::core::report::{format_gpa, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_html(&ctx.title));
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
            return "<p>No courses on roster.</p>".to_string();
        }

        let mut table = String::new();
        table.push_str("<table>\n<tr><th>Semester</th><th>Credits</th><th>GPA</th></tr>\n");

        for (label, result) in semesters {
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{:.1}</td><td>{}</td></tr>",
                escape_html(label.as_deref().unwrap_or("(unassigned)")),
                result.total_credits,
                format_gpa(result)
            );
        }

        table.push_str("</table>");
        table
    }

    /// Generate the course listing table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str(
            "<table>\n<tr><th>Course</th><th>Credits</th><th>Grade</th>\
             <th>Semester</th><th>Major</th><th>Memo</th></tr>\n",
        );

        for course in ctx.courses {
            let grade = course.grade.map_or("-", |g| g.symbol());
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{:.1}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&course.name),
                course.credits,
                grade,
                escape_html(course.semester.as_deref().unwrap_or("-")),
                if course.major { "yes" } else { "no" },
                escape_html(course.memo.as_deref().unwrap_or(""))
            );
        }

        table.push_str("</table>");
        table
    }
}

/// Escape text for safe HTML interpolation
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
