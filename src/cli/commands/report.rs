//! Report command handler
//!
//! Generates GPA reports (Markdown, HTML) with overall, major/general, and
//! per-semester breakdowns.

use crate::commands::resolve_roster_path;
use gradepath::config::Config;
use gradepath::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gradepath::core::roster::parse_roster_csv;
use gradepath::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `roster_arg` - Optional roster path from the command line
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the default reports directory
pub fn run(roster_arg: Option<&Path>, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(roster_arg, output_file, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
    }
}

fn generate_report(
    roster_arg: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let roster_path = resolve_roster_path(roster_arg, config)?;
    let courses = parse_roster_csv(&roster_path).map_err(|e| {
        error!("Failed to load roster {}: {e}", roster_path.display());
        format!("✗ Failed to load {}: {e}", roster_path.display())
    })?;

    info!("Roster loaded: {}", roster_path.display());

    let title = roster_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster")
        .to_string();
    let ctx = ReportContext::new(title.clone(), &courses);

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let output_filename = format!("{title}_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &final_output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &final_output_path),
    };
    result.map_err(|e| format!("✗ Failed to generate report: {e}"))?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&ctx);

    Ok(())
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext) {
    println!("\n=== Summary ===");
    println!(
        "Courses: {} ({} graded)",
        ctx.course_count(),
        ctx.scored_count()
    );
    println!("Credits counted: {:.1}", ctx.overall.total_credits);
    match ctx.overall.gpa {
        Some(gpa) => println!("Overall GPA: {gpa:.2} / 4.5"),
        None => println!("Overall GPA: - (no graded courses yet)"),
    }
    match ctx.major.gpa {
        Some(gpa) => println!("Major GPA: {gpa:.2}"),
        None => println!("Major GPA: -"),
    }
    match ctx.general.gpa {
        Some(gpa) => println!("General GPA: {gpa:.2}"),
        None => println!("General GPA: -"),
    }
}
