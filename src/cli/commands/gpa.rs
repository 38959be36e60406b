//! GPA command handler

use crate::commands::resolve_roster_path;
use gradepath::config::Config;
use gradepath::core::gpa::{aggregate_iter, by_semester, GpaResult};
use gradepath::core::models::CourseRecord;
use gradepath::core::roster::parse_roster_csv;
use gradepath::{error, info};
use std::path::Path;

/// Run the gpa command.
///
/// # Arguments
/// * `roster_arg` - Optional roster path from the command line
/// * `semester` - Optional semester filter
/// * `major_only` - Restrict to major courses
/// * `general_only` - Restrict to general-education courses
/// * `config` - Configuration containing the default roster path
pub fn run(
    roster_arg: Option<&Path>,
    semester: Option<&str>,
    major_only: bool,
    general_only: bool,
    config: &Config,
) {
    if let Err(err) = compute_and_print(roster_arg, semester, major_only, general_only, config) {
        error!("GPA computation failed: {err}");
        eprintln!("{err}");
    }
}

fn compute_and_print(
    roster_arg: Option<&Path>,
    semester: Option<&str>,
    major_only: bool,
    general_only: bool,
    config: &Config,
) -> Result<(), String> {
    let roster_path = resolve_roster_path(roster_arg, config)?;

    let courses = parse_roster_csv(&roster_path).map_err(|e| {
        error!("Failed to load roster {}: {e}", roster_path.display());
        format!("✗ Failed to load {}: {e}", roster_path.display())
    })?;

    info!("Roster loaded: {}", roster_path.display());

    let in_scope = |c: &&CourseRecord| {
        let scope_ok = if major_only {
            c.major
        } else if general_only {
            !c.major
        } else {
            true
        };
        let semester_ok = semester.is_none_or(|sem| c.semester.as_deref() == Some(sem));
        scope_ok && semester_ok
    };

    let result = aggregate_iter(courses.iter().filter(in_scope));

    println!("\n=== GPA Summary ===");
    if let Some(sem) = semester {
        println!("Semester: {sem}");
    }
    if major_only {
        println!("Scope: major courses only");
    } else if general_only {
        println!("Scope: general-education courses only");
    }
    println!("Courses on roster: {}", courses.len());
    print_result(&result);

    // Unfiltered runs also get the per-semester breakdown
    if semester.is_none() && !major_only && !general_only {
        let groups = by_semester(&courses);
        if groups.len() > 1 {
            println!("\n=== By Semester ===");
            for (label, group_result) in groups {
                println!(
                    "{}: {:.1} credits, GPA {}",
                    label.as_deref().unwrap_or("(unassigned)"),
                    group_result.total_credits,
                    format_gpa(&group_result)
                );
            }
        }
    }

    Ok(())
}

fn print_result(result: &GpaResult) {
    println!("Credits counted: {:.1}", result.total_credits);
    match result.gpa {
        Some(gpa) => println!("GPA: {gpa:.2} / 4.5"),
        None => println!("GPA: - (no graded courses yet)"),
    }
}

fn format_gpa(result: &GpaResult) -> String {
    result
        .gpa
        .map_or_else(|| "-".to_string(), |gpa| format!("{gpa:.2}"))
}
