//! Target command handler
//!
//! Answers "what average grade do I need over my remaining credits to reach
//! a target overall GPA" from the current roster.

use crate::commands::resolve_roster_path;
use gradepath::config::Config;
use gradepath::core::gpa::aggregate;
use gradepath::core::models::MAX_GRADE_POINT;
use gradepath::core::roster::parse_roster_csv;
use gradepath::core::target::{solve, TargetRequest};
use gradepath::{error, info};
use std::path::Path;

/// Run the target command.
///
/// # Arguments
/// * `roster_arg` - Optional roster path from the command line
/// * `remaining_credits` - Credit load still to be taken
/// * `target_gpa` - Desired overall GPA on the 4.5 scale
/// * `config` - Configuration containing the default roster path
pub fn run(roster_arg: Option<&Path>, remaining_credits: f64, target_gpa: f64, config: &Config) {
    if let Err(err) = simulate(roster_arg, remaining_credits, target_gpa, config) {
        error!("Target simulation failed: {err}");
        eprintln!("{err}");
    }
}

fn simulate(
    roster_arg: Option<&Path>,
    remaining_credits: f64,
    target_gpa: f64,
    config: &Config,
) -> Result<(), String> {
    // Reject bad inputs at the boundary; the solver itself never errors
    if !target_gpa.is_finite() || target_gpa <= 0.0 || target_gpa > MAX_GRADE_POINT {
        return Err(format!(
            "✗ Target GPA must be between 0 and {MAX_GRADE_POINT} (got {target_gpa})"
        ));
    }
    if !remaining_credits.is_finite() || remaining_credits <= 0.0 {
        return Err(format!(
            "✗ Remaining credits must be a positive number (got {remaining_credits})"
        ));
    }

    let roster_path = resolve_roster_path(roster_arg, config)?;
    let courses = parse_roster_csv(&roster_path).map_err(|e| {
        error!("Failed to load roster {}: {e}", roster_path.display());
        format!("✗ Failed to load {}: {e}", roster_path.display())
    })?;

    info!("Roster loaded: {}", roster_path.display());

    let current = aggregate(&courses);
    let outcome = solve(&TargetRequest {
        completed: &courses,
        remaining_credits,
        target_gpa,
    });

    println!("\n=== Target GPA Simulation ===");
    println!("Completed credits: {:.1}", current.total_credits);
    match current.gpa {
        Some(gpa) => println!("Current GPA: {gpa:.2} / {MAX_GRADE_POINT}"),
        None => println!("Current GPA: - (no graded courses yet)"),
    }
    println!("Remaining credits: {remaining_credits:.1}");
    println!("Target overall GPA: {target_gpa:.2}");

    match outcome.required_average {
        None => println!("\n✗ No solution: there are no remaining credits to fill."),
        Some(required) => {
            println!("\nRequired average over remaining credits: {required:.2}");
            if outcome.possible {
                println!("✓ Attainable within the {MAX_GRADE_POINT}-point scale.");
            } else if required > MAX_GRADE_POINT {
                println!(
                    "✗ Not attainable: exceeds the scale maximum by {:.2} points.",
                    required - MAX_GRADE_POINT
                );
            } else {
                println!("✗ Below the scale minimum: your GPA already exceeds this target.");
            }
        }
    }

    Ok(())
}
