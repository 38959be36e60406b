//! Target-GPA solver
//!
//! Algebraically inverts the weighted-average identity to answer "what
//! average grade point do I need over my remaining credits to reach a
//! target overall GPA". Stateless; every call depends only on its inputs.

use crate::core::gpa::{aggregate, round2};
use crate::core::models::grade::{MAX_GRADE_POINT, MIN_GRADE_POINT};
use crate::core::models::CourseRecord;
use serde::Serialize;

/// Inputs for a target-GPA solve
#[derive(Debug, Clone)]
pub struct TargetRequest<'a> {
    /// Courses with confirmed grades; only contributing records matter
    pub completed: &'a [CourseRecord],
    /// Credit load still to be taken; must be positive for a solution
    pub remaining_credits: f64,
    /// Desired overall GPA once the remaining credits are completed
    pub target_gpa: f64,
}

/// Outcome of a target-GPA solve
///
/// `required_average` is populated even when the target is out of reach, so
/// callers can show by how much it overshoots the scale. It is `None` only
/// when no solution exists at all (no remaining credits to fill).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetOutcome {
    /// Whether the required average lies within the grading scale
    pub possible: bool,
    /// Required average grade point over the remaining credits, rounded to
    /// two decimals
    pub required_average: Option<f64>,
}

impl TargetOutcome {
    /// The "no solution exists" outcome
    #[must_use]
    pub const fn unsolvable() -> Self {
        Self {
            possible: false,
            required_average: None,
        }
    }
}

/// Solve for the required average grade point over the remaining credits
///
/// Inverts `(completed_gpa * completed_credits + x * remaining) /
/// (completed_credits + remaining) = target` for `x`. Feasibility is judged
/// on the unrounded value against the inclusive `[0.0, 4.5]` scale; the
/// reported value is rounded afterwards so a boundary solve is never
/// misclassified by its own rounding.
#[must_use]
pub fn solve(request: &TargetRequest<'_>) -> TargetOutcome {
    if request.remaining_credits <= 0.0 || !request.remaining_credits.is_finite() {
        // Nothing left to take, so no average can be required
        return TargetOutcome::unsolvable();
    }

    let completed = aggregate(request.completed);

    // A student with no graded credits starts from a zero-point baseline.
    // Modeling choice, not a claim that their GPA is 0: the completed term
    // self-cancels below because completed credits are 0 as well.
    let completed_gpa = completed.gpa.unwrap_or(0.0);
    let completed_credits = completed.total_credits;

    let total_credits_after = completed_credits + request.remaining_credits;
    if total_credits_after <= 0.0 {
        // Unreachable under the precondition above; kept as a guard against
        // future callers relaxing it
        return TargetOutcome::unsolvable();
    }

    let current_points = completed_gpa * completed_credits;
    let required_points = request.target_gpa * total_credits_after;
    let required_average = (required_points - current_points) / request.remaining_credits;

    TargetOutcome {
        possible: (MIN_GRADE_POINT..=MAX_GRADE_POINT).contains(&required_average),
        required_average: Some(round2(required_average)),
    }
}
