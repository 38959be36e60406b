//! GPA aggregation
//!
//! Credit-weighted averaging over a snapshot of course records. A record
//! contributes iff its grade resolves to a numeric point and its credit
//! weight is strictly positive; everything else is silently inert, so a
//! single malformed record never invalidates the whole report.

use crate::core::models::{point_for, CourseRecord};
use serde::Serialize;

/// Result of aggregating a set of course records
///
/// `gpa: None` is the "no graded courses yet" state. It is distinct from a
/// GPA of exactly 0.0, which requires at least one credit-bearing `F`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpaResult {
    /// Sum of credit weights of all contributing records
    pub total_credits: f64,
    /// Credit-weighted average grade point, rounded to two decimals
    pub gpa: Option<f64>,
}

impl GpaResult {
    /// The empty result: no contributing records
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_credits: 0.0,
            gpa: None,
        }
    }
}

/// Round to two decimal places, half away from zero
///
/// This is the single rounding policy for the whole crate, applied once to
/// each reported value and never to intermediate sums.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute total credits and weighted-average GPA over any iterator of
/// course records
///
/// Unscored records and records with non-positive credits contribute
/// nothing. The aggregation is a commutative weighted sum, so input order
/// is irrelevant.
#[must_use]
pub fn aggregate_iter<'a, I>(courses: I) -> GpaResult
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut total_credits = 0.0_f64;
    let mut total_points = 0.0_f64;

    for course in courses {
        let Some(point) = point_for(course.grade) else {
            continue;
        };

        if course.credits <= 0.0 || !course.credits.is_finite() {
            continue;
        }

        total_credits += course.credits;
        total_points += point * course.credits;
    }

    if total_credits == 0.0 {
        return GpaResult::empty();
    }

    GpaResult {
        total_credits,
        gpa: Some(round2(total_points / total_credits)),
    }
}

/// Compute total credits and weighted-average GPA over a roster snapshot
#[must_use]
pub fn aggregate(courses: &[CourseRecord]) -> GpaResult {
    aggregate_iter(courses)
}

/// Compute GPA restricted to a single semester
///
/// With `semester: None` this is identical to [`aggregate`].
#[must_use]
pub fn semester_gpa(courses: &[CourseRecord], semester: Option<&str>) -> GpaResult {
    semester.map_or_else(
        || aggregate(courses),
        |sem| aggregate_iter(courses.iter().filter(|c| c.semester.as_deref() == Some(sem))),
    )
}

/// Group courses by semester and aggregate each group
///
/// Returns labeled groups with the most recent semester first (labels sort
/// descending, matching how semesters like "2025-2" order naturally).
/// Courses without a semester label come last under `None`.
#[must_use]
pub fn by_semester(courses: &[CourseRecord]) -> Vec<(Option<String>, GpaResult)> {
    let mut labels: Vec<String> = courses
        .iter()
        .filter_map(|c| c.semester.clone())
        .filter(|s| !s.trim().is_empty())
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels.reverse();

    let mut groups: Vec<(Option<String>, GpaResult)> = labels
        .into_iter()
        .map(|label| {
            let result = semester_gpa(courses, Some(&label));
            (Some(label), result)
        })
        .collect();

    let unlabeled: Vec<&CourseRecord> = courses
        .iter()
        .filter(|c| c.semester.as_deref().is_none_or(|s| s.trim().is_empty()))
        .collect();
    if !unlabeled.is_empty() {
        groups.push((None, aggregate_iter(unlabeled)));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn course(credits: f64, grade: Grade) -> CourseRecord {
        CourseRecord::graded("course".to_string(), credits, grade)
    }

    #[test]
    fn empty_roster_has_no_gpa() {
        let result = aggregate(&[]);
        assert!((result.total_credits - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.gpa, None);
    }

    #[test]
    fn weights_grades_by_credits() {
        let courses = vec![course(3.0, Grade::APlus), course(3.0, Grade::F)];
        let result = aggregate(&courses);

        assert!((result.total_credits - 6.0).abs() < f64::EPSILON);
        assert_eq!(result.gpa, Some(2.25));
    }

    #[test]
    fn unscored_only_roster_has_no_gpa() {
        let courses = vec![course(3.0, Grade::Unscored)];
        let result = aggregate(&courses);

        assert!((result.total_credits - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.gpa, None);
    }

    #[test]
    fn credit_bearing_f_is_a_real_zero_gpa() {
        // Distinct from the empty state: gpa is Some(0.0), not None
        let courses = vec![course(3.0, Grade::F)];
        let result = aggregate(&courses);

        assert!((result.total_credits - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.gpa, Some(0.0));
    }

    #[test]
    fn order_does_not_matter() {
        let mut courses = vec![
            course(3.0, Grade::APlus),
            course(4.0, Grade::BZero),
            course(2.0, Grade::CPlus),
            course(1.5, Grade::F),
        ];
        let forward = aggregate(&courses);
        courses.reverse();
        let backward = aggregate(&courses);

        assert_eq!(forward, backward);
    }

    #[test]
    fn inert_records_change_nothing() {
        let base = vec![course(3.0, Grade::APlus), course(3.0, Grade::F)];
        let mut padded = base.clone();
        padded.push(course(0.0, Grade::AZero));
        padded.push(course(-3.0, Grade::APlus));
        padded.push(course(3.0, Grade::Unscored));
        padded.push(CourseRecord::new("in progress".to_string(), 3.0));

        assert_eq!(aggregate(&base), aggregate(&padded));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let courses = vec![course(3.0, Grade::BPlus), course(4.0, Grade::AZero)];
        assert_eq!(aggregate(&courses), aggregate(&courses));
    }

    #[test]
    fn rounds_once_at_the_end() {
        // 33.0 / 9.0 = 3.666... -> 3.67
        let courses = vec![
            course(3.0, Grade::APlus),
            course(3.0, Grade::BPlus),
            course(3.0, Grade::BZero),
        ];
        let result = aggregate(&courses);
        assert_eq!(result.gpa, Some(3.67));
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        // 1.125 is exactly representable; the half rounds up, not to even
        assert!((round2(1.125) - 1.13).abs() < 1e-9);
        assert!((round2(-1.125) - -1.13).abs() < 1e-9);
        assert!((round2(3.666_666) - 3.67).abs() < 1e-9);
        assert!((round2(2.224) - 2.22).abs() < 1e-9);
        assert!((round2(4.5) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn filters_by_semester() {
        let mut first = course(3.0, Grade::AZero);
        first.set_semester("2025-1".to_string());
        let mut second = course(3.0, Grade::F);
        second.set_semester("2025-2".to_string());
        let courses = vec![first, second];

        let result = semester_gpa(&courses, Some("2025-1"));
        assert!((result.total_credits - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.gpa, Some(4.0));

        // No filter falls back to the full aggregation
        assert_eq!(semester_gpa(&courses, None), aggregate(&courses));
    }

    #[test]
    fn groups_by_semester_latest_first() {
        let mut first = course(3.0, Grade::AZero);
        first.set_semester("2024-2".to_string());
        let mut second = course(3.0, Grade::BZero);
        second.set_semester("2025-1".to_string());
        let unlabeled = course(3.0, Grade::CPlus);
        let courses = vec![first, second, unlabeled];

        let groups = by_semester(&courses);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0.as_deref(), Some("2025-1"));
        assert_eq!(groups[1].0.as_deref(), Some("2024-2"));
        assert_eq!(groups[2].0, None);
        assert_eq!(groups[0].1.gpa, Some(3.0));
        assert_eq!(groups[2].1.gpa, Some(2.5));
    }
}
