//! Grade scale model
//!
//! The fixed letter-grade to grade-point mapping on the Korean 4.5-point
//! scale. The scale is a closed enumeration and never changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum grade point on the scale (an `A+`)
pub const MAX_GRADE_POINT: f64 = 4.5;

/// Minimum grade point on the scale (an `F`)
pub const MIN_GRADE_POINT: f64 = 0.0;

/// A letter grade on the 4.5-point scale
///
/// `Unscored` (`-` in roster files) marks a course with no grade recorded
/// yet. It maps to no numeric point at all, which keeps an in-progress
/// course distinct from a zero-point `F` everywhere downstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (4.5)
    #[serde(rename = "A+")]
    APlus,
    /// A0 (4.0)
    #[serde(rename = "A0")]
    AZero,
    /// B+ (3.5)
    #[serde(rename = "B+")]
    BPlus,
    /// B0 (3.0)
    #[serde(rename = "B0")]
    BZero,
    /// C+ (2.5)
    #[serde(rename = "C+")]
    CPlus,
    /// C0 (2.0)
    #[serde(rename = "C0")]
    CZero,
    /// D+ (1.5)
    #[serde(rename = "D+")]
    DPlus,
    /// D0 (1.0)
    #[serde(rename = "D0")]
    DZero,
    /// F (0.0)
    F,
    /// No grade recorded yet; contributes nothing to GPA
    #[serde(rename = "-")]
    Unscored,
}

impl Grade {
    /// Get the numeric grade point for this grade
    ///
    /// # Returns
    /// The point on the 0.0–4.5 scale, or `None` for `Unscored`
    #[must_use]
    pub const fn point(self) -> Option<f64> {
        match self {
            Self::APlus => Some(4.5),
            Self::AZero => Some(4.0),
            Self::BPlus => Some(3.5),
            Self::BZero => Some(3.0),
            Self::CPlus => Some(2.5),
            Self::CZero => Some(2.0),
            Self::DPlus => Some(1.5),
            Self::DZero => Some(1.0),
            Self::F => Some(0.0),
            Self::Unscored => None,
        }
    }

    /// Parse a grade symbol as it appears in roster files
    ///
    /// Unrecognized symbols resolve to `None` rather than an error so that
    /// one malformed record never invalidates a whole roster.
    #[must_use]
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "A+" => Some(Self::APlus),
            "A0" => Some(Self::AZero),
            "B+" => Some(Self::BPlus),
            "B0" => Some(Self::BZero),
            "C+" => Some(Self::CPlus),
            "C0" => Some(Self::CZero),
            "D+" => Some(Self::DPlus),
            "D0" => Some(Self::DZero),
            "F" => Some(Self::F),
            "-" => Some(Self::Unscored),
            _ => None,
        }
    }

    /// Get the display symbol for this grade
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::AZero => "A0",
            Self::BPlus => "B+",
            Self::BZero => "B0",
            Self::CPlus => "C+",
            Self::CZero => "C0",
            Self::DPlus => "D+",
            Self::DZero => "D0",
            Self::F => "F",
            Self::Unscored => "-",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Resolve an optional grade to its numeric point
///
/// Pure total function: absent grades and `Unscored` both resolve to
/// `None`, the "excluded from aggregation" state.
#[must_use]
pub fn point_for(grade: Option<Grade>) -> Option<f64> {
    grade.and_then(Grade::point)
}
