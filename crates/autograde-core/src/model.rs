//! Core data model types for autograde.
//!
//! These are the value objects the grading engine consumes: test points,
//! grade scales, attempts, and the grades the engine hands back. Everything
//! here is immutable once constructed; the engine never mutates its input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One gradable question: the correct answer set and the learner's
/// chosen answer set.
///
/// Answer indices are deduplicated into sets on construction; order and
/// repetition in the source lists carry no meaning. Either set may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPoint {
    /// Answer indices deemed correct.
    pub correct: HashSet<u32>,
    /// Answer indices the learner selected.
    pub chosen: HashSet<u32>,
}

impl TestPoint {
    /// Build a test point from raw answer-index lists, collapsing
    /// duplicates.
    pub fn new(
        correct: impl IntoIterator<Item = u32>,
        chosen: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            correct: correct.into_iter().collect(),
            chosen: chosen.into_iter().collect(),
        }
    }
}

/// The three percentage thresholds separating grade tiers.
///
/// Bounds are expected to be descending and within 0–100, but nothing here
/// enforces that; the engine processes degenerate scales as-is and the
/// parser layer surfaces them as warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeScale {
    pub excellent_lower_bound: i32,
    pub good_lower_bound: i32,
    pub satisfactory_lower_bound: i32,
}

impl GradeScale {
    pub fn new(excellent: i32, good: i32, satisfactory: i32) -> Self {
        Self {
            excellent_lower_bound: excellent,
            good_lower_bound: good,
            satisfactory_lower_bound: satisfactory,
        }
    }
}

/// One learner's attempt: an ordered sequence of test points plus the scale
/// to classify the aggregate percentage against. The sequence may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// Identifier for reporting; the engine itself ignores it.
    #[serde(default)]
    pub id: String,
    pub points: Vec<TestPoint>,
    pub scale: GradeScale,
}

/// The discrete grade tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Nothing to grade (the attempt had no test points).
    NoGrade,
    Excellent,
    Good,
    Satisfactory,
    Unsatisfactory,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::NoGrade => write!(f, "no_grade"),
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Satisfactory => write!(f, "satisfactory"),
            Grade::Unsatisfactory => write!(f, "unsatisfactory"),
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no_grade" | "none" => Ok(Grade::NoGrade),
            "excellent" => Ok(Grade::Excellent),
            "good" => Ok(Grade::Good),
            "satisfactory" => Ok(Grade::Satisfactory),
            "unsatisfactory" => Ok(Grade::Unsatisfactory),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

/// A named collection of attempts, typically one quiz's submissions.
///
/// Each attempt carries its own resolved [`GradeScale`]; the set-wide
/// default from the source file is applied during parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

/// Sentinel percent for an attempt with no test points.
pub const UNGRADED_PERCENT: i32 = -1;

/// What the engine hands back: the rounded percentage of passed points
/// (or [`UNGRADED_PERCENT`]) and the grade it classifies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCheckingResult {
    pub grade: Grade,
    pub percent: i32,
}

impl AttemptCheckingResult {
    /// `false` only for the empty-attempt sentinel result.
    pub fn is_gradable(&self) -> bool {
        self.percent != UNGRADED_PERCENT
    }
}
