//! The grading engine.
//!
//! A total pure function: every attempt, including an empty or internally
//! inconsistent one, yields a well-defined result. Validation of scale
//! ordering and point sanity is deliberately the caller's job (see
//! [`crate::parser::validate_attempt_set`]); the engine never errors.

use crate::model::{Attempt, AttemptCheckingResult, Grade, GradeScale, TestPoint, UNGRADED_PERCENT};

/// Grade one attempt: score each point by exact set equality, aggregate
/// into a rounded percentage, and classify against the scale.
pub fn check_attempt(attempt: &Attempt) -> AttemptCheckingResult {
    let percent = calculate_percent(&attempt.points);
    let grade = classify(percent, &attempt.scale);

    AttemptCheckingResult { grade, percent }
}

/// Number of passed points in a sequence.
///
/// A point passes iff the chosen set equals the correct set exactly. No
/// partial credit: one missing or extra selection fails the whole point.
/// Two empty sets are equal and pass.
pub fn passed_points(points: &[TestPoint]) -> usize {
    points.iter().filter(|p| p.chosen == p.correct).count()
}

fn calculate_percent(points: &[TestPoint]) -> i32 {
    if points.is_empty() {
        return UNGRADED_PERCENT;
    }

    let passed = passed_points(points);
    // Half-way cases round away from zero, matching 1/6 -> 17.
    (passed as f64 / points.len() as f64 * 100.0).round() as i32
}

fn classify(percent: i32, scale: &GradeScale) -> Grade {
    if percent < 0 {
        return Grade::NoGrade;
    }

    if percent >= scale.excellent_lower_bound {
        return Grade::Excellent;
    }

    if percent >= scale.good_lower_bound {
        return Grade::Good;
    }

    if percent >= scale.satisfactory_lower_bound {
        return Grade::Satisfactory;
    }

    Grade::Unsatisfactory
}
