//! Batch statistics over a set of graded attempts.

use serde::{Deserialize, Serialize};

use crate::model::{Attempt, Grade};
use crate::report::AttemptOutcome;

/// Count of outcomes per grade tier.
///
/// One counter per variant rather than a map keyed by grade, so adding a
/// tier to [`Grade`] breaks compilation here instead of silently dropping
/// counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDistribution {
    pub no_grade: usize,
    pub excellent: usize,
    pub good: usize,
    pub satisfactory: usize,
    pub unsatisfactory: usize,
}

impl GradeDistribution {
    pub fn record(&mut self, grade: Grade) {
        match grade {
            Grade::NoGrade => self.no_grade += 1,
            Grade::Excellent => self.excellent += 1,
            Grade::Good => self.good += 1,
            Grade::Satisfactory => self.satisfactory += 1,
            Grade::Unsatisfactory => self.unsatisfactory += 1,
        }
    }

    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::NoGrade => self.no_grade,
            Grade::Excellent => self.excellent,
            Grade::Good => self.good,
            Grade::Satisfactory => self.satisfactory,
            Grade::Unsatisfactory => self.unsatisfactory,
        }
    }

    pub fn total(&self) -> usize {
        self.no_grade + self.excellent + self.good + self.satisfactory + self.unsatisfactory
    }
}

/// Aggregate statistics across all attempts in a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    /// Attempts that had at least one point.
    pub graded: usize,
    /// Attempts that hit the empty-points sentinel.
    pub ungraded: usize,
    /// Mean percent over graded attempts (0.0 when none).
    pub mean_percent: f64,
    /// Outcome count per grade tier.
    pub distribution: GradeDistribution,
    /// Pass rate per point index across attempts that have that point.
    ///
    /// Meaningful when every attempt answers the same question sequence,
    /// which is the normal shape of a quiz's submissions.
    pub point_pass_rates: Vec<f64>,
}

/// Compute batch statistics. `attempts` and `outcomes` must be parallel,
/// as produced by [`crate::report::GradingReport::build`].
pub fn compute_batch_stats(attempts: &[Attempt], outcomes: &[AttemptOutcome]) -> BatchStats {
    let mut distribution = GradeDistribution::default();
    let mut graded = 0usize;
    let mut ungraded = 0usize;
    let mut percent_sum = 0i64;

    for outcome in outcomes {
        distribution.record(outcome.grade);
        if outcome.percent < 0 {
            ungraded += 1;
        } else {
            graded += 1;
            percent_sum += i64::from(outcome.percent);
        }
    }

    let mean_percent = if graded == 0 {
        0.0
    } else {
        percent_sum as f64 / graded as f64
    };

    let max_points = attempts.iter().map(|a| a.points.len()).max().unwrap_or(0);
    let mut point_pass_rates = Vec::with_capacity(max_points);
    for i in 0..max_points {
        let mut answered = 0usize;
        let mut passed = 0usize;
        for attempt in attempts {
            if let Some(point) = attempt.points.get(i) {
                answered += 1;
                if point.chosen == point.correct {
                    passed += 1;
                }
            }
        }
        point_pass_rates.push(passed as f64 / answered.max(1) as f64);
    }

    BatchStats {
        graded,
        ungraded,
        mean_percent,
        distribution,
        point_pass_rates,
    }
}
