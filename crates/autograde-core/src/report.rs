//! Grading report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{check_attempt, passed_points};
use crate::model::{Attempt, AttemptSet, Grade};
use crate::statistics::{compute_batch_stats, BatchStats};

/// The graded outcome of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub attempt_id: String,
    pub points_total: usize,
    pub points_passed: usize,
    /// Rounded percent, or -1 for an attempt with no points.
    pub percent: i32,
    pub grade: Grade,
}

impl AttemptOutcome {
    /// Grade one attempt and capture the outcome alongside the
    /// passed/total breakdown.
    pub fn from_attempt(attempt: &Attempt) -> Self {
        let result = check_attempt(attempt);
        Self {
            attempt_id: attempt.id.clone(),
            points_total: attempt.points.len(),
            points_passed: passed_points(&attempt.points),
            percent: result.percent,
            grade: result.grade,
        }
    }
}

/// Summary of an attempt set (without the full attempt definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSetSummary {
    pub id: String,
    pub name: String,
    pub attempt_count: usize,
}

/// A complete grading report for one attempt set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the graded attempt set.
    pub attempt_set: AttemptSetSummary,
    /// Per-attempt outcomes, in attempt order.
    pub outcomes: Vec<AttemptOutcome>,
    /// Aggregate statistics.
    pub stats: BatchStats,
}

impl GradingReport {
    /// Grade every attempt in the set and assemble the report.
    pub fn build(set: &AttemptSet) -> Self {
        let outcomes: Vec<AttemptOutcome> = set
            .attempts
            .iter()
            .map(AttemptOutcome::from_attempt)
            .collect();

        let stats = compute_batch_stats(&set.attempts, &outcomes);

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            attempt_set: AttemptSetSummary {
                id: set.id.clone(),
                name: set.name.clone(),
                attempt_count: set.attempts.len(),
            },
            outcomes,
            stats,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradingReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradeScale, TestPoint};

    fn sample_set() -> AttemptSet {
        AttemptSet {
            id: "quiz-1".into(),
            name: "Quiz 1".into(),
            description: String::new(),
            attempts: vec![
                Attempt {
                    id: "learner-1".into(),
                    points: vec![
                        TestPoint::new([0, 1], [1, 0]),
                        TestPoint::new([2], [3]),
                    ],
                    scale: GradeScale::new(90, 60, 40),
                },
                Attempt {
                    id: "learner-2".into(),
                    points: vec![],
                    scale: GradeScale::new(90, 60, 40),
                },
            ],
        }
    }

    #[test]
    fn build_grades_every_attempt() {
        let report = GradingReport::build(&sample_set());
        assert_eq!(report.attempt_set.attempt_count, 2);
        assert_eq!(report.outcomes.len(), 2);

        let first = &report.outcomes[0];
        assert_eq!(first.attempt_id, "learner-1");
        assert_eq!(first.points_total, 2);
        assert_eq!(first.points_passed, 1);
        assert_eq!(first.percent, 50);
        assert_eq!(first.grade, Grade::Satisfactory);

        let second = &report.outcomes[1];
        assert_eq!(second.percent, -1);
        assert_eq!(second.grade, Grade::NoGrade);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/quiz-1.json");

        let report = GradingReport::build(&sample_set());
        report.save_json(&path).unwrap();

        let loaded = GradingReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.outcomes.len(), 2);
        assert_eq!(loaded.outcomes[1].percent, -1);
        assert_eq!(loaded.stats.ungraded, 1);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(GradingReport::load_json(&path).is_err());
    }
}
