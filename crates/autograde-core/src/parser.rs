//! TOML attempt-set parser.
//!
//! Loads attempt sets from TOML files and directories, and validates them.
//! Parsing is where wire-level answer-index lists become sets: duplicates
//! collapse here, so the engine only ever sees deduplicated points.

use std::path::Path;

use serde::Deserialize;

use crate::error::AttemptSetError;
use crate::model::{Attempt, AttemptSet, GradeScale, TestPoint};

/// Intermediate TOML structure for parsing attempt-set files.
#[derive(Debug, Deserialize)]
struct TomlAttemptFile {
    attempt_set: TomlAttemptSetHeader,
    #[serde(default)]
    attempts: Vec<TomlAttempt>,
}

#[derive(Debug, Deserialize)]
struct TomlAttemptSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    grade_scale: TomlGradeScale,
}

#[derive(Debug, Deserialize)]
struct TomlGradeScale {
    excellent: i32,
    good: i32,
    satisfactory: i32,
}

#[derive(Debug, Deserialize)]
struct TomlAttempt {
    id: String,
    #[serde(default)]
    grade_scale: Option<TomlGradeScale>,
    #[serde(default)]
    points: Vec<TomlTestPoint>,
}

#[derive(Debug, Deserialize)]
struct TomlTestPoint {
    #[serde(default)]
    correct: Vec<u32>,
    #[serde(default)]
    chosen: Vec<u32>,
}

impl TomlGradeScale {
    fn resolve(&self) -> GradeScale {
        GradeScale::new(self.excellent, self.good, self.satisfactory)
    }
}

/// Parse a single TOML file into an [`AttemptSet`].
pub fn parse_attempt_set(path: &Path) -> Result<AttemptSet, AttemptSetError> {
    let content = std::fs::read_to_string(path).map_err(|source| AttemptSetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_attempt_set_str(&content, path)
}

/// Parse a TOML string into an [`AttemptSet`] (useful for testing).
pub fn parse_attempt_set_str(
    content: &str,
    source_path: &Path,
) -> Result<AttemptSet, AttemptSetError> {
    let parsed: TomlAttemptFile =
        toml::from_str(content).map_err(|source| AttemptSetError::Toml {
            path: source_path.to_path_buf(),
            source,
        })?;

    let default_scale = parsed.attempt_set.grade_scale.resolve();

    let attempts = parsed
        .attempts
        .into_iter()
        .map(|a| {
            let scale = a
                .grade_scale
                .map(|s| s.resolve())
                .unwrap_or(default_scale);

            let points = a
                .points
                .into_iter()
                .map(|p| TestPoint::new(p.correct, p.chosen))
                .collect();

            Attempt {
                id: a.id,
                points,
                scale,
            }
        })
        .collect();

    Ok(AttemptSet {
        id: parsed.attempt_set.id,
        name: parsed.attempt_set.name,
        description: parsed.attempt_set.description,
        attempts,
    })
}

/// Recursively load all `.toml` attempt-set files from a directory.
pub fn load_attempt_directory(dir: &Path) -> Result<Vec<AttemptSet>, AttemptSetError> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        return Err(AttemptSetError::NotADirectory(dir.to_path_buf()));
    }

    for entry in std::fs::read_dir(dir).map_err(|source| AttemptSetError::Io {
        path: dir.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| AttemptSetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_attempt_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_attempt_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from attempt-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The attempt ID (if applicable).
    pub attempt_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an attempt set for common issues.
///
/// All findings are non-fatal: the engine grades degenerate input without
/// error, so ordering and range checks live here, before grading, where a
/// human can act on them.
pub fn validate_attempt_set(set: &AttemptSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate attempt IDs
    let mut seen_ids = std::collections::HashSet::new();
    for attempt in &set.attempts {
        if !seen_ids.insert(&attempt.id) {
            warnings.push(ValidationWarning {
                attempt_id: Some(attempt.id.clone()),
                message: format!("duplicate attempt ID: {}", attempt.id),
            });
        }
    }

    for attempt in &set.attempts {
        let scale = &attempt.scale;

        for (name, bound) in [
            ("excellent", scale.excellent_lower_bound),
            ("good", scale.good_lower_bound),
            ("satisfactory", scale.satisfactory_lower_bound),
        ] {
            if !(0..=100).contains(&bound) {
                warnings.push(ValidationWarning {
                    attempt_id: Some(attempt.id.clone()),
                    message: format!("{name} lower bound {bound} is outside 0-100"),
                });
            }
        }

        if scale.excellent_lower_bound < scale.good_lower_bound
            || scale.good_lower_bound < scale.satisfactory_lower_bound
        {
            warnings.push(ValidationWarning {
                attempt_id: Some(attempt.id.clone()),
                message: format!(
                    "grade scale bounds are not descending: ({}, {}, {})",
                    scale.excellent_lower_bound,
                    scale.good_lower_bound,
                    scale.satisfactory_lower_bound
                ),
            });
        }

        if attempt.points.is_empty() {
            warnings.push(ValidationWarning {
                attempt_id: Some(attempt.id.clone()),
                message: "attempt has no test points and will grade as no_grade".into(),
            });
        }

        for (i, point) in attempt.points.iter().enumerate() {
            if point.correct.is_empty() {
                warnings.push(ValidationWarning {
                    attempt_id: Some(attempt.id.clone()),
                    message: format!(
                        "point {i} has an empty correct set; it passes only if nothing is chosen"
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[attempt_set]
id = "quiz-1"
name = "Quiz 1"
description = "First quiz of the term"

[attempt_set.grade_scale]
excellent = 90
good = 60
satisfactory = 40

[[attempts]]
id = "learner-1"

[[attempts.points]]
correct = [0, 1]
chosen = [1, 0, 1]

[[attempts.points]]
correct = [2]
chosen = [3]

[[attempts]]
id = "learner-2"

[attempts.grade_scale]
excellent = 75
good = 50
satisfactory = 25

[[attempts.points]]
correct = [0]
chosen = [0]
"#;

    #[test]
    fn parse_valid_toml() {
        let set = parse_attempt_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.id, "quiz-1");
        assert_eq!(set.name, "Quiz 1");
        assert_eq!(set.attempts.len(), 2);

        // Duplicates in the chosen list collapse into a set.
        let first = &set.attempts[0];
        assert_eq!(first.points[0].chosen.len(), 2);
        assert_eq!(first.scale, GradeScale::new(90, 60, 40));

        // Per-attempt scale overrides the set default.
        assert_eq!(set.attempts[1].scale, GradeScale::new(75, 50, 25));
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[attempt_set]
id = "minimal"
name = "Minimal"

[attempt_set.grade_scale]
excellent = 90
good = 60
satisfactory = 40
"#;
        let set = parse_attempt_set_str(toml, &PathBuf::from("minimal.toml")).unwrap();
        assert_eq!(set.id, "minimal");
        assert!(set.description.is_empty());
        assert!(set.attempts.is_empty());
    }

    #[test]
    fn parse_rejects_missing_scale() {
        let toml = r#"
[attempt_set]
id = "broken"
name = "Broken"
"#;
        let err = parse_attempt_set_str(toml, &PathBuf::from("broken.toml")).unwrap_err();
        assert!(matches!(err, AttemptSetError::Toml { .. }));
    }

    #[test]
    fn validate_flags_scale_and_point_issues() {
        let toml = r#"
[attempt_set]
id = "messy"
name = "Messy"

[attempt_set.grade_scale]
excellent = 50
good = 90
satisfactory = 120

[[attempts]]
id = "a"

[[attempts]]
id = "a"

[[attempts.points]]
chosen = [1]
"#;
        let set = parse_attempt_set_str(toml, &PathBuf::from("messy.toml")).unwrap();
        let warnings = validate_attempt_set(&set);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();

        assert!(messages.iter().any(|m| m.contains("duplicate attempt ID")));
        assert!(messages.iter().any(|m| m.contains("outside 0-100")));
        assert!(messages.iter().any(|m| m.contains("not descending")));
        assert!(messages.iter().any(|m| m.contains("no test points")));
        assert!(messages.iter().any(|m| m.contains("empty correct set")));
    }

    #[test]
    fn validate_clean_set_has_no_warnings() {
        let set = parse_attempt_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_attempt_set(&set).is_empty());
    }

    #[test]
    fn load_directory_recurses_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(nested.join("also-good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not = [valid").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "not toml").unwrap();

        let sets = load_attempt_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("set.toml");
        std::fs::write(&file, VALID_TOML).unwrap();

        let err = load_attempt_directory(&file).unwrap_err();
        assert!(matches!(err, AttemptSetError::NotADirectory(_)));
    }
}
