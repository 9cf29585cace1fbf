//! The `autograde validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(attempt_set_path: PathBuf) -> Result<()> {
    let sets = if attempt_set_path.is_dir() {
        autograde_core::parser::load_attempt_directory(&attempt_set_path)?
    } else {
        vec![autograde_core::parser::parse_attempt_set(&attempt_set_path)?]
    };

    let mut total_warnings = 0;

    for set in &sets {
        println!("Attempt set: {} ({} attempts)", set.name, set.attempts.len());

        let warnings = autograde_core::parser::validate_attempt_set(set);
        for w in &warnings {
            let prefix = w
                .attempt_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All attempt sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
