//! The `autograde init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("attempt-sets")?;
    let example_path = std::path::Path::new("attempt-sets/example.toml");
    if example_path.exists() {
        println!("attempt-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ATTEMPT_SET)?;
        println!("Created attempt-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit attempt-sets/example.toml with real submissions");
    println!("  2. Run: autograde validate --attempt-set attempt-sets/example.toml");
    println!("  3. Run: autograde grade --attempt-set attempt-sets/example.toml");

    Ok(())
}

const EXAMPLE_ATTEMPT_SET: &str = r#"[attempt_set]
id = "example"
name = "Example Quiz"
description = "A simple example attempt set to get started"

# Percent lower bounds for each grade tier.
[attempt_set.grade_scale]
excellent = 90
good = 60
satisfactory = 40

# One attempt per learner. Each point lists the correct answer indices
# and the indices the learner chose; a point passes only when the two
# match exactly.
[[attempts]]
id = "learner-1"

[[attempts.points]]
correct = [0, 1]
chosen = [1, 0]

[[attempts.points]]
correct = [2]
chosen = [2]

[[attempts]]
id = "learner-2"

[[attempts.points]]
correct = [0, 1]
chosen = [0]

[[attempts.points]]
correct = [2]
chosen = [2, 3]
"#;
