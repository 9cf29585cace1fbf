//! The `autograde grade` command.

use std::path::PathBuf;

use anyhow::Result;

use autograde_core::model::UNGRADED_PERCENT;
use autograde_core::parser;
use autograde_core::report::GradingReport;

pub fn execute(attempt_set_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "table" | "json"),
        "unknown format: {format} (expected table or json)"
    );

    let sets = if attempt_set_path.is_dir() {
        parser::load_attempt_directory(&attempt_set_path)?
    } else {
        vec![parser::parse_attempt_set(&attempt_set_path)?]
    };

    anyhow::ensure!(!sets.is_empty(), "no attempt sets found");

    let mut reports = Vec::with_capacity(sets.len());
    for set in &sets {
        for w in parser::validate_attempt_set(set) {
            tracing::warn!(
                set = %set.id,
                attempt = w.attempt_id.as_deref().unwrap_or("-"),
                "{}",
                w.message
            );
        }

        reports.push(GradingReport::build(set));
    }

    match format.as_str() {
        "json" => {
            if reports.len() == 1 {
                println!("{}", serde_json::to_string_pretty(&reports[0])?);
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        _ => {
            for report in &reports {
                print_report(report);
            }
        }
    }

    if let Some(output_path) = output {
        anyhow::ensure!(
            reports.len() == 1,
            "--output supports a single attempt set, got {}",
            reports.len()
        );
        reports[0].save_json(&output_path)?;
        eprintln!("Report saved to: {}", output_path.display());
    }

    Ok(())
}

fn print_report(report: &GradingReport) {
    use comfy_table::{Cell, Table};

    println!(
        "Attempt set: {} ({} attempts)",
        report.attempt_set.name, report.attempt_set.attempt_count
    );

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Passed", "Percent", "Grade"]);

    for outcome in &report.outcomes {
        let percent = if outcome.percent == UNGRADED_PERCENT {
            "-".to_string()
        } else {
            format!("{}%", outcome.percent)
        };
        table.add_row(vec![
            Cell::new(&outcome.attempt_id),
            Cell::new(format!(
                "{}/{}",
                outcome.points_passed, outcome.points_total
            )),
            Cell::new(percent),
            Cell::new(outcome.grade.to_string()),
        ]);
    }

    println!("{table}");

    let stats = &report.stats;
    println!(
        "Summary: {} graded, {} ungraded, mean {:.1}%",
        stats.graded, stats.ungraded, stats.mean_percent
    );
    println!(
        "Grades: {} excellent, {} good, {} satisfactory, {} unsatisfactory, {} no_grade\n",
        stats.distribution.excellent,
        stats.distribution.good,
        stats.distribution.satisfactory,
        stats.distribution.unsatisfactory,
        stats.distribution.no_grade
    );
}
