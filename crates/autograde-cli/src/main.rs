//! autograde CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "autograde", version, about = "Multiple-choice attempt grading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade attempt sets
    Grade {
        /// Path to .toml attempt set or directory
        #[arg(long)]
        attempt_set: PathBuf,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Write a JSON grading report to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate attempt set TOML files
    Validate {
        /// Path to attempt set file or directory
        #[arg(long)]
        attempt_set: PathBuf,
    },

    /// Create an example attempt set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("autograde=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            attempt_set,
            format,
            output,
        } => commands::grade::execute(attempt_set, format, output),
        Commands::Validate { attempt_set } => commands::validate::execute(attempt_set),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
