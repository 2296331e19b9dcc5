#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # patgrade
//!
//! Grades a JSON submission against the built-in Regex Tutorial.
//!
//! A submission is a JSON object mapping names to values, e.g.
//! `{"TASK1_REGEX": "cat", "TASK2_REGEX": "...", "source": "..."}`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use patgrade::{JsonSubmission, Submission, grade::show_result, regex_tutorial};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// How to print a report.
#[derive(Debug, Clone, Copy)]
enum Format {
    /// A human-readable table.
    Table,
    /// The report as JSON.
    Json,
    /// Gradescope `results.json`.
    Gradescope,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "gradescope" => Ok(Self::Gradescope),
            other => Err(format!("unknown format `{other}` (expected table, json or gradescope)")),
        }
    }
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a submission file
    Grade {
        /// Path to the submission JSON
        submission: PathBuf,
        /// Output format
        format:     Format,
        /// Where to write the output, stdout if absent
        output:     Option<PathBuf>,
        /// Enable debug logging
        verbose:    bool,
    },
    /// List the questions and their budgets
    List,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the submission path
    fn s() -> impl Parser<PathBuf> {
        positional("SUBMISSION").help("Path to a JSON submission")
    }

    let format = long("format")
        .short('f')
        .help("Output format: table, json or gradescope")
        .argument::<Format>("FORMAT")
        .fallback(Format::Table);
    let output = long("output")
        .short('o')
        .help("Write output to this file instead of stdout")
        .argument::<PathBuf>("PATH")
        .optional();
    let verbose = long("verbose")
        .short('v')
        .help("Log every failed check")
        .switch();
    let submission = s();

    let grade = construct!(Cmd::Grade {
        verbose,
        format,
        output,
        submission
    })
    .to_options()
    .command("grade")
    .help("Grade a submission against the Regex Tutorial");

    let list = pure(Cmd::List)
        .to_options()
        .command("list")
        .help("List questions and their point budgets");

    let cmd = construct!([grade, list]);

    cmd.to_options()
        .descr("Autograder for pattern-matching assignments")
        .run()
}

/// Installs the fmt subscriber at `level`.
fn init_tracing(level: Level) {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
}

/// Grades `path` and renders the report in `format`.
fn grade(path: &Path, format: Format) -> Result<String> {
    let loaded = match JsonSubmission::from_path(path) {
        Ok(submission) => Some(submission),
        Err(e) => {
            tracing::warn!("{e:#}; grading as an empty submission");
            None
        }
    };

    let report = regex_tutorial().grade(loaded.as_ref().map(|s| s as &dyn Submission));

    let rendered = match format {
        Format::Table => {
            let summary = format!("{:.2}/{:.2}", report.total(), report.total_max());
            let summary = if report.total() >= report.total_max() {
                summary.green().bold()
            } else {
                summary.yellow().bold()
            };
            format!("{}\n{} {}", show_result(&report), "Score:".bold(), summary)
        }
        Format::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        }
        Format::Gradescope => report.to_gradescope_json()?,
    };

    Ok(rendered)
}

fn main() -> Result<()> {
    dotenv().ok();

    match options() {
        Cmd::Grade {
            submission,
            format,
            output,
            verbose,
        } => {
            init_tracing(if verbose { Level::DEBUG } else { Level::INFO });
            let rendered = grade(&submission, format)?;
            match output {
                Some(path) => std::fs::write(&path, rendered)
                    .with_context(|| format!("Could not write {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
        Cmd::List => {
            let assignment = regex_tutorial();
            println!("{}", assignment.name().bold());
            for q in assignment.questions() {
                println!("  {} ({} points)", q.title(), q.max_points());
            }
            println!("Total: {} points", assignment.total_max());
        }
    };

    Ok(())
}
