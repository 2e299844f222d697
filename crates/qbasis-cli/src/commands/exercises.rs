//! Exercises command implementation.
//!
//! Runs the fixed X/Z/Y exercise catalogue; the i-th output path receives the
//! i-th report.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use qbasis_runner::exercises::catalogue;

use super::common::{OutputFormat, emit, run_suite};

/// Execute the exercises command.
pub async fn execute(
    outputs: &[PathBuf],
    shots: i64,
    seed: Option<u64>,
    format: OutputFormat,
    concurrent: bool,
) -> Result<()> {
    let mut suite = catalogue();
    suite.shots = shots;
    suite.assign_outputs(outputs);
    if outputs.len() > suite.experiments.len() {
        tracing::warn!(
            extra = outputs.len() - suite.experiments.len(),
            "more output paths than exercises; extras ignored"
        );
    }

    let runner = suite.runner(seed);
    let reports = run_suite(&suite, &runner, concurrent, format == OutputFormat::Table).await?;
    emit(&reports, format)?;

    if format == OutputFormat::Table {
        for exp in &suite.experiments {
            if let Some(path) = &exp.output {
                println!(
                    "  {} {} → {}",
                    style("Saved").green(),
                    exp.title,
                    style(path.display()).dim()
                );
            }
        }
    }

    Ok(())
}
