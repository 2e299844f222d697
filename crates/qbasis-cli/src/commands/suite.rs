//! Suite command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qbasis_runner::SuiteConfig;

use super::common::{OutputFormat, emit, run_suite};

/// Execute the suite command.
pub async fn execute(
    config: &Path,
    seed: Option<u64>,
    format: OutputFormat,
    concurrent: bool,
) -> Result<()> {
    let suite = SuiteConfig::load(config)
        .with_context(|| format!("Failed to load suite: {}", config.display()))?;

    if format == OutputFormat::Table {
        println!(
            "{} Running {} experiments from {}",
            style("→").cyan().bold(),
            suite.experiments.len(),
            style(config.display()).green()
        );
    }

    let runner = suite.runner(seed);
    let reports = run_suite(&suite, &runner, concurrent, format == OutputFormat::Table).await?;
    emit(&reports, format)
}
