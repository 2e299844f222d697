//! Shared helpers for CLI commands.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use qbasis_runner::{ExperimentReport, ExperimentRunner, SuiteConfig};

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text histogram per label.
    Table,
    /// Pretty JSON array of reports.
    Json,
}

/// Run a suite, sequentially or on the blocking pool, behind a spinner.
pub async fn run_suite(
    suite: &SuiteConfig,
    runner: &ExperimentRunner,
    concurrent: bool,
    show_spinner: bool,
) -> Result<Vec<ExperimentReport>> {
    let spinner = if show_spinner {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .context("invalid spinner template")?,
        );
        spinner.set_message(format!("Sampling {} experiments...", suite.experiments.len()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let reports = if concurrent {
        suite.run_concurrent(runner).await
    } else {
        suite.run(runner)
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    Ok(reports?)
}

/// Print reports in the requested format.
pub fn emit(reports: &[ExperimentReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports).context("JSON serialization failed")?;
            println!("{json}");
        }
        OutputFormat::Table => {
            for report in reports {
                print_report(report);
            }
        }
    }
    Ok(())
}

/// Print one report as a text histogram.
pub fn print_report(report: &ExperimentReport) {
    println!(
        "\n{} {} ({} shots)",
        style("✓").green().bold(),
        style(&report.title).bold(),
        report.shots
    );

    for entry in &report.entries {
        println!(
            "  {} {}",
            style(&entry.label).cyan(),
            style(format!("[{}]", entry.program)).dim()
        );
        for line in histogram_lines(&entry.counts) {
            println!("    {line}");
        }
    }

    if let Some(seed) = report.seed {
        println!("\n  Seed: {}", style(seed).yellow());
    }
}

/// One line per outcome: label, count, percentage and a bar of up to 50 cells.
pub fn histogram_lines(counts: &qbasis_adapter_sim::CountDistribution) -> Vec<String> {
    let total = counts.total_shots().max(1) as f64;
    counts
        .iter()
        .map(|(label, count)| {
            let prob = count as f64 / total * 100.0;
            let bar = "█".repeat((prob / 2.0).round() as usize);
            format!("{label}: {count:>6} ({prob:>6.2}%) {bar}")
        })
        .collect()
}
