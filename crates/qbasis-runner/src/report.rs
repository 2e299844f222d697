//! Experiment report structure.
//!
//! The data handed to rendering collaborators: a title plus labeled count
//! distributions in the order the circuits were given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use qbasis_adapter_sim::CountDistribution;
use qbasis_ir::MeasurementBasis;

use crate::error::RunnerResult;

/// One labeled histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Legend label, e.g. `|+>`.
    pub label: String,
    /// Rendered gate sequence of the program that produced the counts.
    pub program: String,
    /// Basis the qubit was read in.
    pub basis: MeasurementBasis,
    /// Observed counts.
    pub counts: CountDistribution,
}

/// Complete report for one experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Unique report id.
    pub id: Uuid,
    /// Experiment title.
    pub title: String,
    /// Shots per circuit.
    pub shots: u64,
    /// Base seed, if the run was seeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Time the report was produced.
    pub timestamp: DateTime<Utc>,
    /// Labeled results in input order.
    pub entries: Vec<ReportEntry>,
}

impl ExperimentReport {
    /// Find an entry by label.
    pub fn entry(&self, label: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Whether two reports carry the same measurements, ignoring id and time.
    pub fn same_results(&self, other: &Self) -> bool {
        self.title == other.title && self.shots == other.shots && self.entries == other.entries
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> RunnerResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
