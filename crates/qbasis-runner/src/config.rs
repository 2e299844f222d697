//! Suite configuration.
//!
//! A suite is a YAML file listing experiments:
//!
//! ```yaml
//! shots: 1024
//! seed: 7
//! experiments:
//!   - title: Mediciones en Y
//!     output: reports/y.json
//!     circuits:
//!       - { state: plus, basis: y }
//!       - { label: "minus", state: minus, basis: y }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use qbasis_ir::{CircuitProgram, MeasurementBasis, PreparedState};

use crate::error::{RunnerError, RunnerResult};
use crate::report::ExperimentReport;
use crate::runner::ExperimentRunner;

/// Shot count used when a suite does not set one.
pub const DEFAULT_SHOTS: i64 = 1024;

fn default_shots() -> i64 {
    DEFAULT_SHOTS
}

/// One circuit: a named preparation read in a basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircuitSpec {
    /// Legend label; defaults to the ket of `state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Prepared state.
    pub state: PreparedState,
    /// Readout basis.
    #[serde(default)]
    pub basis: MeasurementBasis,
}

impl CircuitSpec {
    /// Circuit for `state` read in `basis`, labeled by its ket.
    pub fn new(state: PreparedState, basis: MeasurementBasis) -> Self {
        Self {
            label: None,
            state,
            basis,
        }
    }

    /// Effective legend label.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.state.ket().to_string())
    }

    /// Build the program this spec describes.
    pub fn program(&self) -> CircuitProgram {
        self.state.build().measured_in(self.basis)
    }
}

/// One experiment: a titled group of circuits sharing a shot count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentSpec {
    /// Histogram title.
    pub title: String,
    /// Where to write the report, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Overrides the suite shot count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<i64>,
    /// Circuits in legend order.
    pub circuits: Vec<CircuitSpec>,
}

impl ExperimentSpec {
    /// Labeled programs in legend order.
    pub fn programs(&self) -> Vec<(String, CircuitProgram)> {
        self.circuits
            .iter()
            .map(|c| (c.label(), c.program()))
            .collect()
    }
}

/// A list of experiments plus shared defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Default shots per circuit.
    #[serde(default = "default_shots")]
    pub shots: i64,
    /// Base seed for every experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Experiments in run order.
    pub experiments: Vec<ExperimentSpec>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
            experiments: vec![],
        }
    }
}

impl SuiteConfig {
    /// Parse a suite from YAML text.
    pub fn from_yaml_str(source: &str) -> RunnerResult<Self> {
        let suite: Self =
            serde_yaml_ng::from_str(source).map_err(|e| RunnerError::Config(e.to_string()))?;
        suite.validate()?;
        Ok(suite)
    }

    /// Load a suite from a YAML file.
    pub fn load(path: &Path) -> RunnerResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            RunnerError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded suite file");
        Self::from_yaml_str(&source)
    }

    /// Reject suites that could only fail at run time.
    pub fn validate(&self) -> RunnerResult<()> {
        if self.shots <= 0 {
            return Err(RunnerError::Config(format!(
                "suite shots must be positive, got {}",
                self.shots
            )));
        }
        for exp in &self.experiments {
            if exp.circuits.is_empty() {
                return Err(RunnerError::Config(format!(
                    "experiment '{}' has no circuits",
                    exp.title
                )));
            }
            if let Some(shots) = exp.shots.filter(|s| *s <= 0) {
                return Err(RunnerError::Config(format!(
                    "experiment '{}' shots must be positive, got {shots}",
                    exp.title
                )));
            }
        }
        Ok(())
    }

    /// Route `paths[i]` to experiment `i`; extra paths are ignored.
    pub fn assign_outputs(&mut self, paths: &[PathBuf]) {
        for (exp, path) in self.experiments.iter_mut().zip(paths) {
            exp.output = Some(path.clone());
        }
    }

    /// Shots used for `exp`.
    pub fn shots_for(&self, exp: &ExperimentSpec) -> i64 {
        exp.shots.unwrap_or(self.shots)
    }

    /// Runner for this suite; `seed_override` wins over the file's seed.
    pub fn runner(&self, seed_override: Option<u64>) -> ExperimentRunner {
        match seed_override.or(self.seed) {
            Some(seed) => ExperimentRunner::with_seed(seed),
            None => ExperimentRunner::new(),
        }
    }

    /// Run every experiment in order, writing reports that have an output.
    ///
    /// Each experiment samples with its own runner from
    /// [`ExperimentRunner::per_experiment`].
    pub fn run(&self, runner: &ExperimentRunner) -> RunnerResult<Vec<ExperimentReport>> {
        let mut reports = Vec::with_capacity(self.experiments.len());
        let runners = runner.per_experiment(self.experiments.len());
        for (exp, runner) in self.experiments.iter().zip(&runners) {
            let report = runner.run_experiment(&exp.title, &exp.programs(), self.shots_for(exp))?;
            if let Some(path) = &exp.output {
                report.write_json(path)?;
                debug!(path = %path.display(), "report written");
            }
            reports.push(report);
        }
        Ok(reports)
    }

    /// Concurrent counterpart of [`Self::run`].
    pub async fn run_concurrent(
        &self,
        runner: &ExperimentRunner,
    ) -> RunnerResult<Vec<ExperimentReport>> {
        let mut reports = Vec::with_capacity(self.experiments.len());
        let runners = runner.per_experiment(self.experiments.len());
        for (exp, runner) in self.experiments.iter().zip(&runners) {
            let report = runner
                .run_experiment_concurrent(&exp.title, exp.programs(), self.shots_for(exp))
                .await?;
            if let Some(path) = &exp.output {
                report.write_json(path)?;
            }
            reports.push(report);
        }
        Ok(reports)
    }
}
