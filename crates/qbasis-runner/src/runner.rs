//! Experiment orchestration.

use chrono::Utc;
use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use qbasis_adapter_sim::{CountDistribution, SimError};
use qbasis_ir::CircuitProgram;

use crate::error::{RunnerError, RunnerResult};
use crate::report::{ExperimentReport, ReportEntry};

/// Runs labeled circuits for a shared shot count and collects a report.
///
/// Seeding the runner seeds every circuit: circuit `i` gets the `i`-th value
/// of a stream keyed by the base seed, so circuits never share a random
/// sequence and a seeded report is reproducible whether it was sampled
/// sequentially or concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperimentRunner {
    seed: Option<u64>,
}

impl ExperimentRunner {
    /// Create an unseeded runner; every circuit draws from OS entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a runner with an explicit base seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// The base seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Per-circuit seeds for `n` circuits.
    fn circuit_seeds(&self, n: usize) -> Vec<Option<u64>> {
        match self.seed {
            Some(base) => {
                let mut stream = StdRng::seed_from_u64(base);
                (0..n).map(|_| Some(stream.next_u64())).collect()
            }
            None => vec![None; n],
        }
    }

    /// Independent runners for `n` experiments sharing this runner's seed.
    ///
    /// Runner `j` is seeded with the `j`-th value of the base stream, so
    /// circuit `i` of experiment `j` never reuses the seed of circuit `i` in
    /// another experiment. Unseeded runners stay unseeded.
    pub fn per_experiment(&self, n: usize) -> Vec<ExperimentRunner> {
        self.circuit_seeds(n)
            .into_iter()
            .map(|seed| Self { seed })
            .collect()
    }

    /// Sample every circuit in order. Any failure aborts the whole report.
    #[instrument(skip(self, title, circuits), fields(title = tracing::field::Empty))]
    pub fn run_experiment(
        &self,
        title: impl Into<String>,
        circuits: &[(String, CircuitProgram)],
        shot_count: i64,
    ) -> RunnerResult<ExperimentReport> {
        let title = title.into();
        tracing::Span::current().record("title", title.as_str());
        validate_shots(shot_count)?;

        let seeds = self.circuit_seeds(circuits.len());
        let mut results = Vec::with_capacity(circuits.len());
        for ((label, program), seed) in circuits.iter().zip(seeds) {
            debug!(label = %label, program = %program, "sampling circuit");
            results.push(qbasis_adapter_sim::run(program, shot_count, seed)?);
        }

        Ok(self.assemble(title, circuits, shot_count, results))
    }

    /// Sample every circuit on the blocking pool and join the results.
    ///
    /// For a seeded runner the report matches [`Self::run_experiment`].
    pub async fn run_experiment_concurrent(
        &self,
        title: impl Into<String>,
        circuits: Vec<(String, CircuitProgram)>,
        shot_count: i64,
    ) -> RunnerResult<ExperimentReport> {
        let title = title.into();
        validate_shots(shot_count)?;

        let seeds = self.circuit_seeds(circuits.len());
        let handles = circuits
            .iter()
            .zip(seeds)
            .map(|((_, program), seed)| {
                let program = program.clone();
                tokio::task::spawn_blocking(move || {
                    qbasis_adapter_sim::run(&program, shot_count, seed)
                })
            });

        let joined = try_join_all(handles)
            .await
            .map_err(|e| RunnerError::Join(e.to_string()))?;
        let results = joined.into_iter().collect::<Result<Vec<_>, SimError>>()?;

        debug!(title = %title, circuits = circuits.len(), "concurrent sampling joined");
        Ok(self.assemble(title, &circuits, shot_count, results))
    }

    fn assemble(
        &self,
        title: String,
        circuits: &[(String, CircuitProgram)],
        shot_count: i64,
        results: Vec<CountDistribution>,
    ) -> ExperimentReport {
        let entries: Vec<_> = circuits
            .iter()
            .zip(results)
            .map(|((label, program), counts)| ReportEntry {
                label: label.clone(),
                program: program.to_string(),
                basis: program.basis(),
                counts,
            })
            .collect();

        info!(title = %title, circuits = entries.len(), shots = shot_count, "experiment completed");

        ExperimentReport {
            id: Uuid::new_v4(),
            title,
            shots: shot_count as u64,
            seed: self.seed,
            timestamp: Utc::now(),
            entries,
        }
    }
}

fn validate_shots(shot_count: i64) -> RunnerResult<()> {
    if shot_count <= 0 {
        return Err(SimError::InvalidShotCount(shot_count).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbasis_ir::{build_minus_state, build_plus_state, prepare_for_x_basis_measurement};

    fn circuits() -> Vec<(String, CircuitProgram)> {
        vec![
            ("|+>".into(), prepare_for_x_basis_measurement(build_plus_state())),
            ("|->".into(), prepare_for_x_basis_measurement(build_minus_state())),
        ]
    }

    #[test]
    fn test_entries_keep_order() {
        let report = ExperimentRunner::with_seed(5)
            .run_experiment("order", &circuits(), 64)
            .unwrap();
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["|+>", "|->"]);
        assert_eq!(report.entries[0].counts.get("0"), 64);
        assert_eq!(report.entries[1].counts.get("1"), 64);
        assert_eq!(report.seed, Some(5));
    }

    #[test]
    fn test_invalid_shots_abort() {
        let err = ExperimentRunner::new()
            .run_experiment("bad", &circuits(), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Sim(SimError::InvalidShotCount(0))
        ));
    }

    #[test]
    fn test_circuit_seeds_distinct() {
        let seeds = ExperimentRunner::with_seed(1).circuit_seeds(4);
        assert_eq!(seeds.len(), 4);
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(ExperimentRunner::new().circuit_seeds(2), vec![None, None]);
    }

    #[test]
    fn test_per_experiment_seeds_distinct() {
        let runners = ExperimentRunner::with_seed(42).per_experiment(3);
        let seeds: Vec<_> = runners.iter().map(ExperimentRunner::seed).collect();
        assert!(seeds.iter().all(Option::is_some));
        assert_ne!(seeds[0], seeds[1]);
        assert_ne!(seeds[1], seeds[2]);
        assert_ne!(seeds[0], Some(42));

        let unseeded = ExperimentRunner::new().per_experiment(2);
        assert!(unseeded.iter().all(|r| r.seed().is_none()));
    }

    #[test]
    fn test_empty_experiment() {
        let report = ExperimentRunner::new()
            .run_experiment("empty", &[], 10)
            .unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.shots, 10);
    }
}
