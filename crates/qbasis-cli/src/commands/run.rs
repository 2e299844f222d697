//! Run command implementation.

use anyhow::Result;
use console::style;

use qbasis_ir::{MeasurementBasis, PreparedState};
use qbasis_runner::ExperimentRunner;

use super::common::{OutputFormat, emit};

/// Execute the run command.
pub fn execute(
    state: PreparedState,
    basis: MeasurementBasis,
    shots: i64,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Table {
        println!(
            "{} Measuring {} in the {} basis ({} shots)",
            style("→").cyan().bold(),
            style(state.ket()).green(),
            style(basis.name().to_uppercase()).yellow(),
            shots
        );
    }

    let program = state.build().measured_in(basis);
    let runner = seed.map_or_else(ExperimentRunner::new, ExperimentRunner::with_seed);
    let title = format!("{} in {}", state.ket(), basis.name().to_uppercase());
    let report = runner.run_experiment(title, &[(state.ket().to_string(), program)], shots)?;

    emit(&[report], format)
}
