//! Shot sampling over a simulated program.

use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, instrument};

use qbasis_ir::CircuitProgram;

use crate::error::{SimError, SimResult};
use crate::result::CountDistribution;
use crate::statevector::{NORM_TOLERANCE, StateVector};

/// Replay `program` on a fresh |0⟩ and return `(p0, p1)`.
pub fn exact_probabilities(program: &CircuitProgram) -> SimResult<(f64, f64)> {
    let mut sv = StateVector::new();
    sv.apply_all(program.gates())?;

    let (p0, p1) = sv.probabilities();
    if (p0 + p1 - 1.0).abs() > NORM_TOLERANCE {
        return Err(SimError::InvalidState(format!(
            "probabilities sum to {} for program '{}'",
            p0 + p1,
            program.name()
        )));
    }
    Ok((p0, p1))
}

/// Sample `shot_count` readouts of `program`.
///
/// With `Some(seed)` the result is reproducible; `None` draws a fresh seed
/// from OS entropy.
pub fn run(
    program: &CircuitProgram,
    shot_count: i64,
    seed: Option<u64>,
) -> SimResult<CountDistribution> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with_rng(program, shot_count, &mut rng)
}

/// Sample `shot_count` readouts of `program` using the supplied generator.
#[instrument(skip(program, rng), fields(program = program.name(), basis = %program.basis()))]
pub fn run_with_rng<R: Rng + ?Sized>(
    program: &CircuitProgram,
    shot_count: i64,
    rng: &mut R,
) -> SimResult<CountDistribution> {
    if shot_count <= 0 {
        return Err(SimError::InvalidShotCount(shot_count));
    }
    let shots = shot_count as u64;
    let start = Instant::now();

    let (_, p1) = exact_probabilities(program)?;
    // Rounding can leave p1 a hair outside [0, 1].
    let dist = Bernoulli::new(p1.clamp(0.0, 1.0))
        .map_err(|e| SimError::InvalidState(format!("bad readout probability {p1}: {e}")))?;

    let mut ones = 0_u64;
    for _ in 0..shots {
        if dist.sample(rng) {
            ones += 1;
        }
    }

    debug!(shots, ones, p1, elapsed = ?start.elapsed(), "sampling completed");

    CountDistribution::from_ones(shots, ones)
        .ok_or_else(|| SimError::InvalidState(format!("{ones} ones out of {shots} shots")))
}
