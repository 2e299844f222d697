//! qbasis Single-Qubit Simulator
//!
//! Replays a [`CircuitProgram`](qbasis_ir::CircuitProgram) on a two-amplitude
//! statevector and samples computational-basis readouts from it.
//!
//! # Features
//!
//! - **Exact Probabilities**: [`exact_probabilities`] returns the Born-rule
//!   distribution without sampling noise
//! - **Seeded Sampling**: [`run`] takes an optional seed; the same seed and
//!   shot count always give the same [`CountDistribution`]
//! - **Injected Randomness**: [`run_with_rng`] accepts any [`rand::Rng`]
//!
//! # Example
//!
//! ```rust
//! use qbasis_adapter_sim::run;
//! use qbasis_ir::{build_plus_state, prepare_for_x_basis_measurement};
//!
//! let program = prepare_for_x_basis_measurement(build_plus_state());
//! let counts = run(&program, 1000, Some(7)).unwrap();
//!
//! // |+⟩ read in the X basis always gives 0
//! assert_eq!(counts.get("0"), 1000);
//! ```

mod error;
mod result;
mod sampler;
mod statevector;

pub use error::{SimError, SimResult};
pub use result::CountDistribution;
pub use sampler::{exact_probabilities, run, run_with_rng};
pub use statevector::{NORM_TOLERANCE, StateVector};
