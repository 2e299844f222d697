//! qbasis Circuit Intermediate Representation
//!
//! Data structures for single-qubit state preparation and basis-change
//! programs. Nothing here simulates anything; the simulator lives in
//! `qbasis-adapter-sim`.
//!
//! # Core Components
//!
//! - **Gates**: [`Gate`] is a closed set of unitaries (H, Z, S†) with their
//!   [`Matrix2`] representation
//! - **Bases**: [`MeasurementBasis`] and the rotation each one needs before a
//!   computational-basis readout
//! - **Programs**: [`CircuitProgram`], built through [`CircuitBuilder`]
//!
//! # Example: |−⟩ Read in the X Basis
//!
//! ```rust
//! use qbasis_ir::{build_minus_state, prepare_for_x_basis_measurement, Gate};
//!
//! let program = prepare_for_x_basis_measurement(build_minus_state());
//! let gates: Vec<_> = program.gates().collect();
//! assert_eq!(gates, vec![Gate::H, Gate::Z, Gate::H]);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Matrix |
//! |------|--------|
//! | `H` | (1/√2) [[1, 1], [1, −1]] |
//! | `Z` | [[1, 0], [0, −1]] |
//! | `Sdg` | [[1, 0], [0, −i]] |

pub mod error;
pub mod gate;
pub mod program;

pub use error::{IrError, IrResult};
pub use gate::{Gate, Matrix2};
pub use program::{
    CircuitBuilder, CircuitProgram, MeasurementBasis, Outcome, PreparedState, build_minus_state,
    build_plus_state, prepare_for_x_basis_measurement, prepare_for_y_basis_measurement,
};
