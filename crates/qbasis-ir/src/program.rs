//! Circuit programs and the builder API.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;

/// Frame in which the qubit is read out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementBasis {
    /// Computational basis.
    #[default]
    Z,
    /// Plus/minus basis.
    X,
    /// Circular basis.
    Y,
}

impl MeasurementBasis {
    /// Gates that rotate this basis onto the computational basis.
    pub fn rotation(&self) -> &'static [Gate] {
        match self {
            MeasurementBasis::Z => &[],
            MeasurementBasis::X => &[Gate::H],
            MeasurementBasis::Y => &[Gate::Sdg, Gate::H],
        }
    }

    /// Lowercase basis name.
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementBasis::Z => "z",
            MeasurementBasis::X => "x",
            MeasurementBasis::Y => "y",
        }
    }
}

impl std::fmt::Display for MeasurementBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MeasurementBasis {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s.to_lowercase().as_str() {
            "z" => Ok(MeasurementBasis::Z),
            "x" | "pm" | "plus-minus" => Ok(MeasurementBasis::X),
            "y" => Ok(MeasurementBasis::Y),
            _ => Err(IrError::UnknownBasis(s.to_string())),
        }
    }
}

/// A single-qubit readout result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Readout `0`.
    Zero,
    /// Readout `1`.
    One,
}

impl Outcome {
    /// Both outcomes, in label order.
    pub const ALL: [Outcome; 2] = [Outcome::Zero, Outcome::One];

    /// Bitstring label of this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Zero => "0",
            Outcome::One => "1",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Outcome {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s {
            "0" => Ok(Outcome::Zero),
            "1" => Ok(Outcome::One),
            _ => Err(IrError::InvalidOutcome(s.to_string())),
        }
    }
}

/// Named preparation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreparedState {
    /// |+⟩ = H|0⟩.
    Plus,
    /// |−⟩ = ZH|0⟩.
    Minus,
}

impl PreparedState {
    /// Ket notation, used as a default label.
    pub fn ket(&self) -> &'static str {
        match self {
            PreparedState::Plus => "|+>",
            PreparedState::Minus => "|->",
        }
    }

    /// Build the Z-measured program for this state.
    pub fn build(&self) -> CircuitProgram {
        match self {
            PreparedState::Plus => build_plus_state(),
            PreparedState::Minus => build_minus_state(),
        }
    }
}

impl FromStr for PreparedState {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s.to_lowercase().as_str() {
            "plus" | "+" | "|+>" => Ok(PreparedState::Plus),
            "minus" | "-" | "|->" => Ok(PreparedState::Minus),
            _ => Err(IrError::UnknownState(s.to_string())),
        }
    }
}

/// An immutable single-qubit program: preparation gates plus a terminal
/// measurement basis.
///
/// The effective gate sequence is the preparation followed by the basis
/// rotation, so measuring the result in the computational basis is the same
/// as measuring the prepared state in [`CircuitProgram::basis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitProgram {
    name: String,
    preparation: Vec<Gate>,
    basis: MeasurementBasis,
}

impl CircuitProgram {
    /// Program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State-preparation gates.
    pub fn preparation(&self) -> &[Gate] {
        &self.preparation
    }

    /// Measurement basis.
    pub fn basis(&self) -> MeasurementBasis {
        self.basis
    }

    /// All gates in application order, including the basis rotation.
    pub fn gates(&self) -> impl Iterator<Item = Gate> + '_ {
        self.preparation
            .iter()
            .chain(self.basis.rotation())
            .copied()
    }

    /// Number of gates in the effective sequence.
    pub fn num_gates(&self) -> usize {
        self.preparation.len() + self.basis.rotation().len()
    }

    /// Same preparation, measured in `basis` instead.
    #[must_use]
    pub fn measured_in(self, basis: MeasurementBasis) -> Self {
        Self { basis, ..self }
    }
}

impl std::fmt::Display for CircuitProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.name)?;
        for gate in self.gates() {
            write!(f, " {gate}")?;
        }
        write!(f, " measure")
    }
}

/// Builder for [`CircuitProgram`]s.
#[derive(Debug, Clone, Default)]
pub struct CircuitBuilder {
    name: String,
    gates: Vec<Gate>,
}

impl CircuitBuilder {
    /// Start an empty program on |0⟩.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gates: vec![],
        }
    }

    /// Append an arbitrary library gate.
    #[must_use]
    pub fn gate(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Apply Hadamard gate.
    #[must_use]
    pub fn h(self) -> Self {
        self.gate(Gate::H)
    }

    /// Apply Pauli-Z gate.
    #[must_use]
    pub fn z(self) -> Self {
        self.gate(Gate::Z)
    }

    /// Apply S-dagger gate.
    #[must_use]
    pub fn sdg(self) -> Self {
        self.gate(Gate::Sdg)
    }

    /// Finish with a measurement in `basis`.
    pub fn measure(self, basis: MeasurementBasis) -> CircuitProgram {
        CircuitProgram {
            name: self.name,
            preparation: self.gates,
            basis,
        }
    }

    /// Finish with a computational-basis measurement.
    pub fn measure_z(self) -> CircuitProgram {
        self.measure(MeasurementBasis::Z)
    }
}

/// |0⟩ → H → |+⟩, measured in Z.
pub fn build_plus_state() -> CircuitProgram {
    CircuitBuilder::new("plus").h().measure_z()
}

/// |0⟩ → H → Z → |−⟩, measured in Z.
pub fn build_minus_state() -> CircuitProgram {
    CircuitBuilder::new("minus").h().z().measure_z()
}

/// Read `program` in the X basis: its readout rotation becomes H.
///
/// Any basis the program was already measured in is replaced, not stacked.
pub fn prepare_for_x_basis_measurement(program: CircuitProgram) -> CircuitProgram {
    program.measured_in(MeasurementBasis::X)
}

/// Read `program` in the Y basis: its readout rotation becomes S†, H.
///
/// Any basis the program was already measured in is replaced, not stacked.
pub fn prepare_for_y_basis_measurement(program: CircuitProgram) -> CircuitProgram {
    program.measured_in(MeasurementBasis::Y)
}
