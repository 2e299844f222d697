//! Single-qubit statevector.

use num_complex::Complex64;

use qbasis_ir::{Gate, MeasurementBasis, Outcome};

use crate::error::{SimError, SimResult};

/// Allowed drift of the squared norm before renormalising.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A qubit state a|0⟩ + b|1⟩.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    a: Complex64,
    b: Complex64,
}

impl StateVector {
    /// Create a new statevector initialized to |0⟩.
    pub fn new() -> Self {
        Self {
            a: Complex64::new(1.0, 0.0),
            b: Complex64::new(0.0, 0.0),
        }
    }

    /// The amplitudes `(a, b)`.
    pub fn amplitudes(&self) -> (Complex64, Complex64) {
        (self.a, self.b)
    }

    /// Squared norm |a|² + |b|².
    pub fn norm_sqr(&self) -> f64 {
        self.a.norm_sqr() + self.b.norm_sqr()
    }

    /// Left-multiply by the gate matrix.
    pub fn apply(&mut self, gate: Gate) -> SimResult<()> {
        let (a, b) = gate.matrix().apply(self.a, self.b);
        self.a = a;
        self.b = b;
        self.renormalize()
    }

    /// Apply every gate in order.
    pub fn apply_all(&mut self, gates: impl IntoIterator<Item = Gate>) -> SimResult<()> {
        for gate in gates {
            self.apply(gate)?;
        }
        Ok(())
    }

    fn renormalize(&mut self) -> SimResult<()> {
        let norm_sq = self.norm_sqr();
        if !norm_sq.is_finite() || norm_sq == 0.0 {
            return Err(SimError::InvalidState(format!(
                "degenerate state, squared norm {norm_sq}"
            )));
        }
        if (norm_sq - 1.0).abs() > NORM_TOLERANCE {
            let norm = norm_sq.sqrt();
            self.a /= norm;
            self.b /= norm;
        }
        Ok(())
    }

    /// Computational-basis probabilities `(p0, p1)`.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.a.norm_sqr(), self.b.norm_sqr())
    }

    /// Born-rule probability of reading `outcome` when measuring in `basis`.
    pub fn probability_of(&self, outcome: Outcome, basis: MeasurementBasis) -> SimResult<f64> {
        let mut rotated = *self;
        rotated.apply_all(basis.rotation().iter().copied())?;
        let (p0, p1) = rotated.probabilities();
        Ok(match outcome {
            Outcome::Zero => p0,
            Outcome::One => p1,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_amplitudes(a: Complex64, b: Complex64) -> Self {
        Self { a, b }
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = StateVector::new();
        let (a, b) = sv.amplitudes();
        assert!(approx_eq(a, Complex64::new(1.0, 0.0)));
        assert!(approx_eq(b, Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = StateVector::new();
        sv.apply(Gate::H).unwrap();

        let (a, b) = sv.amplitudes();
        assert!(approx_eq(a, Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(b, Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_minus_state() {
        let mut sv = StateVector::new();
        sv.apply_all([Gate::H, Gate::Z]).unwrap();

        let (a, b) = sv.amplitudes();
        assert!(approx_eq(a, Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(b, Complex64::new(-FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_sdg_phase() {
        let mut sv = StateVector::new();
        sv.apply_all([Gate::H, Gate::Sdg]).unwrap();

        let (_, b) = sv.amplitudes();
        assert!(approx_eq(b, Complex64::new(0.0, -FRAC_1_SQRT_2)));
    }

    #[test]
    fn test_probability_of_x_basis() {
        let mut plus = StateVector::new();
        plus.apply(Gate::H).unwrap();
        let p0 = plus.probability_of(Outcome::Zero, MeasurementBasis::X).unwrap();
        let p1 = plus.probability_of(Outcome::One, MeasurementBasis::X).unwrap();
        assert!((p0 - 1.0).abs() < 1e-12);
        assert!(p1.abs() < 1e-12);
    }

    #[test]
    fn test_probability_of_y_basis_unbiased() {
        let mut plus = StateVector::new();
        plus.apply(Gate::H).unwrap();
        let p0 = plus.probability_of(Outcome::Zero, MeasurementBasis::Y).unwrap();
        assert!((p0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_of_leaves_state_untouched() {
        let mut sv = StateVector::new();
        sv.apply(Gate::H).unwrap();
        let before = sv;
        sv.probability_of(Outcome::One, MeasurementBasis::Y).unwrap();
        assert_eq!(sv, before);
    }

    #[test]
    fn test_renormalizes_drift() {
        let mut sv =
            StateVector::from_amplitudes(Complex64::new(1.0 + 1e-6, 0.0), Complex64::new(0.0, 0.0));
        sv.apply(Gate::Z).unwrap();
        assert!((sv.norm_sqr() - 1.0).abs() < NORM_TOLERANCE);
    }

    #[test]
    fn test_degenerate_state_rejected() {
        let mut sv =
            StateVector::from_amplitudes(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0));
        assert!(matches!(sv.apply(Gate::H), Err(SimError::InvalidState(_))));
    }
}
