//! The fixed single-qubit gate library.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 complex matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2(pub [[Complex64; 2]; 2]);

impl Matrix2 {
    /// Multiply the column vector `(a, b)` from the left.
    #[inline]
    pub fn apply(&self, a: Complex64, b: Complex64) -> (Complex64, Complex64) {
        let m = &self.0;
        (m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0].conj(), m[1][0].conj()],
            [m[0][1].conj(), m[1][1].conj()],
        ])
    }

    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let mut out = [[Complex64::new(0.0, 0.0); 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        Self(out)
    }

    /// Check `U† U = I` within `tol` per entry.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let product = self.dagger().matmul(self);
        let identity = [[1.0, 0.0], [0.0, 1.0]];
        product
            .0
            .iter()
            .zip(identity.iter())
            .all(|(row, id_row)| {
                row.iter()
                    .zip(id_row.iter())
                    .all(|(c, &e)| (c - Complex64::new(e, 0.0)).norm() < tol)
            })
    }
}

/// The closed set of gates a circuit program may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Pauli-Z gate.
    Z,
    /// S-dagger gate.
    Sdg,
}

impl Gate {
    /// Every gate in the library.
    pub const ALL: [Gate; 3] = [Gate::H, Gate::Z, Gate::Sdg];

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "h",
            Gate::Z => "z",
            Gate::Sdg => "sdg",
        }
    }

    /// The unitary matrix of this gate.
    pub fn matrix(&self) -> Matrix2 {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        match self {
            Gate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                Matrix2([[h, h], [h, -h]])
            }
            Gate::Z => Matrix2([[one, zero], [zero, -one]]),
            Gate::Sdg => Matrix2([[one, zero], [zero, Complex64::new(0.0, -1.0)]]),
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn test_all_gates_unitary() {
        for gate in Gate::ALL {
            assert!(gate.matrix().is_unitary(1e-12), "{gate} is not unitary");
        }
    }

    #[test]
    fn test_hadamard_self_inverse() {
        let h = Gate::H.matrix();
        let hh = h.matmul(&h);
        assert!(approx_eq(hh.0[0][0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(hh.0[0][1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(hh.0[1][0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(hh.0[1][1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sdg_entries() {
        let m = Gate::Sdg.matrix();
        assert!(approx_eq(m.0[1][1], Complex64::new(0.0, -1.0)));
        assert!(approx_eq(m.0[0][0], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_apply_z_flips_sign() {
        let (a, b) = Gate::Z
            .matrix()
            .apply(Complex64::new(0.6, 0.0), Complex64::new(0.8, 0.0));
        assert!(approx_eq(a, Complex64::new(0.6, 0.0)));
        assert!(approx_eq(b, Complex64::new(-0.8, 0.0)));
    }

    #[test]
    fn test_non_unitary_detected() {
        let one = Complex64::new(1.0, 0.0);
        let m = Matrix2([[one, one], [one, one]]);
        assert!(!m.is_unitary(1e-9));
    }

    #[test]
    fn test_gate_names() {
        let names: Vec<_> = Gate::ALL.iter().map(Gate::name).collect();
        assert_eq!(names, vec!["h", "z", "sdg"]);
    }
}
