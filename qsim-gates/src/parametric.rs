//! Portas paramétricas: rotações, controladas, Deutsch
//!
//! Fases seguem e^{iθ} (a mesma convenção de `T_GATE` e `rz`).

use qsim_matrix::{Complex64, Matrix};
use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::gates::QuantumGate;

const O: Complex64 = Complex64::new(0.0, 0.0);
const L: Complex64 = Complex64::new(1.0, 0.0);

/// e^{iθ}
fn phase(theta: f64) -> Complex64 {
    Complex64::from_polar(1.0, theta)
}

/// Mudança de fase (longitude): diag(1, e^{iθ})
pub fn r(theta: f64) -> Matrix {
    Matrix::from_array([[L, O], [O, phase(theta)]])
}

/// Rotação em torno do eixo X
pub fn rx(theta: f64) -> Matrix {
    let (s, c) = (theta / 2.0).sin_cos();
    Matrix::from_array([
        [Complex64::new(c, 0.0), Complex64::new(0.0, -s)],
        [Complex64::new(0.0, -s), Complex64::new(c, 0.0)],
    ])
}

/// Rotação em torno do eixo Y
pub fn ry(theta: f64) -> Matrix {
    let (s, c) = (theta / 2.0).sin_cos();
    Matrix::from_real_array([[c, -s], [s, c]])
}

/// Rotação em torno do eixo Z
pub fn rz(theta: f64) -> Matrix {
    let half = theta / 2.0;
    Matrix::from_array([[phase(-half), O], [O, phase(half)]])
}

/// Promove U (2×2) a um operador controlado 4×4:
/// identidade no bloco de controle 0, U no bloco de controle 1
pub fn cu(u: &Matrix) -> GateResult<Matrix> {
    if u.dims() != (2, 2) {
        return Err(GateError::NotSingleQubit {
            rows: u.rows(),
            cols: u.cols(),
        });
    }
    let mut out = Matrix::identity(4, 4);
    for i in 0..2 {
        for j in 0..2 {
            out[(2 + i, 2 + j)] = u[(i, j)];
        }
    }
    Ok(out)
}

/// Porta de Deutsch: fase e^{iθ} duplamente controlada (8×8)
pub fn d(theta: f64) -> Matrix {
    let mut out = Matrix::identity(8, 8);
    out[(7, 7)] = phase(theta);
    out
}

/// Eixo de rotação
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Fase pura, ver [`r`]
    Phase,
    X,
    Y,
    Z,
}

/// Rotação parametrizada como porta nomeada
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: Axis,
    pub theta: f64,
}

impl Rotation {
    pub fn new(axis: Axis, theta: f64) -> Self {
        Self { axis, theta }
    }
}

impl QuantumGate for Rotation {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Phase => "R",
            Axis::X => "Rx",
            Axis::Y => "Ry",
            Axis::Z => "Rz",
        }
    }

    fn matrix(&self) -> Matrix {
        match self.axis {
            Axis::Phase => r(self.theta),
            Axis::X => rx(self.theta),
            Axis::Y => ry(self.theta),
            Axis::Z => rz(self.theta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{CNOT, PAULI_X, PAULI_Z, S_GATE, T_GATE};
    use qsim_matrix::{equals, multiply, scalar_multiply};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_rotations_unitary() {
        for axis in [Axis::Phase, Axis::X, Axis::Y, Axis::Z] {
            for theta in [0.0, 0.3, FRAC_PI_2, PI, 2.5] {
                assert!(Rotation::new(axis, theta).is_unitary());
            }
        }
    }

    #[test]
    fn test_phase_convention_matches_fixed_gates() {
        assert!(equals(&r(FRAC_PI_4), &T_GATE, 1e-12));
        assert!(equals(&r(FRAC_PI_2), &S_GATE, 1e-12));
        assert!(equals(&r(PI), &PAULI_Z, 1e-12));
    }

    #[test]
    fn test_rz_is_phase_up_to_global() {
        // Rz(θ) = e^{-iθ/2}·R(θ)
        let theta = 0.7;
        let expected = scalar_multiply(phase(-theta / 2.0), &r(theta));
        assert!(equals(&rz(theta), &expected, 1e-12));
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        // Rx(π) = -i·X
        let expected = scalar_multiply(Complex64::new(0.0, -1.0), &PAULI_X);
        assert!(equals(&rx(PI), &expected, 1e-12));
    }

    #[test]
    fn test_ry_composes() {
        let product = multiply(&ry(0.4), &ry(0.6)).unwrap();
        assert!(equals(&product, &ry(1.0), 1e-12));
    }

    #[test]
    fn test_cu_of_x_is_cnot() {
        assert!(equals(&cu(&PAULI_X).unwrap(), &CNOT, 1e-12));
    }

    #[test]
    fn test_cu_rejects_wide_gate() {
        assert!(matches!(
            cu(&CNOT),
            Err(GateError::NotSingleQubit { rows: 4, cols: 4 })
        ));
    }

    #[test]
    fn test_deutsch_gate() {
        let g = d(PI);
        assert!((g[(7, 7)] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
        assert_eq!(g[(6, 6)], L);
        assert_eq!(g[(0, 7)], O);
    }
}
