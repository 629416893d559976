//! # Quantum Gates — Catálogo de portas fixas
//!
//! Tabelas numéricas exatas, sem cálculo. Todas usam a mesma convenção de
//! fase (exponencial complexa) dos construtores paramétricos.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: X, Y, Z (Pauli), H (Hadamard), S, T, NOT, √NOT
//! - **Two-qubit**: CNOT
//! - **Three-qubit**: Toffoli (CCNOT), Fredkin (CSWAP)

use once_cell::sync::Lazy;
use qsim_matrix::{Complex64, DEFAULT_TOLERANCE, Matrix, adjoint, equals, multiply};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

const O: Complex64 = Complex64::new(0.0, 0.0);
const L: Complex64 = Complex64::new(1.0, 0.0);

/// |0⟩ = (1, 0)ᵀ
pub static KET_ZERO: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[1.0], [0.0]]));

/// |1⟩ = (0, 1)ᵀ
pub static KET_ONE: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[0.0], [1.0]]));

/// Projetor de base |0⟩⟨0|
pub static P0: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[1.0, 0.0], [0.0, 0.0]]));

/// Projetor de base |1⟩⟨1|
pub static P1: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[0.0, 0.0], [0.0, 1.0]]));

/// Pauli-X (NOT quântico)
pub static PAULI_X: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[0.0, 1.0], [1.0, 0.0]]));

/// Pauli-Y
pub static PAULI_Y: Lazy<Matrix> = Lazy::new(|| {
    Matrix::from_array([
        [O, Complex64::new(0.0, -1.0)],
        [Complex64::new(0.0, 1.0), O],
    ])
});

/// Pauli-Z (phase flip)
pub static PAULI_Z: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[1.0, 0.0], [0.0, -1.0]]));

/// Hadamard: cria superposição
pub static HADAMARD: Lazy<Matrix> = Lazy::new(|| {
    let h = FRAC_1_SQRT_2;
    Matrix::from_real_array([[h, h], [h, -h]])
});

/// Porta S (√Z)
pub static S_GATE: Lazy<Matrix> = Lazy::new(|| Matrix::from_array([[L, O], [O, Complex64::new(0.0, 1.0)]]));

/// Porta T (π/8): diag(1, e^{iπ/4})
pub static T_GATE: Lazy<Matrix> =
    Lazy::new(|| Matrix::from_array([[L, O], [O, Complex64::from_polar(1.0, FRAC_PI_4)]]));

/// NOT clássico sobre um qubit: |x⟩ → |¬x⟩
pub static NOT: Lazy<Matrix> = Lazy::new(|| Matrix::from_real_array([[0.0, 1.0], [1.0, 0.0]]));

/// Raiz quadrada de NOT
pub static SQRT_NOT: Lazy<Matrix> = Lazy::new(|| {
    let h = FRAC_1_SQRT_2;
    Matrix::from_real_array([[h, -h], [h, h]])
});

/// |x, y⟩ → |x, x ⊕ y⟩
pub static CNOT: Lazy<Matrix> = Lazy::new(|| {
    Matrix::from_real_array([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
});

/// |x, y, z⟩ → |x, y, z ⊕ (x ∧ y)⟩
pub static TOFFOLI: Lazy<Matrix> = Lazy::new(|| {
    Matrix::from_real_array([
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ])
});

/// Troca y e z quando x = 1
pub static FREDKIN: Lazy<Matrix> = Lazy::new(|| {
    Matrix::from_real_array([
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
    ])
});

/// Trait para portas quânticas
pub trait QuantumGate {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta (2ᵃ×2ᵃ)
    fn matrix(&self) -> Matrix;

    /// Número de qubits sobre os quais atua
    fn width(&self) -> usize {
        self.matrix().rows().trailing_zeros() as usize
    }

    /// Verifica U†U ≈ I
    fn is_unitary(&self) -> bool {
        let m = self.matrix();
        match multiply(&adjoint(&m), &m) {
            Ok(product) => equals(&product, &Matrix::identity(m.rows(), m.cols()), DEFAULT_TOLERANCE),
            Err(_) => false,
        }
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Portas fixas do catálogo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixedGate {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    S,
    T,
    Not,
    SqrtNot,
    Cnot,
    Toffoli,
    Fredkin,
}

impl FixedGate {
    /// Todas as portas fixas, em ordem de largura
    pub const ALL: [FixedGate; 11] = [
        Self::PauliX,
        Self::PauliY,
        Self::PauliZ,
        Self::Hadamard,
        Self::S,
        Self::T,
        Self::Not,
        Self::SqrtNot,
        Self::Cnot,
        Self::Toffoli,
        Self::Fredkin,
    ];

    /// Tabela estática correspondente
    pub fn table(&self) -> &'static Matrix {
        match self {
            Self::PauliX => &*PAULI_X,
            Self::PauliY => &*PAULI_Y,
            Self::PauliZ => &*PAULI_Z,
            Self::Hadamard => &*HADAMARD,
            Self::S => &*S_GATE,
            Self::T => &*T_GATE,
            Self::Not => &*NOT,
            Self::SqrtNot => &*SQRT_NOT,
            Self::Cnot => &*CNOT,
            Self::Toffoli => &*TOFFOLI,
            Self::Fredkin => &*FREDKIN,
        }
    }
}

impl QuantumGate for FixedGate {
    fn name(&self) -> &'static str {
        match self {
            Self::PauliX => "X",
            Self::PauliY => "Y",
            Self::PauliZ => "Z",
            Self::Hadamard => "H",
            Self::S => "S",
            Self::T => "T",
            Self::Not => "NOT",
            Self::SqrtNot => "√NOT",
            Self::Cnot => "CNOT",
            Self::Toffoli => "Toffoli",
            Self::Fredkin => "Fredkin",
        }
    }

    fn matrix(&self) -> Matrix {
        self.table().clone()
    }
}

impl fmt::Display for FixedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Testes
// =============================================================================
