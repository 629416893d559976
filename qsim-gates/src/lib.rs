//! # ⚛️ qsim-gates — Catálogo de portas quânticas
//!
//! Constantes unitárias fixas (Pauli, Hadamard, S, T, CNOT, Toffoli,
//! Fredkin) e construtores paramétricos/algorítmicos (rotações, controladas,
//! H⊗ⁿ, oráculos, inversão em torno da média, QFT). Todos os construtores
//! são puros e determinísticos.
//!
//! ## Computational Complexity
//!
//! **Portas fixas — O(1):** tabelas estáticas.
//!
//! **H⊗ⁿ ingênua — O(4ⁿ·n):** produto tensorial repetido; apenas
//! referência. [`hn_fast`] preenche 4ⁿ elementos diretamente.
//!
//! **Oráculos — O(4^(m+n)):** matrizes densas de permutação.
//!
//! **QFT — O(4ⁿ):** Vandermonde nas raízes 2ⁿ-ésimas da unidade.
//!
//! ## Exemplo
//!
//! ```
//! use qsim_gates::{HADAMARD, hn, hn_fast};
//!
//! assert_eq!(hn(1).unwrap(), *HADAMARD);
//! assert_eq!(hn(3).unwrap(), hn_fast(3).unwrap());
//! ```

pub mod error;
pub mod fourier;
pub mod gates;
pub mod hadamard;
pub mod oracle;
pub mod parametric;

pub use error::{GateError, GateResult};
pub use fourier::{qft, unity_roots, vandermonde};
pub use gates::{
    CNOT, FREDKIN, FixedGate, HADAMARD, KET_ONE, KET_ZERO, NOT, P0, P1, PAULI_X, PAULI_Y,
    PAULI_Z, QuantumGate, S_GATE, SQRT_NOT, T_GATE, TOFFOLI,
};
pub use hadamard::{hn, hn_fast};
pub use oracle::{mean_inversion, ufmn, ufn, uf};
pub use parametric::{Axis, Rotation, cu, d, r, rx, ry, rz};

/// 2ⁿ, ou erro se não cabe em `usize`
pub fn dimension(bits: usize) -> GateResult<usize> {
    u32::try_from(bits)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(GateError::RegisterTooLarge { bits })
}

#[cfg(test)]
mod tests;
