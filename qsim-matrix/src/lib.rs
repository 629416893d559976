//! # qsim-matrix — Álgebra de matrizes complexas
//!
//! Tipo de valor [`Matrix`] (denso, row-major, `Complex64`) e álgebra pura
//! sobre ele. É a folha do simulador: estados e operadores quânticos são
//! todos matrizes, e subsistemas são compostos pelo produto de Kronecker.
//!
//! ## Computational Complexity
//!
//! **Produto — O(r·c·k):** domina a aplicação de portas no espaço completo.
//!
//! **Tensor — O(rA·cA·rB·cB):** a dimensão cresce como 2ⁿ com o número de
//! qubits, então a memória cresce como 4ⁿ para operadores.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          qsim-matrix                            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Matrix (valor, dimensões fixas)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  algebra: add, multiply, adjoint, ⊗ ...   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  observable: ⟨O⟩, [A,B], variância        │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_matrix::{Matrix, algebra};
//!
//! let i2 = Matrix::identity(2, 2);
//! let i4 = algebra::tensor_product(&i2, &i2);
//! assert!(algebra::equals(&i4, &Matrix::identity(4, 4), 1e-12));
//! ```

pub mod algebra;
pub mod error;
pub mod matrix;
pub mod observable;

pub use algebra::{
    DEFAULT_TOLERANCE, add, adjoint, equals, inner_product, is_hermitian, multiply, norm,
    scalar_multiply, sum, tensor_product, trace, transpose,
};
pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
pub use num_complex::Complex64;
pub use observable::{commutator, demean, expected_value, variance};

#[cfg(test)]
mod tests;
