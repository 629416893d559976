//! Tipos de erro para qsim-gates

use qsim_matrix::MatrixError;
use thiserror::Error;

/// Resultado customizado para construtores de portas
pub type GateResult<T> = Result<T, GateError>;

/// Erros que podem ocorrer ao construir portas
#[derive(Debug, Clone, Error)]
pub enum GateError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Expected a single-qubit (2x2) gate, got {rows}x{cols}")]
    NotSingleQubit { rows: usize, cols: usize },

    #[error("Oracle value f({input}) = {output} does not fit in {bits} bits")]
    OracleOutOfRange {
        input: usize,
        output: usize,
        bits: usize,
    },

    #[error("Register of {bits} qubits is too large to represent")]
    RegisterTooLarge { bits: usize },
}
