//! Tipos de erro para qsim-state

use qsim_gates::GateError;
use qsim_matrix::MatrixError;
use thiserror::Error;

/// Resultado customizado para operações do motor de estado
pub type StateResult<T> = Result<T, StateError>;

/// Erros que podem ocorrer ao construir, transformar ou medir estados
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Invalid state shape: {rows} rows is not a power of two")]
    InvalidStateShape { rows: usize },

    #[error("State must be a column vector, got {cols} columns")]
    NotAColumn { cols: usize },

    #[error("Cannot apply {gate_bits}-qubit gate at index {index} on {state_bits} qubits")]
    GateWidthExceedsState {
        gate_bits: usize,
        state_bits: usize,
        index: usize,
    },

    #[error("Cannot normalize: outcome probability {probability} is too small")]
    NormalizationFailure { probability: f64 },

    #[error("Invalid qubit range [{a}, {b}] on {bits} qubits")]
    InvalidRange { a: usize, b: usize, bits: usize },

    #[error("Value {value} does not fit in {bits} bits")]
    ValueOutOfRange { value: usize, bits: usize },

    #[error("Cannot create a state with no qubits")]
    EmptyRegister,

    #[error("Cumulative distribution exhausted without selecting an outcome")]
    SamplingExhausted,
}
