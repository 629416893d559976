//! Tipos de erro para qsim-matrix

use thiserror::Error;

/// Resultado customizado para operações de matriz
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Erros que podem ocorrer na álgebra de matrizes
#[derive(Debug, Clone, Error)]
pub enum MatrixError {
    #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Forma de DimensionMismatch para trace e hermiticidade: a matriz
    /// precisa ser quadrada
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("Ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Data length {len} does not match a {rows}x{cols} matrix")]
    DataLength { rows: usize, cols: usize, len: usize },
}
