//! Transformada de Hadamard sobre n qubits
//!
//! Duas construções do mesmo operador H⊗ⁿ:
//!
//! - [`hn`]: produto tensorial ingênuo, referência de correção
//! - [`hn_fast`]: forma fechada de Walsh–Hadamard,
//!   (i, j) ↦ (−1)^popcount(i & j) / √(2ⁿ), caminho de desempenho
//!
//! As duas produzem matrizes idênticas elemento a elemento: a escala é
//! acumulada pela mesma sequência de multiplicações por 1/√2.

use qsim_matrix::{Complex64, Matrix, tensor_product};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::dimension;
use crate::error::GateResult;
use crate::gates::HADAMARD;

/// H⊗ⁿ por produto tensorial repetido (custo exponencial)
pub fn hn(n: usize) -> GateResult<Matrix> {
    dimension(n)?;
    if n == 0 {
        return Ok(Matrix::identity(1, 1));
    }

    let mut transform = HADAMARD.clone();
    for _ in 1..n {
        transform = tensor_product(&transform, &HADAMARD);
    }
    Ok(transform)
}

/// H⊗ⁿ em forma fechada (padrão de sinais de Walsh)
pub fn hn_fast(n: usize) -> GateResult<Matrix> {
    let size = dimension(n)?;

    let mut scale = 1.0;
    for _ in 0..n {
        scale *= FRAC_1_SQRT_2;
    }

    Ok(Matrix::from_fn(size, size, |i, j| {
        if (i & j).count_ones() % 2 == 0 {
            Complex64::new(scale, 0.0)
        } else {
            Complex64::new(-scale, 0.0)
        }
    }))
}
