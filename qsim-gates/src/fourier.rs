//! Transformada de Fourier quântica

use qsim_matrix::{Complex64, Matrix, scalar_multiply};
use std::f64::consts::PI;

use crate::dimension;
use crate::error::GateResult;

/// As n raízes complexas da unidade, e^{2πik/n} para k em [0, n)
pub fn unity_roots(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex64::from_polar(1.0, 2.0 * PI * k as f64 / n as f64))
        .collect()
}

/// Matriz de Vandermonde: linha i avalia o polinômio em xs[i],
/// elemento (i, j) = xs[i]^j para j em [0, n)
pub fn vandermonde(n: usize, xs: &[Complex64]) -> Matrix {
    Matrix::from_fn(xs.len(), n, |i, j| xs[i].powu(j as u32))
}

/// QFT sobre n qubits: (1/√(2ⁿ))·V(2ⁿ, raízes da unidade)
pub fn qft(n: usize) -> GateResult<Matrix> {
    let size = dimension(n)?;
    let v = vandermonde(size, &unity_roots(size));
    Ok(scalar_multiply(1.0 / (size as f64).sqrt(), &v))
}
