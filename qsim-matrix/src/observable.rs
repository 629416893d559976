//! Auxiliares físicos: valor esperado, comutador, variância
//!
//! Construídos apenas a partir de [`crate::algebra`].

use num_complex::Complex64;

use crate::algebra::{add, inner_product, is_hermitian, multiply, scalar_multiply};
use crate::error::MatrixResult;
use crate::matrix::Matrix;

/// ⟨O⟩ = inner_product(O·V, V)
///
/// Real (parte imaginária zerada) quando O é hermitiano; complexo caso
/// contrário.
pub fn expected_value(operator: &Matrix, state: &Matrix) -> MatrixResult<Complex64> {
    let value = inner_product(&multiply(operator, state)?, state)?;
    if is_hermitian(operator) {
        Ok(Complex64::new(value.re, 0.0))
    } else {
        Ok(value)
    }
}

/// [O1, O2] = O1·O2 − O2·O1 (zero se comutam)
pub fn commutator(o1: &Matrix, o2: &Matrix) -> MatrixResult<Matrix> {
    add(&multiply(o1, o2)?, &scalar_multiply(-1.0, &multiply(o2, o1)?))
}

/// O − ⟨O⟩·I para o estado dado
pub fn demean(operator: &Matrix, state: &Matrix) -> MatrixResult<Matrix> {
    let mean = expected_value(operator, state)?;
    let shift = scalar_multiply(-mean, &Matrix::identity(operator.rows(), operator.cols()));
    add(operator, &shift)
}

/// Var(O) = ⟨(O − ⟨O⟩)²⟩
pub fn variance(operator: &Matrix, state: &Matrix) -> MatrixResult<Complex64> {
    let d = demean(operator, state)?;
    expected_value(&multiply(&d, &d)?, state)
}
