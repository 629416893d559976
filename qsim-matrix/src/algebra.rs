//! # Álgebra de matrizes complexas
//!
//! Funções puras sobre [`Matrix`]. Nenhuma operação altera os argumentos;
//! incompatibilidades de forma viram [`MatrixError`], nunca uma matriz de
//! fallback.
//!
//! ## Computational Complexity
//!
//! - `add`, `scalar_multiply`, `transpose`, `adjoint`, `equals`: O(r·c)
//! - `multiply`: O(r·c·k)
//! - `inner_product`, `norm`: O(r·c) (soma de Frobenius direta)
//! - `tensor_product`: O(rA·cA·rB·cB) — domina o custo de compor subsistemas

use num_complex::Complex64;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// Tolerância padrão para igualdade aproximada
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Soma elemento a elemento; exige dimensões iguais
pub fn add(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    if a.dims() != b.dims() {
        return Err(MatrixError::DimensionMismatch {
            operation: "add",
            left: a.dims(),
            right: b.dims(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::from_row_major(a.rows(), a.cols(), data)
}

/// Multiplicação por escalar
pub fn scalar_multiply(scalar: impl Into<Complex64>, m: &Matrix) -> Matrix {
    let s = scalar.into();
    Matrix::from_fn(m.rows(), m.cols(), |i, j| s * m[(i, j)])
}

/// Soma de todos os elementos
pub fn sum(m: &Matrix) -> Complex64 {
    m.as_slice().iter().sum()
}

/// Produto matricial; exige cols(A) == rows(B)
pub fn multiply(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            operation: "multiply",
            left: a.dims(),
            right: b.dims(),
        });
    }

    let (m, k, p) = (a.rows(), a.cols(), b.cols());
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out = vec![Complex64::new(0.0, 0.0); m * p];

    // ordem i-k-j: percorre linhas de B de forma contígua
    for i in 0..m {
        let row = &mut out[i * p..(i + 1) * p];
        for h in 0..k {
            let aih = lhs[i * k + h];
            if aih.re == 0.0 && aih.im == 0.0 {
                continue;
            }
            for (slot, bhj) in row.iter_mut().zip(&rhs[h * p..(h + 1) * p]) {
                *slot += aih * bhj;
            }
        }
    }

    Matrix::from_row_major(m, p, out)
}

/// Transposta
pub fn transpose(m: &Matrix) -> Matrix {
    Matrix::from_fn(m.cols(), m.rows(), |i, j| m[(j, i)])
}

/// Transposta conjugada (dagger)
pub fn adjoint(m: &Matrix) -> Matrix {
    Matrix::from_fn(m.cols(), m.rows(), |i, j| m[(j, i)].conj())
}

/// Traço; exige matriz quadrada
pub fn trace(m: &Matrix) -> MatrixResult<Complex64> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            operation: "trace",
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok((0..m.rows()).map(|i| m[(i, i)]).sum())
}

/// Produto interno de Frobenius: trace(adjoint(A)·B)
///
/// Calculado como Σ conj(a_ij)·b_ij, que é o mesmo valor sem materializar
/// o produto.
pub fn inner_product(a: &Matrix, b: &Matrix) -> MatrixResult<Complex64> {
    if a.dims() != b.dims() {
        return Err(MatrixError::DimensionMismatch {
            operation: "inner_product",
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x.conj() * y)
        .sum())
}

/// Norma de Frobenius
pub fn norm(m: &Matrix) -> f64 {
    m.as_slice().iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// Igualdade aproximada nas partes real e imaginária; falso se as
/// dimensões diferem
pub fn equals(a: &Matrix, b: &Matrix, tolerance: f64) -> bool {
    a.dims() == b.dims()
        && a.as_slice().iter().zip(b.as_slice()).all(|(x, y)| {
            (x.re - y.re).abs() <= tolerance && (x.im - y.im).abs() <= tolerance
        })
}

/// Verifica se M == adjoint(M)
pub fn is_hermitian(m: &Matrix) -> bool {
    m.is_square() && equals(&adjoint(m), m, DEFAULT_TOLERANCE)
}

/// Produto de Kronecker A ⊗ B
///
/// Elemento (rB·i1 + i2, cB·j1 + j2) = A[i1][j1]·B[i2][j2].
pub fn tensor_product(a: &Matrix, b: &Matrix) -> Matrix {
    let (ar, ac) = a.dims();
    let (br, bc) = b.dims();
    let mut out = Matrix::zero(ar * br, ac * bc);

    for i1 in 0..ar {
        for j1 in 0..ac {
            let aij = a[(i1, j1)];
            if aij.re == 0.0 && aij.im == 0.0 {
                continue;
            }
            for i2 in 0..br {
                for j2 in 0..bc {
                    out[(br * i1 + i2, bc * j1 + j2)] = aij * b[(i2, j2)];
                }
            }
        }
    }

    out
}
