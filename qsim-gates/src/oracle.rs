//! Oráculos unitários a partir de funções booleanas
//!
//! Todos implementam |x, y⟩ → |x, y ⊕ f(x)⟩ com x no registrador mais
//! significativo. Custo O(4^(m+n)) em memória: são matrizes densas.

use qsim_matrix::{Complex64, Matrix, add, scalar_multiply};
use tracing::debug;

use crate::dimension;
use crate::error::{GateError, GateResult};

/// Oráculo para f: {0,1}ⁿ → {0,1}, com tamanho 2ⁿ⁺¹
///
/// Bloco diagonal i = [[¬f(i), f(i)], [f(i), ¬f(i)]].
pub fn uf(n: usize, f: impl Fn(usize) -> bool) -> GateResult<Matrix> {
    let x_perm = dimension(n)?;
    let size = dimension(n + 1)?;
    let mut result = Matrix::zero(size, size);

    for i in 0..x_perm {
        let fx = f(i);
        for j in 0..2 {
            for k in 0..2 {
                let bit = if j == k { !fx } else { fx };
                if bit {
                    result[(2 * i + j, 2 * i + k)] = Complex64::new(1.0, 0.0);
                }
            }
        }
    }

    debug!(bits = n, size, "built single-output oracle");
    Ok(result)
}

/// Oráculo para f: {0,1}ⁿ → {0,1}ⁿ; equivale a `ufmn(n, n, f)`
pub fn ufn(n: usize, f: impl Fn(usize) -> usize) -> GateResult<Matrix> {
    ufmn(n, n, f)
}

/// Oráculo para f: {0,1}^m → {0,1}ⁿ, matriz de permutação de lado 2^(m+n)
///
/// Coluna x·2ⁿ + y tem um único 1 na linha x·2ⁿ + (y ⊕ f(x)).
pub fn ufmn(m: usize, n: usize, f: impl Fn(usize) -> usize) -> GateResult<Matrix> {
    let x_perm = dimension(m)?;
    let y_perm = dimension(n)?;
    let size = dimension(m + n)?;
    let mut result = Matrix::zero(size, size);

    for x in 0..x_perm {
        let fx = f(x);
        if fx >= y_perm {
            return Err(GateError::OracleOutOfRange {
                input: x,
                output: fx,
                bits: n,
            });
        }
        let base = x * y_perm;
        for y in 0..y_perm {
            result[(base + (y ^ fx), base + y)] = Complex64::new(1.0, 0.0);
        }
    }

    debug!(input_bits = m, output_bits = n, size, "built multi-output oracle");
    Ok(result)
}

/// Inversão em torno da média: 2·A − I, com A o projetor de média uniforme
pub fn mean_inversion(n: usize) -> GateResult<Matrix> {
    let perm = dimension(n)?;
    let average = Matrix::filled(perm, perm, 1.0 / perm as f64);
    Ok(add(
        &scalar_multiply(2.0, &average),
        &scalar_multiply(-1.0, &Matrix::identity(perm, perm)),
    )?)
}
