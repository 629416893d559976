//! Tipo de valor da matriz complexa densa

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, MatrixResult};

/// Matriz retangular densa de escalares complexos.
///
/// Armazenamento row-major. As dimensões são fixadas na criação; todas as
/// operações de [`crate::algebra`] devolvem matrizes novas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

/// Forma serializada (validada ao desserializar)
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> MatrixResult<Self> {
        Matrix::from_row_major(repr.rows, repr.cols, repr.data)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(m: Matrix) -> Self {
        Self {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

impl Matrix {
    /// Matriz de zeros
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Complex64::new(0.0, 0.0))
    }

    /// Matriz preenchida com `value`
    pub fn filled(rows: usize, cols: usize, value: impl Into<Complex64>) -> Self {
        Self {
            rows,
            cols,
            data: vec![value.into(); rows * cols],
        }
    }

    /// Identidade retangular: uns na diagonal até min(rows, cols)
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut m = Self::zero(rows, cols);
        for i in 0..rows.min(cols) {
            m[(i, i)] = Complex64::new(1.0, 0.0);
        }
        m
    }

    /// Vetor coluna a partir de uma sequência
    pub fn column_vector(values: &[Complex64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Matriz a partir de uma tabela fixa
    pub fn from_array<const R: usize, const C: usize>(table: [[Complex64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: table.into_iter().flatten().collect(),
        }
    }

    /// Matriz real a partir de uma tabela fixa
    pub fn from_real_array<const R: usize, const C: usize>(table: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: table
                .into_iter()
                .flatten()
                .map(|re| Complex64::new(re, 0.0))
                .collect(),
        }
    }

    /// Matriz a partir de linhas; rejeita linhas de tamanhos diferentes
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Matriz a partir de dados row-major
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<Complex64>) -> MatrixResult<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Matriz cujo elemento (i, j) é `f(i, j)`
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Complex64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (linhas, colunas)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Elemento (i, j), se existir
    pub fn get(&self, i: usize, j: usize) -> Option<Complex64> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    /// Elementos em ordem row-major
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Acesso mutável aos elementos (usado apenas pelo colapso da medição)
    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// Itera sobre as linhas
    pub fn row_iter(&self) -> impl Iterator<Item = &[Complex64]> {
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (i, j): (usize, usize)) -> &Complex64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Complex64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        for row in self.row_iter() {
            write!(f, "[")?;
            for (j, z) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.*}", precision, z)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rectangular() {
        let m = Matrix::identity(2, 3);
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m[(0, 0)], Complex64::new(1.0, 0.0));
        assert_eq!(m[(1, 1)], Complex64::new(1.0, 0.0));
        assert_eq!(m[(1, 2)], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let c = Complex64::new(1.0, 0.0);
        let result = Matrix::from_rows(vec![vec![c, c], vec![c]]);
        assert!(matches!(
            result,
            Err(MatrixError::RaggedRows { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_column_vector() {
        let v = Matrix::column_vector(&[Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)]);
        assert!(v.is_column());
        assert_eq!(v.rows(), 2);
        assert_eq!(v.get(1, 0), Some(Complex64::new(0.0, 0.8)));
        assert_eq!(v.get(2, 0), None);
    }

    #[test]
    fn test_serde_rejects_bad_length() {
        let json = r#"{"rows":2,"cols":2,"data":[[1.0,0.0]]}"#;
        assert!(serde_json::from_str::<Matrix>(json).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let m = Matrix::from_real_array([[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
