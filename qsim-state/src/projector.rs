//! Projetores de subespaço na base padrão
//!
//! Um projetor sobre n qubits é o produto tensorial (MSB primeiro) de
//! P0 = diag(1, 0) e P1 = diag(0, 1), escolhidos pela expansão binária do
//! valor testado, completado com identidades fora da faixa medida.

use qsim_gates::{P0, P1};
use qsim_matrix::{Matrix, tensor_product};

use crate::bits::index_to_bits;
use crate::error::{StateError, StateResult};

fn check_value(value: usize, bits: usize) -> StateResult<()> {
    let fits = u32::try_from(bits)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .is_none_or(|limit| value < limit);
    if fits {
        Ok(())
    } else {
        Err(StateError::ValueOutOfRange { value, bits })
    }
}

/// Verifica 0 ≤ a ≤ b < n
pub(crate) fn check_range(a: usize, b: usize, n: usize) -> StateResult<()> {
    if a > b || b >= n {
        return Err(StateError::InvalidRange { a, b, bits: n });
    }
    Ok(())
}

/// Projetor sobre n qubits para o estado de base |i⟩
pub fn get_projector(i: usize, n: usize) -> StateResult<Matrix> {
    check_value(i, n)?;

    let mut projector = Matrix::identity(1, 1);
    for bit in index_to_bits(i, n) {
        let basis: &Matrix = if bit == 1 { &*P1 } else { &*P0 };
        projector = tensor_product(&projector, basis);
    }
    Ok(projector)
}

/// Projetor que testa os qubits [a, b] contra o valor i de (b − a + 1) bits,
/// com identidade fora de [a, b]
pub fn get_projector_range(i: usize, a: usize, b: usize, n: usize) -> StateResult<Matrix> {
    check_range(a, b, n)?;

    let mut total = get_projector(i, b - a + 1)?;
    let before = 1usize << a;
    let after = 1usize << (n - 1 - b);

    if before > 1 {
        total = tensor_product(&Matrix::identity(before, before), &total);
    }
    if after > 1 {
        total = tensor_product(&total, &Matrix::identity(after, after));
    }
    Ok(total)
}
