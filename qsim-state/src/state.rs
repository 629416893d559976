//! Construção de estados e aplicação de portas

use qsim_gates::{KET_ONE, KET_ZERO};
use qsim_matrix::{MatrixError, Matrix, multiply, tensor_product};
use tracing::debug;

use crate::error::{StateError, StateResult};

/// Qubit isolado na base padrão: |0⟩ ou |1⟩
pub fn create_qubit(bit: u8) -> StateResult<Matrix> {
    match bit {
        0 => Ok(KET_ZERO.clone()),
        1 => Ok(KET_ONE.clone()),
        other => Err(StateError::ValueOutOfRange {
            value: other as usize,
            bits: 1,
        }),
    }
}

/// Estado combinado |b₀ b₁ … bₙ₋₁⟩, qubit 0 no fator mais significativo
pub fn create_state(bits: &[u8]) -> StateResult<Matrix> {
    let (first, rest) = bits.split_first().ok_or(StateError::EmptyRegister)?;
    let mut state = create_qubit(*first)?;
    for &bit in rest {
        state = tensor_product(&state, &create_qubit(bit)?);
    }
    Ok(state)
}

/// Número de qubits inferido do número de linhas (potência de dois exata)
pub fn get_num_bits(m: &Matrix) -> StateResult<usize> {
    let rows = m.rows();
    if !rows.is_power_of_two() {
        return Err(StateError::InvalidStateShape { rows });
    }
    Ok(rows.trailing_zeros() as usize)
}

/// Número de qubits de um vetor de estado (exige uma coluna)
pub(crate) fn state_bits(state: &Matrix) -> StateResult<usize> {
    if !state.is_column() {
        return Err(StateError::NotAColumn { cols: state.cols() });
    }
    get_num_bits(state)
}

/// Número de qubits de uma porta (exige matriz quadrada)
fn gate_bits(gate: &Matrix) -> StateResult<usize> {
    if !gate.is_square() {
        return Err(MatrixError::NotSquare {
            operation: "apply_gate",
            rows: gate.rows(),
            cols: gate.cols(),
        }
        .into());
    }
    get_num_bits(gate)
}

/// Operador no espaço completo: I(2^index) ⊗ gate ⊗ I(2^(n − index − m))
pub fn lift_gate(gate: &Matrix, index: usize, n: usize) -> StateResult<Matrix> {
    let m = gate_bits(gate)?;
    if m > n || index > n - m {
        return Err(StateError::GateWidthExceedsState {
            gate_bits: m,
            state_bits: n,
            index,
        });
    }

    let before = 1usize << index;
    let after = 1usize << (n - index - m);

    let mut transform = gate.clone();
    if before > 1 {
        transform = tensor_product(&Matrix::identity(before, before), &transform);
    }
    if after > 1 {
        transform = tensor_product(&transform, &Matrix::identity(after, after));
    }
    Ok(transform)
}

/// Aplica uma porta de m qubits cobrindo [index, index + m)
pub fn apply_gate(state: &Matrix, gate: &Matrix, index: usize) -> StateResult<Matrix> {
    let n = state_bits(state)?;
    let transform = lift_gate(gate, index, n)?;
    debug!(qubits = n, index, width = gate_bits(gate)?, "applying gate");
    Ok(multiply(&transform, state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim_gates::{CNOT, HADAMARD, PAULI_X, TOFFOLI};
    use qsim_matrix::{Complex64, equals};

    fn basis(n: usize, index: usize) -> Matrix {
        let mut m = Matrix::zero(1 << n, 1);
        m[(index, 0)] = Complex64::new(1.0, 0.0);
        m
    }

    #[test]
    fn test_create_state_ordering() {
        // |0 1 1⟩ = índice 0b011
        let s = create_state(&[0, 1, 1]).unwrap();
        assert_eq!(s, basis(3, 3));
        let s = create_state(&[1, 0, 0]).unwrap();
        assert_eq!(s, basis(3, 4));
    }

    #[test]
    fn test_create_state_rejects_empty_and_non_bits() {
        assert!(matches!(create_state(&[]), Err(StateError::EmptyRegister)));
        assert!(matches!(
            create_state(&[0, 2]),
            Err(StateError::ValueOutOfRange { value: 2, bits: 1 })
        ));
    }

    #[test]
    fn test_get_num_bits() {
        assert_eq!(get_num_bits(&Matrix::zero(8, 1)).unwrap(), 3);
        assert_eq!(get_num_bits(&Matrix::zero(1, 1)).unwrap(), 0);
        assert!(matches!(
            get_num_bits(&Matrix::zero(6, 1)),
            Err(StateError::InvalidStateShape { rows: 6 })
        ));
    }

    #[test]
    fn test_apply_x_on_each_position() {
        for index in 0..3 {
            let s = apply_gate(&create_state(&[0, 0, 0]).unwrap(), &PAULI_X, index).unwrap();
            assert_eq!(s, basis(3, 1 << (2 - index)));
        }
    }

    #[test]
    fn test_apply_cnot_in_middle() {
        // |0 1 0 0⟩ com CNOT em [1, 3): controle qubit 1, alvo qubit 2
        let s = create_state(&[0, 1, 0, 0]).unwrap();
        let out = apply_gate(&s, &CNOT, 1).unwrap();
        assert_eq!(out, create_state(&[0, 1, 1, 0]).unwrap());
    }

    #[test]
    fn test_apply_toffoli_at_end() {
        let s = create_state(&[0, 1, 1, 0]).unwrap();
        let out = apply_gate(&s, &TOFFOLI, 1).unwrap();
        assert_eq!(out, create_state(&[0, 1, 1, 1]).unwrap());
    }

    #[test]
    fn test_gate_width_errors() {
        let s = create_state(&[0, 0]).unwrap();
        assert!(matches!(
            apply_gate(&s, &TOFFOLI, 0),
            Err(StateError::GateWidthExceedsState { gate_bits: 3, state_bits: 2, index: 0 })
        ));
        assert!(matches!(
            apply_gate(&s, &CNOT, 1),
            Err(StateError::GateWidthExceedsState { gate_bits: 2, state_bits: 2, index: 1 })
        ));
        assert!(matches!(
            apply_gate(&s, &HADAMARD, 2),
            Err(StateError::GateWidthExceedsState { .. })
        ));
    }

    #[test]
    fn test_apply_rejects_non_column_state() {
        let not_state = Matrix::identity(4, 4);
        assert!(matches!(
            apply_gate(&not_state, &HADAMARD, 0),
            Err(StateError::NotAColumn { cols: 4 })
        ));
    }

    #[test]
    fn test_lift_gate_places_identities() {
        let lifted = lift_gate(&HADAMARD, 1, 3).unwrap();
        assert_eq!(lifted.dims(), (8, 8));
        let expected = tensor_product(
            &tensor_product(&Matrix::identity(2, 2), &HADAMARD),
            &Matrix::identity(2, 2),
        );
        assert!(equals(&lifted, &expected, 1e-15));
    }
}
