//! Testes integrados para qsim-gates

use crate::*;
use qsim_matrix::{Complex64, DEFAULT_TOLERANCE, Matrix, adjoint, equals, multiply};

fn assert_unitary(m: &Matrix) {
    let product = multiply(&adjoint(m), m).unwrap();
    assert!(
        equals(&product, &Matrix::identity(m.rows(), m.cols()), DEFAULT_TOLERANCE),
        "matrix {}x{} is not unitary",
        m.rows(),
        m.cols()
    );
}

/// Aplica U a |x, 0⟩ e devolve o índice da base resultante
fn image_of_basis(u: &Matrix, index: usize) -> usize {
    let mut input = Matrix::zero(u.cols(), 1);
    input[(index, 0)] = Complex64::new(1.0, 0.0);
    let output = multiply(u, &input).unwrap();
    let hits: Vec<usize> = (0..output.rows())
        .filter(|&i| output[(i, 0)].norm() > 0.5)
        .collect();
    assert_eq!(hits.len(), 1, "oracle output is not a basis state");
    hits[0]
}

#[test]
fn test_dimension() {
    assert_eq!(dimension(0).unwrap(), 1);
    assert_eq!(dimension(10).unwrap(), 1024);
    assert!(matches!(
        dimension(200),
        Err(GateError::RegisterTooLarge { bits: 200 })
    ));
}

#[test]
fn test_every_constructor_unitary() {
    assert_unitary(&r(1.1));
    assert_unitary(&rx(0.2));
    assert_unitary(&ry(-0.9));
    assert_unitary(&rz(3.0));
    assert_unitary(&cu(&rx(0.5)).unwrap());
    assert_unitary(&d(0.25));
    assert_unitary(&hn(4).unwrap());
    assert_unitary(&uf(2, |x| x % 2 == 1).unwrap());
    assert_unitary(&ufn(2, |x| 3 - x).unwrap());
    assert_unitary(&mean_inversion(2).unwrap());
    assert_unitary(&qft(3).unwrap());
}

#[test]
fn test_uf_maps_basis_inputs() {
    // n = 2, f(x) = x mod 2: |x, 0⟩ → |x, f(x)⟩
    let f = |x: usize| x % 2 == 1;
    let u = uf(2, f).unwrap();
    for x in 0..4 {
        let input = x << 1;
        let expected = (x << 1) | usize::from(f(x));
        assert_eq!(image_of_basis(&u, input), expected);
    }
}

#[test]
fn test_ufmn_maps_basis_inputs() {
    // aˣ mod 15 com a = 7
    let f = |x: usize| (0..x).fold(1, |acc, _| acc * 7 % 15);
    let u = ufmn(3, 4, f).unwrap();
    for x in 0..8 {
        for y in [0, 5] {
            let input = (x << 4) | y;
            assert_eq!(image_of_basis(&u, input), (x << 4) | (y ^ f(x)));
        }
    }
}

#[test]
fn test_controlled_block_structure() {
    let target = rz(0.8);
    let u = cu(&target).unwrap();
    assert_eq!(u[(0, 0)], Complex64::new(1.0, 0.0));
    assert_eq!(u[(1, 1)], Complex64::new(1.0, 0.0));
    assert_eq!(u[(2, 2)], target[(0, 0)]);
    assert_eq!(u[(3, 3)], target[(1, 1)]);
    assert_eq!(u[(0, 2)], Complex64::new(0.0, 0.0));
}

#[test]
fn test_fixed_gate_catalog_names() {
    let names: Vec<&str> = FixedGate::ALL.iter().map(|g| g.name()).collect();
    assert!(names.contains(&"H"));
    assert!(names.contains(&"Toffoli"));
    assert_eq!(FixedGate::Cnot.matrix(), *CNOT);
}

#[test]
fn test_qft_inverse_is_adjoint() {
    let f = qft(2).unwrap();
    let inverse = adjoint(&f);
    let product = multiply(&inverse, &f).unwrap();
    assert!(equals(&product, &Matrix::identity(4, 4), 1e-9));
}

#[test]
fn test_rotation_named_gate() {
    let rot = Rotation::new(Axis::Y, 0.5);
    assert_eq!(rot.name(), "Ry");
    assert!(equals(&rot.matrix(), &ry(0.5), 1e-15));
}
