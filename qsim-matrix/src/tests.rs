//! Testes integrados para qsim-matrix

use crate::*;

fn sample_matrices() -> Vec<Matrix> {
    let c = Complex64::new;
    vec![
        Matrix::from_array([[c(1.0, 0.5), c(-2.0, 0.0), c(0.0, 3.0)]]),
        Matrix::from_array([[c(0.0, 1.0)], [c(2.0, -1.0)]]),
        Matrix::from_array([[c(1.0, 2.0), c(3.0, 4.0)], [c(5.0, -6.0), c(0.0, 0.0)]]),
        Matrix::identity(3, 2),
        Matrix::filled(4, 4, c(0.25, -0.25)),
    ]
}

#[test]
fn test_tensor_dimensions() {
    let a = Matrix::zero(2, 3);
    let b = Matrix::zero(4, 5);
    assert_eq!(tensor_product(&a, &b).dims(), (8, 15));
}

#[test]
fn test_tensor_identities() {
    let i2 = Matrix::identity(2, 2);
    assert_eq!(tensor_product(&i2, &i2), Matrix::identity(4, 4));
}

#[test]
fn test_multiply_by_identity() {
    for m in sample_matrices() {
        let i = Matrix::identity(m.cols(), m.cols());
        assert!(equals(&multiply(&m, &i).unwrap(), &m, DEFAULT_TOLERANCE));
    }
}

#[test]
fn test_adjoint_involution() {
    for m in sample_matrices() {
        assert!(equals(&adjoint(&adjoint(&m)), &m, DEFAULT_TOLERANCE));
    }
}

#[test]
fn test_transpose_swaps_dims() {
    for m in sample_matrices() {
        let t = transpose(&m);
        assert_eq!(t.dims(), (m.cols(), m.rows()));
        assert_eq!(transpose(&t), m);
    }
}

#[test]
fn test_hermitian_detection() {
    let c = Complex64::new;
    let h = Matrix::from_array([[c(2.0, 0.0), c(1.0, -1.0)], [c(1.0, 1.0), c(3.0, 0.0)]]);
    assert!(is_hermitian(&h));
    let not_h = Matrix::from_array([[c(2.0, 0.0), c(1.0, 1.0)], [c(1.0, 1.0), c(3.0, 0.0)]]);
    assert!(!is_hermitian(&not_h));
    assert!(!is_hermitian(&Matrix::zero(2, 3)));
}

#[test]
fn test_norm_matches_inner_product() {
    for m in sample_matrices() {
        let ip = inner_product(&m, &m).unwrap();
        assert!(ip.im.abs() < 1e-12);
        assert!((norm(&m) - ip.re.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn test_equals_tolerance() {
    let a = Matrix::filled(2, 2, Complex64::new(1.0, 1.0));
    let b = Matrix::filled(2, 2, Complex64::new(1.0 + 1e-7, 1.0));
    assert!(!equals(&a, &b, 1e-9));
    assert!(equals(&a, &b, 1e-6));
}

#[test]
fn test_scalar_then_add_cancels() {
    for m in sample_matrices() {
        let neg = scalar_multiply(-1.0, &m);
        let zero = add(&m, &neg).unwrap();
        assert!(equals(&zero, &Matrix::zero(m.rows(), m.cols()), DEFAULT_TOLERANCE));
    }
}

#[test]
fn test_tensor_mixed_product_property() {
    // (A⊗B)(C⊗D) = (AC)⊗(BD)
    let m = sample_matrices();
    let a = &m[2];
    let b = &m[1];
    let c = &m[2];
    let d = Matrix::from_array([[Complex64::new(1.0, -1.0), Complex64::new(0.5, 0.0)]]);
    let lhs = multiply(&tensor_product(a, b), &tensor_product(c, &d)).unwrap();
    let rhs = tensor_product(&multiply(a, c).unwrap(), &multiply(b, &d).unwrap());
    assert!(equals(&lhs, &rhs, 1e-9));
}
