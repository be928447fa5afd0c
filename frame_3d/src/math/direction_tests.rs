use crate::error::Error;
use crate::math::Vector;
use super::*;

const EPS: f64 = 1e-12;

fn assert_right_handed_basis(b1: Direction, b2: Direction, n: Direction) {
    assert!((b1.to_vector().length() - 1.0).abs() < EPS);
    assert!((b2.to_vector().length() - 1.0).abs() < EPS);
    assert!(b1.dot_product(&n).abs() < EPS);
    assert!(b2.dot_product(&n).abs() < EPS);
    assert!(b1.dot_product(&b2).abs() < EPS);
    assert!(b1.cross_product(&b2).abs_diff_eq(&n.to_vector(), EPS));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_normalizes() {
    let d = Direction::new(0.0, 2.0, 0.0).unwrap();
    assert_eq!(d, Direction::Y);
    assert_eq!(d.components(), [0.0, 1.0, 0.0]);
}

#[test]
fn test_new_rejects_zero() {
    assert!(matches!(Direction::new(0.0, 0.0, 0.0), Err(Error::ZeroLengthVector(_))));
}

#[test]
fn test_to_vector_keeps_components() {
    let d = Direction::new(1.0, 1.0, 1.0).unwrap();
    let v = d.to_vector();
    assert_eq!(v.components(), d.components());
    assert_eq!(Vector::from(d), v);
}

#[test]
fn test_negation() {
    assert_eq!(-Direction::X, Direction::NEG_X);
    assert_eq!(-Direction::NEG_Z, Direction::Z);
}

// ============================================================================
// perpendicular_basis
// ============================================================================

#[test]
fn test_perpendicular_basis_of_z() {
    let (b1, b2) = Direction::Z.perpendicular_basis();
    assert!(b1.abs_diff_eq(&Direction::X, EPS));
    assert!(b2.abs_diff_eq(&Direction::Y, EPS));
}

#[test]
fn test_perpendicular_basis_of_y() {
    let (b1, b2) = Direction::Y.perpendicular_basis();
    assert!(b1.abs_diff_eq(&Direction::X, EPS));
    assert!(b2.abs_diff_eq(&Direction::NEG_Z, EPS));
}

#[test]
fn test_perpendicular_basis_of_neg_z() {
    let (b1, b2) = Direction::NEG_Z.perpendicular_basis();
    assert!(b1.abs_diff_eq(&Direction::X, EPS));
    assert!(b2.abs_diff_eq(&Direction::NEG_Y, EPS));
}

#[test]
fn test_perpendicular_basis_is_right_handed() {
    let samples = [
        Direction::X,
        Direction::NEG_X,
        Direction::Y,
        Direction::NEG_Y,
        Direction::Z,
        Direction::NEG_Z,
        Direction::new(1.0, 2.0, 3.0).unwrap(),
        Direction::new(-0.3, 0.1, -0.9).unwrap(),
        Direction::new(0.0, -1.0, 1e-8).unwrap(),
    ];
    for n in samples {
        let (b1, b2) = n.perpendicular_basis();
        assert_right_handed_basis(b1, b2, n);
    }
}

#[test]
fn test_perpendicular_basis_is_deterministic() {
    let n = Direction::new(0.2, -0.7, 0.4).unwrap();
    assert_eq!(n.perpendicular_basis(), n.perpendicular_basis());
}
