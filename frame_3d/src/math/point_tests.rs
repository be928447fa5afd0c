use glam::DVec3;
use crate::math::Vector;
use super::*;

#[test]
fn test_point_coordinates() {
    let p = Point::new(1.0, -2.0, 3.5);
    assert_eq!(p.coordinates(), [1.0, -2.0, 3.5]);
    assert_eq!(p.x(), 1.0);
    assert_eq!(p.y(), -2.0);
    assert_eq!(p.z(), 3.5);
    assert_eq!(p.to_dvec3(), DVec3::new(1.0, -2.0, 3.5));
}

#[test]
fn test_origin_is_default() {
    assert_eq!(Point::default(), Point::ORIGIN);
    assert_eq!(Point::ORIGIN.coordinates(), [0.0, 0.0, 0.0]);
}

#[test]
fn test_point_difference_points_from_rhs_to_lhs() {
    let eye = Point::new(0.0, 0.0, 5.0);
    let focal = Point::ORIGIN;
    let v = eye - focal;
    assert_eq!(v, Vector::new(0.0, 0.0, 5.0));
    assert_eq!(Vector::from_points(eye, focal), v);
}

#[test]
fn test_translate() {
    let p = Point::new(1.0, 1.0, 1.0);
    let offset = Vector::new(2.0, 0.0, -1.0);
    assert_eq!(p + offset, Point::new(3.0, 1.0, 0.0));
    assert_eq!(p - offset, Point::new(-1.0, 1.0, 2.0));
    assert_eq!(p.translated(offset), p + offset);
}

#[test]
fn test_distance() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(4.0, 6.0, 3.0);
    assert_eq!(a.distance(&b), 5.0);
}

#[test]
fn test_conversions() {
    let p: Point = [4.0, 5.0, 6.0].into();
    let v: DVec3 = p.into();
    assert_eq!(v, DVec3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_abs_diff_eq() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(1.0 + 1e-10, 2.0, 3.0);
    assert!(a.abs_diff_eq(&b, 1e-9));
    assert!(!a.abs_diff_eq(&b, 1e-11));
}
