use super::unit_cube_at;
use cso3d::query::gjk::{self, GjkOptions};
use cso3d::shape::Triangle;
use na::{Point3, Vector3};

#[test]
fn gjk_cubes_overlapping() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::new(0.0, 0.5, 0.0));

    assert!(gjk::intersects(&a, &b, &GjkOptions::default()));
}

#[test]
fn gjk_cubes_separated() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::new(0.0, 2.1, 0.0));

    assert!(!gjk::intersects(&a, &b, &GjkOptions::default()));
}

#[test]
fn gjk_cubes_with_equal_origins() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::zeros());

    let result = gjk::intersects_with_simplex(&a, &b, &GjkOptions::default());
    assert!(result.hit);
    assert_eq!(result.simplex.len(), 4);
}

#[test]
fn gjk_triangle_slicing_cube() {
    let cube = unit_cube_at(Vector3::zeros());
    let tri = Triangle::new(
        Point3::new(-3.0, -3.0, 0.0),
        Point3::new(3.0, -3.0, 0.0),
        Point3::new(0.0, 3.0, 0.0),
    );
    assert!(gjk::intersects(&cube, &tri, &GjkOptions::default()));

    let above = Triangle::new(
        Point3::new(-3.0, -3.0, 1.5),
        Point3::new(3.0, -3.0, 1.5),
        Point3::new(0.0, 3.0, 1.5),
    );
    assert!(!gjk::intersects(&cube, &above, &GjkOptions::default()));
}
