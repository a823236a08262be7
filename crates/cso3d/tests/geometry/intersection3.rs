use super::unit_cube_at;
use cso3d::math::Rotation;
use cso3d::query::{self, GjkOptions};
use na::Vector3;

#[test]
fn cubes_sharing_a_face_are_not_intersecting() {
    let a = unit_cube_at(Vector3::zeros());
    let options = GjkOptions::default();

    for origin in [
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, -2.0, 0.0),
        Vector3::new(0.0, 0.0, 2.0),
        Vector3::new(2.0, 2.0, 0.0),
    ] {
        let b = unit_cube_at(origin);
        assert!(!query::intersection_test(&a, &b, &options));
        assert_eq!(
            query::penetration(&a, &b, &Default::default()),
            Ok(None),
            "unexpected penetration for {:?}",
            origin
        );
    }
}

#[test]
fn rotated_cube_intersection() {
    let mut a = unit_cube_at(Vector3::zeros());
    a.set_rotation(Rotation::from_axis_angle(
        &Vector3::z_axis(),
        core::f32::consts::FRAC_PI_4,
    ));
    let options = GjkOptions::default();

    // The rotated cube reaches `x = sqrt(2)`.
    let b = unit_cube_at(Vector3::new(2.2, 0.0, 0.0));
    assert!(query::intersection_test(&a, &b, &options));

    let b = unit_cube_at(Vector3::new(2.5, 0.0, 0.0));
    assert!(!query::intersection_test(&a, &b, &options));
}
