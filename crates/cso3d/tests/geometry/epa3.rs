use super::unit_cube_at;
use approx::assert_relative_eq;
use cso3d::query::epa::{self, EpaParams, EpaStatus};
use cso3d::query::gjk::{self, GjkOptions};
use cso3d::query::{self, QueryOptions};
use cso3d::shape::MeshCollider;
use na::Vector3;

fn translated(collider: &MeshCollider, shift: Vector3<f32>) -> MeshCollider {
    let mut result = collider.clone();
    result.set_origin(collider.origin() + shift);
    result
}

#[test]
#[allow(non_snake_case)]
fn cube_cube_EPA() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::new(0.5, 0.0, 0.0));

    let gjk = gjk::intersects_with_simplex(&a, &b, &GjkOptions::default());
    assert!(gjk.hit, "GJK should report a collision.");

    let params = EpaParams::default();
    let res = epa::solve(&a, &b, &gjk.simplex, &params).expect("Penetration not found.");

    assert_eq!(res.status, EpaStatus::Converged);
    assert_relative_eq!(res.normal.norm_squared(), 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(res.depth, 1.5, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.x, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.y, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.z, 0.0, epsilon = 1.0e-3);

    assert!(res.iterations > 0);
    assert!(res.iterations < params.max_iterations);
    assert!(res.num_faces >= 4);
    assert!(res.num_vertices > 4);
}

#[test]
fn exactly_one_penetration_direction_separates() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::new(0.5, 0.0, 0.0));
    let options = QueryOptions::default();

    let res = query::penetration(&a, &b, &options)
        .unwrap()
        .expect("Penetration not found.");
    let resolve = res.penetration_vector * 1.001;

    let sep_plus = !gjk::intersects(&a, &translated(&b, resolve), &options.gjk);
    let sep_minus = !gjk::intersects(&a, &translated(&b, -resolve), &options.gjk);
    assert!(sep_plus);
    assert!(!sep_minus);

    // Moving the first cube in the opposite direction resolves the penetration too.
    assert!(!gjk::intersects(
        &translated(&a, -resolve),
        &b,
        &options.gjk
    ));
    // Undershooting does not.
    assert!(gjk::intersects(
        &a,
        &translated(&b, res.penetration_vector * 0.9),
        &options.gjk
    ));
}

#[test]
fn off_axis_penetration_picks_shallowest_axis() {
    let a = unit_cube_at(Vector3::zeros());
    let b = unit_cube_at(Vector3::new(1.5, 1.8, 0.0));

    let res = query::penetration(&a, &b, &QueryOptions::default())
        .unwrap()
        .expect("Penetration not found.");

    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.y, 1.0, epsilon = 1.0e-3);
}

#[test]
fn coincident_cubes_penetration() {
    let a = unit_cube_at(Vector3::new(3.0, -1.0, 2.0));
    let b = unit_cube_at(Vector3::new(3.0, -1.0, 2.0));

    let res = query::penetration(&a, &b, &QueryOptions::default())
        .unwrap()
        .expect("Penetration not found.");

    assert!(res.depth.is_finite());
    assert_relative_eq!(res.depth, 2.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.norm(), 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(res.normal.amax(), 1.0, epsilon = 1.0e-3);
}
