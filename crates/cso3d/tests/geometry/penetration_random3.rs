use approx::assert_relative_eq;
use cso3d::math::Rotation;
use cso3d::query::{self, EpaStatus, QueryOptions};
use cso3d::shape::{ConvexMesh, MeshCollider};
use na::Vector3;
use oorandom::Rand32;

fn rand_range(rng: &mut Rand32, min: f32, max: f32) -> f32 {
    min + rng.rand_float() * (max - min)
}

fn random_box(rng: &mut Rand32, max_offset: f32) -> MeshCollider {
    let half_extents = Vector3::new(
        rand_range(rng, 0.2, 1.5),
        rand_range(rng, 0.2, 1.5),
        rand_range(rng, 0.2, 1.5),
    );
    let origin = Vector3::new(
        rand_range(rng, -max_offset, max_offset),
        rand_range(rng, -max_offset, max_offset),
        rand_range(rng, -max_offset, max_offset),
    );
    let rotation = Rotation::from_euler_angles(
        rand_range(rng, -3.0, 3.0),
        rand_range(rng, -1.5, 1.5),
        rand_range(rng, -3.0, 3.0),
    );
    let scale = Vector3::new(
        rand_range(rng, 0.5, 1.5),
        rand_range(rng, 0.5, 1.5),
        rand_range(rng, 0.5, 1.5),
    );

    MeshCollider::with_transform(ConvexMesh::cuboid(half_extents), origin, rotation, scale)
}

#[test]
fn random_boxes_penetration_is_bounded() {
    let mut rng = Rand32::new(42);
    let options = QueryOptions::default();
    let mut num_hits = 0;

    for _ in 0..200 {
        let a = random_box(&mut rng, 0.5);
        let b = random_box(&mut rng, 0.5);

        let res = query::penetration(&a, &b, &options).expect("EPA precondition violated.");
        assert_eq!(res.is_some(), query::intersection_test(&a, &b, &options.gjk));

        if let Some(res) = res {
            num_hits += 1;
            assert!(res.iterations <= options.epa.max_iterations);
            assert!(res.depth.is_finite());
            assert!(res.depth >= 0.0);
            assert_relative_eq!(res.normal.norm(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(
                res.penetration_vector,
                res.normal.into_inner() * res.depth,
                epsilon = 1.0e-6
            );

            if res.status == EpaStatus::Converged && res.depth > 1.0e-2 {
                // No direction can separate the boxes with a shorter translation than `depth`.
                let mut moved = b.clone();
                moved.set_origin(b.origin() + res.penetration_vector * 0.5);
                assert!(query::intersection_test(&a, &moved, &options.gjk));
            }
        }
    }

    // Most pairs of boxes this close to each other overlap.
    assert!(num_hits > 50);
}
