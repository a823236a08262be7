use cso3d::math::{Rotation, Vector};
use cso3d::query::{self, QueryOptions};
use cso3d::shape::{ConvexMesh, MeshCollider};

fn main() {
    let cube = ConvexMesh::cuboid(Vector::new(1.0, 1.0, 1.0));
    let a = MeshCollider::new(cube.clone());
    let mut b = MeshCollider::new(cube);
    let options = QueryOptions::default();

    b.set_origin(Vector::new(0.5, 0.0, 0.0));
    b.set_rotation(Rotation::from_axis_angle(&Vector::y_axis(), 0.3));

    let penetration = query::penetration(&a, &b, &options)
        .expect("EPA precondition violated.")
        .expect("The colliders should intersect.");

    println!("Penetration depth: {}", penetration.depth);
    println!("Separation direction: {}", penetration.normal.into_inner());
    println!(
        "EPA status: {:?} after {} iterations",
        penetration.status, penetration.iterations
    );

    // Moving `b` along the penetration vector (with a small margin) separates the colliders.
    b.set_origin(b.origin() + penetration.penetration_vector * 1.01);
    assert!(!query::intersection_test(&a, &b, &options.gjk));
}
