mod epa3;
mod gjk3;
mod intersection3;
mod penetration_random3;

use cso3d::math::Vector;
use cso3d::shape::{ConvexMesh, MeshCollider};

/// The box `[-1, 1]^3` translated by `origin`.
pub fn unit_cube_at(origin: Vector<f32>) -> MeshCollider {
    let mut collider = MeshCollider::new(ConvexMesh::cuboid(Vector::repeat(1.0)));
    collider.set_origin(origin);
    collider
}
