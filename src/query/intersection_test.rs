use crate::bounding_volume::Aabb;
use crate::query::gjk::{self, GjkOptions};
use crate::shape::Collider;

/// Tests whether two colliders are intersecting.
///
/// Colliders that only touch are not intersecting whenever their world-space AABBs merely touch,
/// which is the case of axis-aligned boxes sharing a face.
pub fn intersection_test<A, B>(a: &A, b: &B, options: &GjkOptions) -> bool
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    Aabb::from_collider(a).intersects_strictly(&Aabb::from_collider(b))
        && gjk::intersects(a, b, options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector;
    use crate::shape::{ConvexMesh, MeshCollider};

    #[test]
    fn touching_cubes_do_not_intersect() {
        let a = MeshCollider::new(ConvexMesh::cuboid(Vector::repeat(1.0)));
        let mut b = MeshCollider::new(ConvexMesh::cuboid(Vector::repeat(1.0)));
        let options = GjkOptions::default();

        b.set_origin(Vector::new(2.0, 0.0, 0.0));
        assert!(!intersection_test(&a, &b, &options));

        b.set_origin(Vector::new(1.9, 0.0, 0.0));
        assert!(intersection_test(&a, &b, &options));

        b.set_origin(Vector::new(2.1, 0.0, 0.0));
        assert!(!intersection_test(&a, &b, &options));
    }
}
