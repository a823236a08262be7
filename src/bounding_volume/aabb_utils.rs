use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Collider;

/// Computes the world-space AABB of a collider from its support function.
///
/// This performs six support queries, one along each positive and negative axis.
pub fn collider_aabb<C>(collider: &C) -> Aabb
where
    C: ?Sized + Collider,
{
    let mut min = na::zero::<Vector<Real>>();
    let mut max = na::zero::<Vector<Real>>();
    let mut basis = na::zero::<Vector<Real>>();

    for d in 0..DIM {
        basis[d] = 1.0;
        max[d] = collider.find_abs_furthest_vertex(&basis)[d];

        basis[d] = -1.0;
        min[d] = collider.find_abs_furthest_vertex(&basis)[d];

        basis[d] = 0.0;
    }

    Aabb::new(Point::from(min), Point::from(max))
}

/// Computes the AABB of a set of points.
///
/// # Panics
///
/// Panics if the iterator is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let mut min: Point<Real> = *p0;
    let mut max: Point<Real> = *p0;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Aabb::new(min, max)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Rotation;
    use crate::shape::{ConvexMesh, Cuboid, MeshCollider};

    #[test]
    fn collider_aabb_of_transformed_mesh() {
        let mut collider = MeshCollider::new(ConvexMesh::cuboid(Vector::new(1.0, 2.0, 3.0)));
        collider.set_origin(Vector::new(10.0, 0.0, -1.0));
        collider.set_scale(Vector::new(2.0, 1.0, 1.0));

        let aabb = collider_aabb(&collider);
        assert_eq!(aabb.mins, Point::new(8.0, -2.0, -4.0));
        assert_eq!(aabb.maxs, Point::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn rotated_collider_aabb_matches_vertices() {
        let collider = MeshCollider::with_transform(
            ConvexMesh::cuboid(Vector::new(1.0, 2.0, 3.0)),
            Vector::new(0.5, 0.0, 0.0),
            Rotation::from_euler_angles(0.4, 0.1, -0.9),
            Vector::repeat(1.0),
        );
        let aabb = collider_aabb(&collider);
        let world_pts: alloc::vec::Vec<_> = collider
            .shape()
            .vertices()
            .iter()
            .map(|v| collider.vertex_to_world(v))
            .collect();
        let expected = local_point_cloud_aabb(&world_pts);

        approx::assert_relative_eq!(aabb.mins, expected.mins, epsilon = 1.0e-5);
        approx::assert_relative_eq!(aabb.maxs, expected.maxs, epsilon = 1.0e-5);
    }

    #[test]
    fn analytic_cuboid_collider_aabb() {
        let mut collider = MeshCollider::new(Cuboid::new(Vector::new(1.0, 2.0, 3.0)));
        collider.set_origin(Vector::new(0.0, 1.0, 0.0));

        let aabb = collider_aabb(&collider);
        assert_eq!(aabb.mins, Point::new(-1.0, -1.0, -3.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 3.0, 3.0));
    }
}
