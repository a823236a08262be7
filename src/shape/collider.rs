use crate::math::{Point, Real, Vector};

/// A convex shape placed in the world.
///
/// This is the only capability GJK and EPA require from the shapes they
/// operate on. Implementors must be convex for the collision queries to be
/// meaningful.
pub trait Collider {
    /// The world-space vertex of this collider with the greatest dot product with `dir`.
    ///
    /// `dir` does not need to be normalized.
    fn find_abs_furthest_vertex(&self, dir: &Vector<Real>) -> Point<Real>;
}

impl<C: ?Sized + Collider> Collider for &C {
    #[inline]
    fn find_abs_furthest_vertex(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).find_abs_furthest_vertex(dir)
    }
}
