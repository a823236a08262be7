//! Axis Aligned Bounding Box.

use crate::math::{Point, Real};
use crate::shape::Collider;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners, with `mins <= maxs` on every axis.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use cso3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let a = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point3::new(1.0, -1.0, -1.0), Point3::new(3.0, 1.0, 1.0));
///
/// // The two boxes share a face.
/// assert!(a.intersects(&b));
/// assert!(!a.intersects_strictly(&b));
/// # }
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` must be smaller than the related component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Computes the world-space AABB of a collider.
    pub fn from_collider<C: ?Sized + Collider>(collider: &C) -> Self {
        super::aabb_utils::collider_aabb(collider)
    }

    /// Does this AABB intersect `other`?
    ///
    /// AABBs sharing a face, an edge or a corner intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Does this AABB overlap `other` with a non-empty interior?
    ///
    /// Unlike [`Aabb::intersects`], AABBs that only touch are not overlapping.
    #[inline]
    pub fn intersects_strictly(&self, other: &Aabb) -> bool {
        na::partial_lt(&self.mins, &other.maxs) && na::partial_gt(&self.maxs, &other.mins)
    }
}
