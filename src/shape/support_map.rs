//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function is a function associating a vector to the shape point which maximizes
/// their dot product.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;
}
