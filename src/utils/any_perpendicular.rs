use crate::math::{Real, Vector};

/// Squared-norm threshold under which [`is_near_zero`] considers a vector null.
const NEAR_ZERO_EPS: Real = 1.0e-7;

/// Checks if the norm of `v` is smaller than `1.0e-7`.
#[inline]
pub fn is_near_zero(v: &Vector<Real>) -> bool {
    v.norm_squared() <= NEAR_ZERO_EPS * NEAR_ZERO_EPS
}

/// Computes a vector orthogonal to `v`.
///
/// The result is the first non-null cross product of `v` with the `x`, `y`,
/// and `z` axes, in that order. It is not normalized. If `v` itself is null,
/// the `x` axis is returned.
pub fn any_perpendicular(v: &Vector<Real>) -> Vector<Real> {
    [Vector::x(), Vector::y(), Vector::z()]
        .iter()
        .map(|axis| v.cross(axis))
        .find(|candidate| !is_near_zero(candidate))
        .unwrap_or(Vector::x())
}
