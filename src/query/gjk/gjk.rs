//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK works on the **Minkowski difference** (also called Configuration Space Obstacle or CSO)
//! `A - B` of two convex shapes: the shapes intersect if, and only if, the CSO contains the origin.
//! Starting from an arbitrary support point, the algorithm grows a [`Simplex`] toward the origin
//! until either:
//!
//! - a support point fails to pass the origin, proving that the shapes are disjoint, or
//! - a tetrahedron enclosing the origin is found, proving that the shapes intersect.
//!
//! The enclosing tetrahedron is the starting polytope of the EPA algorithm (see
//! [`crate::query::epa`]).
//!
//! # Boundary contact
//!
//! Shapes that only touch have the origin on the boundary of their CSO. Depending on the order
//! of the support queries, GJK may report such contacts as intersections. Use
//! [`crate::query::intersection_test`] to treat touching shapes as disjoint.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::Simplex;
use crate::shape::Collider;
use crate::utils::{any_perpendicular, is_near_zero};

/// The absolute tolerance used by the GJK and EPA algorithms.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Options for the GJK algorithm.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GjkOptions {
    /// The maximum number of support queries performed after the initial one.
    ///
    /// Reaching this limit is reported as a separation.
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

/// The outcome of the GJK algorithm.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GjkResult {
    /// Do the shapes intersect?
    pub hit: bool,
    /// The last simplex built by the algorithm.
    ///
    /// If `hit` is `true`, this is a tetrahedron of the Minkowski difference enclosing the
    /// origin.
    pub simplex: Simplex,
}

/// Computes the support point of the Minkowski difference `a - b` along `dir`.
#[inline]
pub fn find_support_vertex<A, B>(a: &A, b: &B, dir: &Vector<Real>) -> Point<Real>
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    let pa = a.find_abs_furthest_vertex(dir);
    let pb = b.find_abs_furthest_vertex(&-dir);
    Point::from(pa - pb)
}

/// Tests if two colliders intersect.
pub fn intersects<A, B>(a: &A, b: &B, options: &GjkOptions) -> bool
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    intersects_with_simplex(a, b, options).hit
}

/// Tests if two colliders intersect, and returns the simplex built along the way.
///
/// If the colliders intersect, the returned simplex is a tetrahedron enclosing the origin, and
/// can be passed to [`crate::query::epa::solve`].
pub fn intersects_with_simplex<A, B>(a: &A, b: &B, options: &GjkOptions) -> GjkResult
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    let mut simplex = Simplex::new();
    let support = find_support_vertex(a, b, &Vector::x());
    simplex.push_front(support);

    let mut dir = -support.coords;

    if is_near_zero(&dir) {
        // The origin is the furthest point of the CSO along `+x`: it cannot be an interior point.
        return GjkResult {
            hit: false,
            simplex,
        };
    }

    for _ in 0..options.max_iterations {
        let support = find_support_vertex(a, b, &dir);

        if support.coords.dot(&dir) <= 0.0 {
            return GjkResult {
                hit: false,
                simplex,
            };
        }

        simplex.push_front(support);

        if simplex.handle(&mut dir) {
            return GjkResult { hit: true, simplex };
        }

        if is_near_zero(&dir) {
            dir = match simplex.points() {
                [p0, p1, ..] => any_perpendicular(&(p1 - p0)),
                [p0] => any_perpendicular(&p0.coords),
                [] => Vector::x(),
            };
        }
    }

    log::debug!(
        "GJK: reached the maximum number of iterations ({}).",
        options.max_iterations
    );

    GjkResult {
        hit: false,
        simplex,
    }
}
