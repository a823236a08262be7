//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.
//!
//! Starting from the tetrahedron found by GJK, EPA grows a convex polytope inside of the
//! Minkowski difference `A - B` until the face closest to the origin lies on the boundary of the
//! Minkowski difference. That face gives the direction and depth of the smallest translation
//! separating the two shapes.

use crate::math::{Point, Real, Vector};
use crate::query::error::{EpaError, PreconditionViolation};
use crate::query::gjk::{self, Simplex};
use crate::shape::Collider;
use crate::utils;
use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use na::Unit;
use ordered_float::OrderedFloat;

/// A point is in front of a face if it is further than this along the face normal.
const VISIBILITY_EPS: Real = 1.0e-7;
/// Squared norm under which a face normal is considered degenerate.
const DEGENERATE_NORMAL_EPS: Real = 1.0e-30;

/// The parameters of the EPA algorithm.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaParams {
    /// The maximum number of expansions of the polytope.
    pub max_iterations: usize,
    /// The absolute tolerance on the distance growth of the closest face.
    ///
    /// The algorithm converges once the support point along the normal of the closest face is no
    /// further than `tolerance` from that face.
    pub tolerance: Real,
}

impl Default for EpaParams {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            tolerance: 1.0e-4,
        }
    }
}

/// Why the EPA algorithm stopped before converging.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The maximum number of iterations was reached.
    IterationLimit,
    /// A support point had non-finite coordinates.
    NumericalInstability,
    /// The new support point did not produce any horizon edge.
    EmptyHorizon,
}

/// The quality of a penetration computed by the EPA algorithm.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpaStatus {
    /// The closest face is within tolerance of the Minkowski difference boundary.
    Converged,
    /// The algorithm stopped early; the result is the closest face of the last polytope.
    BestEffort(ExhaustionReason),
    /// The initial tetrahedron was flat. The result is finite but may not be meaningful.
    Degenerate,
}

impl EpaStatus {
    /// Did the algorithm converge?
    #[inline]
    pub fn is_converged(self) -> bool {
        self == EpaStatus::Converged
    }
}

/// The penetration between two colliders.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The separation direction, pointing from the first collider toward the second one.
    pub normal: Unit<Vector<Real>>,
    /// `normal * depth`.
    ///
    /// Translating the second collider by this vector, or the first one by its opposite, makes
    /// the colliders touch.
    pub penetration_vector: Vector<Real>,
    /// The penetration depth, always non-negative.
    pub depth: Real,
    /// The number of expansions performed.
    pub iterations: usize,
    /// The number of vertices of the final polytope.
    pub num_vertices: usize,
    /// The number of faces of the final polytope.
    pub num_faces: usize,
    /// How the result was obtained.
    pub status: EpaStatus,
}

#[derive(Copy, Clone, PartialEq, Eq)]
struct FaceId {
    id: usize,
    neg_dist: OrderedFloat<Real>,
}

impl FaceId {
    fn new(id: usize, dist: Real) -> Self {
        FaceId {
            id,
            neg_dist: OrderedFloat(-dist),
        }
    }
}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    // The greatest face id is the closest face, with the smallest index on ties.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.neg_dist
            .cmp(&other.neg_dist)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Copy, Clone, Debug)]
struct Face {
    pts: [usize; 3],
    normal: Unit<Vector<Real>>,
    dist: Real,
}

impl Face {
    /// Builds the face with vertices `pts`, oriented so that its normal points away from the
    /// origin.
    ///
    /// If the origin is on the face plane, the normal points away from `interior` instead.
    fn new(vertices: &[Point<Real>], pts: [usize; 3], interior: &Point<Real>) -> Self {
        let [i0, mut i1, mut i2] = pts;
        let a0 = vertices[i0];
        let a1 = vertices[i1];
        let a2 = vertices[i2];

        let mut n = (a1 - a0).cross(&(a2 - a0));

        if n.norm_squared() <= DEGENERATE_NORMAL_EPS {
            log::debug!(
                "Hit unexpected state in EPA: degenerate face {:?}, using an arbitrary normal.",
                pts
            );
            n = utils::any_perpendicular(&(a1 - a0));
        }

        let mut normal = Unit::new_normalize(n);
        let dist = normal.dot(&a0.coords);
        let outward = if dist.abs() <= gjk::eps_tol() {
            normal.dot(&(a0 - interior)) >= 0.0
        } else {
            dist >= 0.0
        };

        if !outward {
            core::mem::swap(&mut i1, &mut i2);
            normal = -normal;
        }

        Face {
            pts: [i0, i1, i2],
            normal,
            dist: normal.dot(&a0.coords),
        }
    }

    fn can_be_seen_by(&self, pt: &Point<Real>) -> bool {
        self.normal.dot(&pt.coords) - self.dist > VISIBILITY_EPS
    }
}

/// A directed polytope edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    fn reversed(self) -> Self {
        Edge {
            a: self.b,
            b: self.a,
        }
    }
}

/// The Expanding Polytope Algorithm in 3D.
///
/// The same `Epa` instance can be reused for multiple queries to avoid repeated allocations:
/// internal buffers are cleared at the beginning of each call to [`Epa::solve`].
#[derive(Default)]
pub struct Epa {
    vertices: Vec<Point<Real>>,
    faces: Vec<Face>,
    visible: Vec<bool>,
    horizon: Vec<Edge>,
    heap: BinaryHeap<FaceId>,
}

impl Epa {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.visible.clear();
        self.horizon.clear();
        self.heap.clear();
    }

    /// Computes the penetration of two intersecting colliders.
    ///
    /// The `simplex` must be a tetrahedron of the Minkowski difference `a - b` enclosing the
    /// origin, as returned by [`gjk::intersects_with_simplex`]. A flat tetrahedron is accepted and
    /// yields a result tagged [`EpaStatus::Degenerate`].
    pub fn solve<A, B>(
        &mut self,
        a: &A,
        b: &B,
        simplex: &Simplex,
        params: &EpaParams,
    ) -> Result<Penetration, EpaError>
    where
        A: ?Sized + Collider,
        B: ?Sized + Collider,
    {
        self.reset();

        let flat = check_initial_tetrahedron(simplex)?;

        /*
         * Initialization.
         */
        self.vertices.extend_from_slice(simplex.points());
        let interior = Point::from(
            self.vertices
                .iter()
                .fold(Vector::zeros(), |acc, pt| acc + pt.coords)
                / 4.0,
        );

        for pts in [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]] {
            self.faces.push(Face::new(&self.vertices, pts, &interior));
        }

        self.rebuild_heap();

        /*
         * Expansion.
         */
        let mut face = self.closest_face();
        let mut iterations = 0;
        let mut exhaustion = ExhaustionReason::IterationLimit;

        for niter in 0..params.max_iterations {
            let support = gjk::find_support_vertex(a, b, &face.normal);

            if !support.coords.iter().all(|e| e.is_finite()) {
                log::debug!("Hit unexpected state in EPA: non-finite support point.");
                exhaustion = ExhaustionReason::NumericalInstability;
                break;
            }

            if face.normal.dot(&support.coords) - face.dist <= params.tolerance {
                let status = if flat {
                    EpaStatus::Degenerate
                } else {
                    EpaStatus::Converged
                };
                return Ok(self.penetration(&face, niter + 1, status));
            }

            self.compute_horizon(&support);

            if self.horizon.is_empty() {
                log::debug!("Hit unexpected state in EPA: empty horizon.");
                exhaustion = ExhaustionReason::EmptyHorizon;
                break;
            }

            let new_id = self.vertices.len();
            self.vertices.push(support);

            let mut face_id = 0;
            self.faces.retain(|_| {
                let keep = !self.visible[face_id];
                face_id += 1;
                keep
            });

            for edge in &self.horizon {
                self.faces
                    .push(Face::new(&self.vertices, [edge.a, edge.b, new_id], &interior));
            }

            self.rebuild_heap();
            face = self.closest_face();
            iterations = niter + 1;
        }

        /*
         * Exhaustion: fall back to the closest face of the current polytope.
         */
        if exhaustion == ExhaustionReason::IterationLimit {
            log::debug!(
                "EPA: reached the maximum number of iterations ({}).",
                params.max_iterations
            );
        }

        let status = if flat {
            EpaStatus::Degenerate
        } else {
            EpaStatus::BestEffort(exhaustion)
        };

        Ok(self.penetration(&face, iterations, status))
    }

    fn penetration(&self, face: &Face, iterations: usize, status: EpaStatus) -> Penetration {
        let depth = face.dist.max(0.0);

        Penetration {
            normal: face.normal,
            penetration_vector: face.normal.into_inner() * depth,
            depth,
            iterations,
            num_vertices: self.vertices.len(),
            num_faces: self.faces.len(),
            status,
        }
    }

    /// The face of the polytope closest to the origin.
    ///
    /// The polytope is never empty: visible faces are removed only once a non-empty horizon
    /// guarantees their replacement.
    fn closest_face(&self) -> Face {
        let id = self.heap.peek().map_or(0, |best| best.id);
        self.faces[id]
    }

    fn rebuild_heap(&mut self) {
        self.heap.clear();
        self.heap.extend(
            self.faces
                .iter()
                .enumerate()
                .map(|(id, face)| FaceId::new(id, face.dist)),
        );
    }

    /// Marks the faces visible from `pt` and collects the boundary of the visible region.
    ///
    /// Edges shared by two visible faces cancel out, leaving the directed horizon edges.
    fn compute_horizon(&mut self, pt: &Point<Real>) {
        self.visible.clear();
        self.horizon.clear();

        for face in &self.faces {
            let visible = face.can_be_seen_by(pt);
            self.visible.push(visible);

            if visible {
                for k in 0..3 {
                    let edge = Edge {
                        a: face.pts[k],
                        b: face.pts[(k + 1) % 3],
                    };

                    match self.horizon.iter().position(|e| *e == edge.reversed()) {
                        Some(i) => {
                            let _ = self.horizon.remove(i);
                        }
                        None => self.horizon.push(edge),
                    }
                }
            }
        }
    }
}

/// Computes the penetration of two intersecting colliders with a fresh [`Epa`] workspace.
///
/// See [`Epa::solve`].
pub fn solve<A, B>(
    a: &A,
    b: &B,
    simplex: &Simplex,
    params: &EpaParams,
) -> Result<Penetration, EpaError>
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    Epa::new().solve(a, b, simplex, params)
}

/// Checks that `simplex` can be expanded by EPA.
///
/// Returns `true` if the tetrahedron is flat, in which case the origin enclosure is not checked.
fn check_initial_tetrahedron(simplex: &Simplex) -> Result<bool, EpaError> {
    let [a, b, c, d] = match simplex.points() {
        [a, b, c, d] => [*a, *b, *c, *d],
        pts => {
            log::debug!(
                "EPA precondition violated: the simplex has {} points.",
                pts.len()
            );
            return Err(PreconditionViolation::SimplexSize(pts.len()).into());
        }
    };

    fn signed_volume(
        p0: &Point<Real>,
        p1: &Point<Real>,
        p2: &Point<Real>,
        p3: &Point<Real>,
    ) -> Real {
        (p1 - p0).dot(&(p2 - p0).cross(&(p3 - p0)))
    }

    let total = signed_volume(&a, &b, &c, &d);
    let diameter = [b - a, c - a, d - a, c - b, d - b, d - c]
        .iter()
        .fold(0.0, |acc: Real, e| acc.max(e.norm()));
    let tol = gjk::eps_tol() * diameter * diameter * diameter;

    if total.abs() <= tol {
        log::debug!("EPA: the initial tetrahedron is flat.");
        return Ok(true);
    }

    // Signed volumes of the tetrahedra obtained by replacing each vertex with the origin.
    let o = Point::origin();
    let sub_volumes = [
        signed_volume(&o, &b, &c, &d),
        signed_volume(&a, &o, &c, &d),
        signed_volume(&a, &b, &o, &d),
        signed_volume(&a, &b, &c, &o),
    ];

    if sub_volumes.iter().all(|v| v * total.signum() >= -tol) {
        Ok(false)
    } else {
        log::debug!("EPA precondition violated: the origin is outside of the initial tetrahedron.");
        Err(PreconditionViolation::OriginNotEnclosed.into())
    }
}
