//! The simplex state machine driving the boolean GJK algorithm.

use crate::math::{Point, Real, Vector};
use crate::utils::{any_perpendicular, is_near_zero};
use arrayvec::ArrayVec;
use core::ops::Index;

/// A simplex of at most four points of the Minkowski difference, most recent point first.
///
/// The simplex only changes through [`Simplex::push_front`], [`Simplex::set`],
/// [`Simplex::clear`] and [`Simplex::handle`]. Its points are stored inline.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    points: ArrayVec<Point<Real>, 4>,
}

impl Simplex {
    /// The maximum number of points of a simplex.
    pub const CAPACITY: usize = 4;

    /// Creates an empty simplex.
    pub fn new() -> Self {
        Simplex {
            points: ArrayVec::new(),
        }
    }

    /// Creates a simplex from a list of at most four points, most recent first.
    ///
    /// # Panics
    ///
    /// Panics if `points` has more than four elements.
    pub fn from_points(points: &[Point<Real>]) -> Self {
        let mut result = Self::new();
        result.set(points);
        result
    }

    /// Replaces the points of this simplex.
    ///
    /// # Panics
    ///
    /// Panics if `points` has more than four elements.
    pub fn set(&mut self, points: &[Point<Real>]) {
        assert!(
            points.len() <= Self::CAPACITY,
            "A simplex can have at most 4 points."
        );
        self.points.clear();
        self.points.extend(points.iter().copied());
    }

    /// Inserts a point at the front of this simplex.
    ///
    /// If the simplex is already full, its oldest (last) point is discarded.
    pub fn push_front(&mut self, pt: Point<Real>) {
        if self.points.is_full() {
            let _ = self.points.pop();
        }

        self.points.insert(0, pt);
    }

    /// Removes all the points of this simplex.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently inserted point.
    #[inline]
    pub fn front(&self) -> Option<&Point<Real>> {
        self.points.first()
    }

    /// The oldest point.
    #[inline]
    pub fn back(&self) -> Option<&Point<Real>> {
        self.points.last()
    }

    /// The points of this simplex, most recent first.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Reduces this simplex to the feature closest to the origin and updates the search
    /// direction toward the origin.
    ///
    /// Returns `true` if, and only if, this simplex is a tetrahedron enclosing the origin.
    pub fn handle(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.points.len() {
            0 => false,
            1 => self.handle_point(dir),
            2 => self.handle_line(dir),
            3 => self.handle_triangle(dir),
            _ => self.handle_tetrahedron(dir),
        }
    }

    fn handle_point(&mut self, dir: &mut Vector<Real>) -> bool {
        *dir = -self.points[0].coords;
        false
    }

    fn handle_line(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];

        let ab = b - a;
        let ao = -a.coords;

        if ab.dot(&ao) > 0.0 {
            let n = ab.cross(&ao);

            if is_near_zero(&n) {
                // The origin lies on the line AB.
                *dir = any_perpendicular(&ab);
            } else {
                *dir = n.cross(&ab);
            }
        } else {
            self.set(&[a]);
            *dir = ao;
        }

        false
    }

    fn handle_triangle(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];

        let ab = b - a;
        let ac = c - a;
        let ao = -a.coords;

        let abc = ab.cross(&ac);

        if abc.cross(&ac).dot(&ao) > 0.0 {
            if ac.dot(&ao) > 0.0 {
                self.set(&[a, c]);
                *dir = ac.cross(&ao).cross(&ac);
                return false;
            }

            self.set(&[a, b]);
            return self.handle_line(dir);
        }

        if ab.cross(&abc).dot(&ao) > 0.0 {
            self.set(&[a, b]);
            return self.handle_line(dir);
        }

        if abc.dot(&ao) > 0.0 {
            *dir = abc;
        } else {
            self.set(&[a, c, b]);
            *dir = -abc;
        }

        false
    }

    fn handle_tetrahedron(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];
        let d = self.points[3];

        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let ao = -a.coords;

        let faces = [
            (ab.cross(&ac), [a, b, c]),
            (ac.cross(&ad), [a, c, d]),
            (ad.cross(&ab), [a, d, b]),
        ];

        for (normal, tri) in &faces {
            if normal.dot(&ao) > 0.0 {
                self.set(tri);
                return self.handle_triangle(dir);
            }
        }

        true
    }
}

impl Index<usize> for Simplex {
    type Output = Point<Real>;

    #[inline]
    fn index(&self, i: usize) -> &Point<Real> {
        &self.points[i]
    }
}
