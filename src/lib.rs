/*!
cso3d
========

**cso3d** is a 3-dimensional narrow-phase collision detection library written
with the rust programming language.

It answers two questions about a pair of convex shapes known only through
their support functions:

* do they overlap? (the GJK algorithm, see [`query::gjk`]);
* if they do, what is the smallest translation separating them? (the EPA
  algorithm, see [`query::epa`]).

Both algorithms work on the Configuration Space Obstacle (CSO) of the two
shapes, i.e., their Minkowski difference.

```
# #[cfg(feature = "f32")] {
use cso3d::math::Vector;
use cso3d::query::{self, QueryOptions};
use cso3d::shape::{ConvexMesh, MeshCollider};

let a = MeshCollider::new(ConvexMesh::cuboid(Vector::new(1.0, 1.0, 1.0)));
let mut b = MeshCollider::new(ConvexMesh::cuboid(Vector::new(1.0, 1.0, 1.0)));
b.set_origin(Vector::new(0.5, 0.0, 0.0));

let penetration = query::penetration(&a, &b, &QueryOptions::default())
    .unwrap()
    .expect("the cubes overlap");
assert!((penetration.depth - 1.5).abs() < 1.0e-3);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Matrix4, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous transformation matrix type.
    pub use Matrix4 as HomogeneousMatrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
