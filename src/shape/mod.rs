//! Shapes supported by cso3d.
//!
//! Shapes are described in their local-space through a [`SupportMap`]. The
//! collision queries, however, consume [`Collider`]s: shapes placed in the
//! world, able to return their world-space support point (see
//! [`Collider::find_abs_furthest_vertex`]). [`MeshCollider`] turns any
//! support-mapped shape into a collider by attaching an origin, a rotation
//! and a per-axis scale to it.

pub use self::collider::Collider;
pub use self::convex_mesh::{ConvexMesh, ConvexMeshError};
pub use self::cuboid::Cuboid;
pub use self::mesh_collider::MeshCollider;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod collider;
mod convex_mesh;
mod cuboid;
mod mesh_collider;
mod support_map;
mod triangle;
