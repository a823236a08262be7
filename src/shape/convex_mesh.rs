use crate::math::{Point, Real, Vector};
use crate::shape::{SupportMap, Triangle};
use crate::utils;

use alloc::vec::Vec;

/// Indicated an inconsistency while building a convex mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexMeshError {
    /// A convex mesh must contain at least one vertex.
    #[error("a convex mesh must contain at least one vertex.")]
    NoVertices,
    /// A triangle refers to a vertex that does not exist.
    #[error("the triangle {triangle} refers to the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A convex polyhedron described by its vertex buffer.
///
/// The triangle index buffer is optional: the support function only looks at the vertices, the
/// triangles are kept for callers that need the mesh faces (rendering, debugging, etc.)
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl ConvexMesh {
    /// Creates a new convex mesh from its vertices and triangles.
    ///
    /// The vertices are assumed to be in convex position. Fails if there is no vertex or if a
    /// triangle index is out of bounds.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, ConvexMeshError> {
        if vertices.is_empty() {
            return Err(ConvexMeshError::NoVertices);
        }

        for (i, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|id| **id as usize >= vertices.len()) {
                return Err(ConvexMeshError::IndexOutOfBounds {
                    triangle: i as u32,
                    index: *bad,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(ConvexMesh { vertices, indices })
    }

    /// Creates a new convex mesh from a cloud of points, without triangles.
    pub fn from_points(vertices: Vec<Point<Real>>) -> Result<Self, ConvexMeshError> {
        Self::new(vertices, Vec::new())
    }

    /// Creates the mesh of an axis-aligned box centered at the origin.
    ///
    /// All the triangles are wound counterclockwise when seen from outside of the box.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        const SIGNS: [[Real; 3]; 8] = [
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
        ];

        let vertices = SIGNS
            .iter()
            .map(|s| Point::from(Vector::from(*s).component_mul(&half_extents)))
            .collect();
        let indices = alloc::vec![
            [0, 1, 3],
            [0, 3, 2],
            [7, 5, 4],
            [7, 4, 6],
            [0, 7, 6],
            [0, 6, 1],
            [2, 3, 4],
            [2, 4, 5],
            [0, 2, 5],
            [0, 5, 7],
            [1, 6, 4],
            [1, 4, 3],
        ];

        ConvexMesh { vertices, indices }
    }

    /// Creates a box stretched between the `bottom` and `top` points.
    ///
    /// The box has a square section of half-side `|top - bottom| / ratio`, oriented along the
    /// `forward` and `right` directions (which are expected to be orthonormal). Vertices `0..4`
    /// lie on the bottom face and `4..8` on the top face.
    pub fn oriented_box(
        top: Point<Real>,
        bottom: Point<Real>,
        forward: Vector<Real>,
        right: Vector<Real>,
        ratio: Real,
    ) -> Self {
        let side = na::distance(&top, &bottom) / ratio;
        let corners = [
            forward + right,
            forward - right,
            -forward + right,
            -forward - right,
        ];

        let vertices = [bottom, top]
            .iter()
            .flat_map(|base| corners.iter().map(move |c| base + c * side))
            .collect();
        let indices = alloc::vec![
            // Bottom.
            [0, 2, 3],
            [0, 3, 1],
            // Top.
            [4, 7, 6],
            [4, 5, 7],
            // Front.
            [0, 5, 1],
            [0, 4, 5],
            // Right.
            [0, 6, 2],
            [0, 4, 6],
            // Back.
            [2, 7, 3],
            [2, 6, 7],
            // Left.
            [1, 7, 5],
            [1, 3, 7],
        ];

        ConvexMesh { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangle index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Gets the `i`-th triangle of this mesh, in local space.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh, in local space.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }
}

impl SupportMap for ConvexMesh {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.vertices)
    }
}
