use crate::math::{HomogeneousMatrix, Point, Real, Rotation, Translation, Vector};
use crate::shape::{Collider, ConvexMesh, SupportMap, Triangle};

/// A shape placed in the world with a translation, a rotation and a per-axis scale.
///
/// A local point `v` of the shape is located at `origin + scale ∘ (rotation * v)` in world
/// space, where `∘` is the component-wise product.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone)]
pub struct MeshCollider<S = ConvexMesh> {
    shape: S,
    origin: Vector<Real>,
    rotation: Rotation<Real>,
    scale: Vector<Real>,
}

impl<S> MeshCollider<S> {
    /// Places `shape` at the world origin, without rotation and with a unit scale.
    pub fn new(shape: S) -> Self {
        Self::with_transform(
            shape,
            Vector::zeros(),
            Rotation::identity(),
            Vector::repeat(1.0),
        )
    }

    /// Places `shape` in the world with the given transform.
    pub fn with_transform(
        shape: S,
        origin: Vector<Real>,
        rotation: Rotation<Real>,
        scale: Vector<Real>,
    ) -> Self {
        MeshCollider {
            shape,
            origin,
            rotation,
            scale,
        }
    }

    /// The shape wrapped by this collider.
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// The world-space translation of this collider.
    #[inline]
    pub fn origin(&self) -> &Vector<Real> {
        &self.origin
    }

    /// Sets the world-space translation of this collider.
    #[inline]
    pub fn set_origin(&mut self, origin: Vector<Real>) {
        self.origin = origin;
    }

    /// The rotation of this collider.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// Sets the rotation of this collider.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.rotation = rotation;
    }

    /// The per-axis scale of this collider.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// Sets the per-axis scale of this collider.
    #[inline]
    pub fn set_scale(&mut self, scale: Vector<Real>) {
        self.scale = scale;
    }

    /// The homogeneous matrix mapping local points of the shape to world space.
    ///
    /// This is the product `translation * scale * rotation`.
    pub fn to_world_matrix(&self) -> HomogeneousMatrix<Real> {
        Translation::from(self.origin).to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(&self.scale)
            * self.rotation.to_homogeneous()
    }

    /// Maps a local point of the shape to world space.
    #[inline]
    pub fn vertex_to_world(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.origin + self.scale.component_mul(&(self.rotation * pt.coords)))
    }

    /// Maps a world-space direction to the local space of the shape.
    ///
    /// The result is not normalized. Support queries along the returned direction in local space
    /// match support queries along `dir` in world space.
    #[inline]
    pub fn world_dir_to_local(&self, dir: &Vector<Real>) -> Vector<Real> {
        self.rotation
            .inverse_transform_vector(&self.scale.component_mul(dir))
    }
}

impl MeshCollider<ConvexMesh> {
    /// An iterator through all the triangles of the mesh, in world space.
    pub fn world_triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.shape.triangles().map(move |tri| {
            Triangle::new(
                self.vertex_to_world(&tri.a),
                self.vertex_to_world(&tri.b),
                self.vertex_to_world(&tri.c),
            )
        })
    }
}

impl<S: SupportMap> Collider for MeshCollider<S> {
    #[inline]
    fn find_abs_furthest_vertex(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.world_dir_to_local(dir);
        self.vertex_to_world(&self.shape.local_support_point(&local_dir))
    }
}
