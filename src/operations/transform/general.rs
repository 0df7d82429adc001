use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::Matrix4;
use crate::operations::creation::plane_through;
use crate::topology::{SolidId, TopologyStore};

/// Applies an arbitrary 4x4 transformation matrix to a solid.
pub struct GeneralTransform {
    solid: SolidId,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: SolidId, matrix: Matrix4) -> Self {
        Self { solid, matrix }
    }

    /// Executes the transformation, modifying the solid in-place.
    ///
    /// Moves every vertex, then rebuilds each face plane from its moved
    /// boundary. Normals are recomputed from geometry rather than
    /// transformed, so they stay correct under non-uniform scaling.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the matrix is singular or not
    /// affine, or if a face collapses to zero area.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        #[allow(clippy::float_cmp)]
        let is_affine = self.matrix[(3, 0)] == 0.0
            && self.matrix[(3, 1)] == 0.0
            && self.matrix[(3, 2)] == 0.0
            && self.matrix[(3, 3)] == 1.0;
        if !is_affine {
            return Err(GeometryError::Degenerate("transform is not affine".into()).into());
        }
        let det = self.matrix.fixed_view::<3, 3>(0, 0).determinant();
        if det.abs() < f64::EPSILON || !det.is_finite() {
            return Err(GeometryError::Degenerate("transform is singular".into()).into());
        }

        for vid in store.solid_vertices(self.solid)? {
            let vertex = store.vertex_mut(vid)?;
            vertex.point = self.matrix.transform_point(&vertex.point);
        }

        for face_id in store.solid_faces(self.solid)? {
            let wire = store.face(face_id)?.outer_wire;
            let points = store.wire_points(wire)?;
            let mut plane = plane_through(&points)?;
            // Mirroring transforms reverse every loop's winding.
            if det < 0.0 {
                plane = Plane::from_normal(*plane.origin(), -plane.normal())?;
            }
            store.face_mut(face_id)?.plane = plane;
        }

        Ok(())
    }
}
