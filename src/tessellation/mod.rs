mod tessellate_face;
mod tessellate_solid;

pub use tessellate_face::TessellateFace;
pub use tessellate_solid::TessellateSolid;

use crate::math::{Point2, Point3, Vector3};
use crate::operations::query::Aabb;

/// A triangle mesh ready for display.
///
/// Vertices are not shared between faces, so every vertex carries the
/// normal of the planar face it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Unit vertex normals.
    pub normals: Vec<Vector3>,
    /// Planar UV coordinates in the owning face's frame.
    pub uvs: Vec<Point2>,
    /// Triangle indices, counter-clockwise when viewed against the normal.
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends another mesh, offsetting its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Axis-aligned bounds of the vertex positions.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Corner positions of triangle `index`.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = *self.indices.get(index)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Enclosed volume by the divergence theorem.
    ///
    /// Positive for a closed mesh whose triangles wind outward.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        (0..self.indices.len())
            .filter_map(|i| self.triangle(i))
            .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)) / 6.0)
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn single_triangle(z: f64) -> TriangleMesh {
        TriangleMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, z),
                Point3::new(1.0, 0.0, z),
                Point3::new(0.0, 1.0, z),
            ],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::origin(); 3],
            indices: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn merge_offsets_indices() {
        let mut mesh = single_triangle(0.0);
        mesh.merge(&single_triangle(1.0));
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices[1], [3, 4, 5]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let mut mesh = single_triangle(-1.0);
        mesh.merge(&single_triangle(2.0));
        let bb = mesh.bounding_box().unwrap();
        assert!((bb.size() - Vector3::new(1.0, 1.0, 3.0)).norm() < 1e-12);
        assert!(TriangleMesh::default().bounding_box().is_none());
    }
}
