use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3};
use crate::topology::{FaceId, TopologyStore};

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Coordinates closer to zero than this are flushed before insertion.
///
/// `spade` rejects non-zero magnitudes below roughly `1.8e-43`.
const MIN_COORDINATE: f64 = 1e-40;

/// Tessellates a planar face into a triangle mesh.
pub struct TessellateFace {
    face: FaceId,
}

impl TessellateFace {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// The boundary is projected into the face plane and triangulated with a
    /// constrained Delaunay triangulation. Output positions are the original
    /// boundary points, not re-lifted projections.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::SelfIntersecting`] if the boundary crosses
    /// itself and [`TessellationError::Failed`] if it has fewer than 3
    /// distinct points.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, store: &TopologyStore) -> Result<TriangleMesh> {
        let face = store.face(self.face)?;
        let plane = face.plane.clone();
        let outer_3d = store.wire_points(face.outer_wire)?;

        let mut outer_uv: Vec<Point2> = outer_3d.iter().map(|p| plane.project(p)).collect();
        flush_tiny_coordinates(&mut outer_uv);

        let mut cdt = Cdt::new();
        let positions = insert_constraint_loop(&mut cdt, &outer_3d, &outer_uv)?;

        let interior_faces = classify_interior_faces(&cdt);
        let normal = *plane.normal();

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior_faces.contains(&face_handle.fix().index()) {
                continue;
            }

            let mut tri = [0u32; 3];
            for (slot, vh) in tri.iter_mut().zip(face_handle.vertices()) {
                let idx = vh.fix().index();
                *slot = if let Some(&existing) = vertex_map.get(&idx) {
                    existing
                } else {
                    let position = positions.get(&idx).copied().ok_or_else(|| {
                        TessellationError::Failed("triangulation created a vertex".into())
                    })?;
                    let uv = vh.position();
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(position);
                    mesh.normals.push(normal);
                    mesh.uvs.push(Point2::new(uv.x, uv.y));
                    vertex_map.insert(idx, new_idx);
                    new_idx
                };
            }
            mesh.indices.push(tri);
        }

        Ok(mesh)
    }
}

/// Sets coordinates that are rounding noise relative to the loop's extent
/// to exactly zero.
fn flush_tiny_coordinates(uvs: &mut [Point2]) {
    let extent = uvs
        .iter()
        .flat_map(|uv| [uv.x.abs(), uv.y.abs()])
        .fold(0.0_f64, f64::max);
    let limit = (f64::EPSILON * extent).max(MIN_COORDINATE);
    for c in uvs.iter_mut().flat_map(|uv| uv.coords.iter_mut()) {
        if c.abs() < limit {
            *c = 0.0;
        }
    }
}

/// Inserts a closed loop as vertices plus constraint edges.
///
/// `uvs[i]` is the in-plane position of `points[i]`. Returns the original 3D
/// point for each CDT vertex index. Points that project onto an already
/// inserted vertex keep the first position.
fn insert_constraint_loop(
    cdt: &mut Cdt,
    points: &[Point3],
    uvs: &[Point2],
) -> Result<HashMap<usize, Point3>> {
    let mut positions = HashMap::with_capacity(points.len());
    let mut handles: Vec<FixedVertexHandle> = Vec::with_capacity(points.len());
    for (p, uv) in points.iter().zip(uvs) {
        let h = cdt
            .insert(SpadePoint2::new(uv.x, uv.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        positions.entry(h.index()).or_insert(*p);
        if handles.last() != Some(&h) {
            handles.push(h);
        }
    }
    if handles.len() > 1 && handles.first() == handles.last() {
        handles.pop();
    }
    if handles.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::SelfIntersecting.into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(positions)
}

/// Classifies which inner faces of the CDT are inside the polygon using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
