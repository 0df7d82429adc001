pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::error::TopologyError;
use crate::math::Point3;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices), so
/// the B-rep graph has no self-referential structures.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

/// Generates `add_*`, `*` and `*_mut` accessors for one entity arena.
macro_rules! entity_accessors {
    ($field:ident, $id:ty, $data:ty, $add:ident, $get:ident, $get_mut:ident, $name:literal) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns the ", $name, " data.")]
        ///
        /// # Errors
        ///
        /// Returns [`TopologyError::EntityNotFound`] if the ID is stale.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Returns the ", $name, " data mutably.")]
        ///
        /// # Errors
        ///
        /// Returns [`TopologyError::EntityNotFound`] if the ID is stale.
        pub fn $get_mut(&mut self, id: $id) -> Result<&mut $data, TopologyError> {
            self.$field
                .get_mut(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    entity_accessors!(vertices, VertexId, VertexData, add_vertex, vertex, vertex_mut, "vertex");
    entity_accessors!(edges, EdgeId, EdgeData, add_edge, edge, edge_mut, "edge");
    entity_accessors!(wires, WireId, WireData, add_wire, wire, wire_mut, "wire");
    entity_accessors!(faces, FaceId, FaceData, add_face, face, face_mut, "face");
    entity_accessors!(shells, ShellId, ShellData, add_shell, shell, shell_mut, "shell");
    entity_accessors!(solids, SolidId, SolidData, add_solid, solid, solid_mut, "solid");

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Positions of the vertices visited by a wire, in traversal order.
    ///
    /// Each oriented edge contributes its leading vertex, so a closed wire
    /// yields each corner exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or any referenced entity is missing.
    pub fn wire_points(&self, wire: WireId) -> Result<Vec<Point3>, TopologyError> {
        let wire = self.wire(wire)?;
        let mut points = Vec::with_capacity(wire.edges.len() + 1);
        for oe in &wire.edges {
            let leading = oe.leading(self.edge(oe.edge)?);
            points.push(self.vertex(leading)?.point);
        }
        if !wire.is_closed {
            if let Some(last) = wire.edges.last() {
                let trailing = last.trailing(self.edge(last.edge)?);
                points.push(self.vertex(trailing)?.point);
            }
        }
        Ok(points)
    }

    /// Faces of a solid's shell, in shell order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or its shell is missing.
    pub fn solid_faces(&self, solid: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let shell = self.solid(solid)?.shell;
        Ok(self.shell(shell)?.faces.clone())
    }

    /// Unique vertices reachable from a solid, in first-visit order.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing.
    pub fn solid_vertices(&self, solid: SolidId) -> Result<Vec<VertexId>, TopologyError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for face_id in self.solid_faces(solid)? {
            let wire = self.wire(self.face(face_id)?.outer_wire)?;
            for oe in &wire.edges {
                let edge = self.edge(oe.edge)?;
                for vid in [edge.start, edge.end] {
                    if seen.insert(vid) {
                        ordered.push(vid);
                    }
                }
            }
        }
        Ok(ordered)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn open_chain(store: &mut TopologyStore, points: &[Point3]) -> WireId {
        let ids: Vec<_> = points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();
        let edges = ids
            .windows(2)
            .map(|w| OrientedEdge::new(store.add_edge(EdgeData::new(w[0], w[1])), true))
            .collect();
        store.add_wire(WireData::new(edges, false))
    }

    #[test]
    fn open_wire_points_include_both_ends() {
        let mut store = TopologyStore::new();
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let wire = open_chain(&mut store, &pts);
        let walked = store.wire_points(wire).unwrap();
        assert_eq!(walked.len(), 3);
        assert!((walked[2] - pts[2]).norm() < 1e-12);
    }

    #[test]
    fn reversed_edge_contributes_its_end_vertex() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(0.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(2.0, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData::new(a, b));
        let wire = store.add_wire(WireData::new(vec![OrientedEdge::new(edge, false)], false));
        let walked = store.wire_points(wire).unwrap();
        assert!((walked[0].x - 2.0).abs() < 1e-12);
        assert!(walked[1].x.abs() < 1e-12);
    }

    #[test]
    fn stale_ids_report_missing_entities() {
        let mut store = TopologyStore::new();
        let v = store.add_vertex(VertexData::new(Point3::origin()));
        let mut other = TopologyStore::new();
        assert!(other.vertex(v).is_err());
        assert!(other.vertex_mut(v).is_err());
        assert!(store.vertex(v).is_ok());
        assert_eq!(store.vertex_count(), 1);
    }
}
