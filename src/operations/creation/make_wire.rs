use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a wire of straight edges through a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    ///
    /// With `close` set, an extra edge joins the last point back to the first.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if there are too few points
    /// (2 for an open wire, 3 for a closed one) or if any edge would have
    /// zero length.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let n = self.points.len();
        let required = if self.close { 3 } else { 2 };
        if n < required {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {required} points, got {n}"
            ))
            .into());
        }

        let edge_count = if self.close { n } else { n - 1 };
        for i in 0..edge_count {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            if (b - a).norm() < TOLERANCE {
                return Err(OperationError::InvalidInput(format!(
                    "zero-length edge at point {i} ({}, {}, {})",
                    a.x, a.y, a.z
                ))
                .into());
            }
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();

        let edges = (0..edge_count)
            .map(|i| {
                let edge = store.add_edge(EdgeData::new(vertices[i], vertices[(i + 1) % n]));
                OrientedEdge::new(edge, true)
            })
            .collect();

        Ok(store.add_wire(WireData::new(edges, self.close)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn closed_triangle_has_3_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)], true)
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert_eq!(data.edges.len(), 3);
        assert!(data.is_closed);
        assert_eq!(store.wire_points(wire).unwrap().len(), 3);
    }

    #[test]
    fn open_polyline_has_n_minus_1_edges() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0)], false)
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.wire(wire).unwrap().edges.len(), 2);
        assert_eq!(store.wire_points(wire).unwrap().len(), 3);
    }

    #[test]
    fn too_few_points_returns_error() {
        let mut store = TopologyStore::new();
        assert!(MakeWire::new(vec![p(0.0, 0.0), p(1.0, 0.0)], true)
            .execute(&mut store)
            .is_err());
        assert!(MakeWire::new(vec![p(0.0, 0.0)], false)
            .execute(&mut store)
            .is_err());
    }

    #[test]
    fn repeated_point_returns_error() {
        let mut store = TopologyStore::new();
        let result = MakeWire::new(
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)],
            true,
        )
        .execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn closing_onto_first_point_returns_error() {
        let mut store = TopologyStore::new();
        let result = MakeWire::new(
            vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)],
            true,
        )
        .execute(&mut store);
        assert!(result.is_err());
    }
}
