use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::math::polygon_3d::{centroid, newell_normal};
use crate::math::Point3;
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Relative out-of-plane deviation tolerated for a planar face.
const PLANARITY_TOLERANCE: f64 = 1e-9;

/// Creates a planar face bounded by a closed wire.
///
/// The face normal follows the wire's winding (right-hand rule).
pub struct MakeFace {
    outer_wire: WireId,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId) -> Self {
        Self { outer_wire }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] for an open wire and
    /// [`GeometryError::Degenerate`] if the wire encloses no area or is not
    /// planar.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        if !store.wire(self.outer_wire)?.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }
        let points = store.wire_points(self.outer_wire)?;
        let plane = plane_through(&points)?;

        let extent = points
            .iter()
            .map(|p| (p - plane.origin()).norm())
            .fold(1.0_f64, f64::max);
        let limit = PLANARITY_TOLERANCE * extent;
        if let Some(off) = points
            .iter()
            .map(|p| plane.signed_distance(p).abs())
            .find(|d| *d > limit)
        {
            return Err(GeometryError::Degenerate(format!(
                "wire is not planar (deviation {off:e})"
            ))
            .into());
        }

        Ok(store.add_face(FaceData {
            plane,
            outer_wire: self.outer_wire,
        }))
    }
}

/// Plane through the centroid of a closed loop, oriented by its winding.
///
/// # Errors
///
/// Returns an error if the loop encloses no area.
pub(crate) fn plane_through(points: &[Point3]) -> Result<Plane> {
    let normal = newell_normal(points)?;
    Plane::from_normal(centroid(points), normal)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn ccw_square_faces_plus_z() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire).execute(&mut store).unwrap();
        let plane = &store.face(face).unwrap().plane;
        assert!((plane.normal() - Vector3::z()).norm() < 1e-12);
        assert!((plane.origin() - p(0.5, 0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn open_wire_returns_error() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire).execute(&mut store).is_err());
    }

    #[test]
    fn non_planar_wire_returns_error() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(wire).execute(&mut store).is_err());
    }

    #[test]
    fn collinear_wire_returns_error() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)], true)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire).execute(&mut store).is_err());
    }
}
