use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{FaceId, ShellData, SolidId, TopologyStore};

/// Extrudes a planar face along a direction vector into a prism.
///
/// Caps are flat copies of the face; there is no bevel.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is
    /// zero-length or lies in the face's plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        let normal = *face.plane.normal();
        let outer_wire = face.outer_wire;

        let along = normal.dot(&self.direction);
        if along.abs() < TOLERANCE * self.direction.norm() {
            return Err(OperationError::InvalidInput(
                "extrude direction is parallel to the face".into(),
            )
            .into());
        }

        // Orient the base so its winding normal points along the direction:
        // the reversed base then faces away (bottom cap), the translated base
        // faces along (top cap), and side quads face outward.
        let base_points = store.wire_points(outer_wire)?;
        let base_points: Vec<Point3> = if along > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        let top_points: Vec<Point3> = base_points.iter().map(|p| p + self.direction).collect();

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(planar_face(store, bottom_points)?);
        faces.push(planar_face(store, top_points.clone())?);

        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(planar_face(store, quad)?);
        }

        let shell = store.add_shell(ShellData::closed(faces));
        MakeSolid::new(shell).execute(store)
    }
}

/// Creates a planar face from a closed loop of points via `MakeWire` + `MakeFace`.
fn planar_face(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
    let wire = MakeWire::new(points, true).execute(store)?;
    MakeFace::new(wire).execute(store)
}
