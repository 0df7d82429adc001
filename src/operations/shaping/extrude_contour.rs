use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::Contour;
use crate::math::{Point3, Vector3};
use crate::operations::creation::{MakeFace, MakeWire};
use crate::topology::{SolidId, TopologyStore};

use super::Extrude;

/// Options for [`ExtrudeContour`].
#[derive(Debug, Clone, Copy)]
pub struct ExtrudeOptions {
    /// Distance the profile is swept along +Z.
    pub depth: f64,
    /// Points generated per spline span when flattening the profile.
    pub curve_segments: usize,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self {
            depth: 1.0,
            curve_segments: 12,
        }
    }
}

/// Sweeps a closed 2D contour in the XY plane along +Z into a flat-capped solid.
pub struct ExtrudeContour<'a> {
    contour: &'a Contour,
    options: ExtrudeOptions,
}

impl<'a> ExtrudeContour<'a> {
    /// Creates a new `ExtrudeContour` operation.
    #[must_use]
    pub fn new(contour: &'a Contour, options: ExtrudeOptions) -> Self {
        Self { contour, options }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for a non-positive depth or
    /// zero curve segments, and propagates wire/face errors for contours that
    /// flatten to fewer than 3 distinct points or enclose no area.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let ExtrudeOptions {
            depth,
            curve_segments,
        } = self.options;
        if !(depth.is_finite() && depth > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "extrusion depth must be positive, got {depth}"
            ))
            .into());
        }
        if curve_segments == 0 {
            return Err(
                OperationError::InvalidInput("curve_segments must be at least 1".into()).into(),
            );
        }

        let profile: Vec<Point3> = self
            .contour
            .discretize(curve_segments)
            .into_iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        trace!(points = profile.len(), depth, "extruding contour");

        let wire = MakeWire::new(profile, true).execute(store)?;
        let face = MakeFace::new(wire).execute(store)?;
        Extrude::new(face, Vector3::new(0.0, 0.0, depth)).execute(store)
    }
}
