//! Heart-shaped cake bodies.
//!
//! [`BuildHeart`] samples the heart curve, narrows it toward the tip,
//! straightens the edges into the tip, extrudes the profile and sizes the
//! result so its width is `2 * radius` and its height is `height`.

mod cache;
mod normalize;
mod outline;
mod stitch;
mod tuning;

pub use cache::HeartCache;
pub use outline::{HeartOutline, HeartResolution};
pub use stitch::{assemble_contour, ContourKind, HeartContour};
pub use tuning::HeartTuning;

use tracing::{debug, debug_span};

use crate::error::{OperationError, Result};
use crate::geometry::HeartCurve;
use crate::operations::shaping::{ExtrudeContour, ExtrudeOptions};
use crate::tessellation::{TessellateSolid, TriangleMesh};
use crate::topology::{SolidId, TopologyStore};

use normalize::normalize;

/// Builds a heart-shaped solid of a given footprint radius and height.
///
/// The result is centered on the origin with Y up: its X extent is
/// `2 * radius` and its Y extent is `height`.
#[derive(Debug, Clone, Copy)]
pub struct BuildHeart {
    radius: f64,
    height: f64,
    tuning: HeartTuning,
    resolution: HeartResolution,
}

impl BuildHeart {
    /// Creates a new `BuildHeart` operation with default tuning and resolution.
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius,
            height,
            tuning: HeartTuning::default(),
            resolution: HeartResolution::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: HeartTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: HeartResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sampled and tapered outline, before stitching.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if radius or height is not a
    /// finite positive number.
    pub fn outline(&self) -> Result<HeartOutline> {
        self.check_inputs()?;
        let curve = HeartCurve::new(self.tuning.height_scale())?;
        let count = self.resolution.sample_count(self.radius);
        Ok(HeartOutline::sample(&curve, count).tapered(self.tuning.bottom_taper()))
    }

    /// The closed 2D profile that gets extruded, in raw curve units.
    ///
    /// # Errors
    ///
    /// Same as [`BuildHeart::outline`].
    pub fn contour(&self) -> Result<HeartContour> {
        let outline = self.outline()?;
        assemble_contour(&outline, self.tuning.straight_frac())
    }

    /// Builds the normalized solid into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for invalid radius or height
    /// and propagates kernel errors otherwise.
    pub fn build_solid(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let heart = self.contour()?;
        let options = ExtrudeOptions {
            depth: self.height,
            curve_segments: self.resolution.curve_segments(self.radius),
        };
        debug!(
            kind = ?heart.kind,
            curve_segments = options.curve_segments,
            "extruding heart profile"
        );
        let solid = ExtrudeContour::new(&heart.contour, options).execute(store)?;
        normalize(store, solid, self.radius, self.tuning.length_scale())?;
        Ok(solid)
    }

    /// Builds the heart and tessellates it.
    ///
    /// Deterministic: equal inputs give identical meshes.
    ///
    /// # Errors
    ///
    /// Same as [`BuildHeart::build_solid`].
    pub fn execute(&self) -> Result<TriangleMesh> {
        let _span = debug_span!("build_heart", radius = self.radius, height = self.height).entered();
        let mut store = TopologyStore::new();
        let solid = self.build_solid(&mut store)?;
        let mesh = TessellateSolid::new(solid).execute(&store)?;
        debug!(
            vertices = mesh.vertices.len(),
            triangles = mesh.triangle_count(),
            "heart built"
        );
        Ok(mesh)
    }

    fn check_inputs(&self) -> Result<()> {
        for (name, value) in [("radius", self.radius), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be a finite positive number, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Builds a heart mesh with default tuning and resolution.
///
/// # Errors
///
/// See [`BuildHeart::execute`].
pub fn build_heart(radius: f64, height: f64) -> Result<TriangleMesh> {
    BuildHeart::new(radius, height).execute()
}
