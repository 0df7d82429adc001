use nalgebra::{Rotation3, Unit};

use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::GeneralTransform;

/// Rotates a solid around an axis.
pub struct Rotate {
    solid: SolidId,
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise when looking
    ///   down the axis towards its origin.
    #[must_use]
    pub fn new(solid: SolidId, axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            solid,
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the axis direction is
    /// zero-length.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        if self.axis_direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = Unit::new_normalize(self.axis_direction);

        // Translate to origin, rotate, translate back
        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let rot = Rotation3::from_axis_angle(&axis, self.angle).to_homogeneous();
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);

        GeneralTransform::new(self.solid, t_pos * rot * t_neg).execute(store)
    }
}
