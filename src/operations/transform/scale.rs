use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, Vector3};
use crate::topology::{SolidId, TopologyStore};

use super::GeneralTransform;

/// Scales a solid about a center point, optionally by a different factor per axis.
pub struct Scale {
    solid: SolidId,
    center: Point3,
    factors: Vector3,
}

impl Scale {
    /// Creates a uniform `Scale` operation.
    #[must_use]
    pub fn uniform(solid: SolidId, center: Point3, factor: f64) -> Self {
        Self::non_uniform(solid, center, Vector3::repeat(factor))
    }

    /// Creates a `Scale` operation with one factor per axis.
    #[must_use]
    pub fn non_uniform(solid: SolidId, center: Point3, factors: Vector3) -> Self {
        Self {
            solid,
            center,
            factors,
        }
    }

    /// Executes the scaling, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any factor is zero or
    /// non-finite.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        if self.factors.iter().any(|f| !f.is_finite() || *f == 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "scale factors must be finite and non-zero, got {:?}",
                self.factors.as_slice()
            ))
            .into());
        }
        let t_neg = Matrix4::new_translation(&(-self.center.coords));
        let scale = Matrix4::new_nonuniform_scaling(&self.factors);
        let t_pos = Matrix4::new_translation(&self.center.coords);
        GeneralTransform::new(self.solid, t_pos * scale * t_neg).execute(store)
    }
}
